pub mod cards;
pub mod engine;
pub mod loader;
pub mod rotator;
pub mod stamper;

pub use crate::domain::model::{Anchor, BuildReport, Product, Quote};
pub use crate::domain::ports::{ConfigProvider, IndexSource, RenderSurface, Section, Storage};
pub use crate::utils::error::Result;
