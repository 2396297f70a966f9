pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::storage::LocalStorage;
pub use adapters::surface::ShellSurface;
pub use config::site::SiteSettings;
pub use config::CliConfig;
pub use core::engine::SiteEngine;
pub use core::loader::ProductLoader;
pub use core::rotator::QuoteRotator;
pub use core::stamper::FooterStamper;
pub use domain::model::{Anchor, BuildReport, Product, Quote, UtmParams};
pub use domain::ports::{ConfigProvider, RenderSurface, Section, Storage};
pub use utils::error::{Result, SiteError};
