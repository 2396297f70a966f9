use crate::domain::model::Anchor;
use crate::domain::ports::{RenderSurface, Section};
use crate::utils::error::{Result, SiteError};
use async_trait::async_trait;
use chrono::{Datelike, Local};

/// Writes the current four-digit year into the footer, plus today's date as
/// DD/MM/YYYY when the shell carries a date anchor. Each anchor degrades to
/// a no-op independently when absent.
pub struct FooterStamper;

impl FooterStamper {
    fn stamp(&self, surface: &mut dyn RenderSurface, anchor: Anchor, text: &str) -> Result<()> {
        match surface.write_text(anchor, text) {
            Err(SiteError::MissingTarget { anchor }) => {
                tracing::debug!("no '{}' target in shell, skipping", anchor);
                Ok(())
            }
            other => other,
        }
    }
}

#[async_trait]
impl Section for FooterStamper {
    fn name(&self) -> &'static str {
        "footer"
    }

    async fn apply(&mut self, surface: &mut dyn RenderSurface) -> Result<()> {
        let now = Local::now();
        self.stamp(surface, Anchor::Year, &now.year().to_string())?;
        self.stamp(surface, Anchor::Date, &now.format("%d/%m/%Y").to_string())?;
        Ok(())
    }
}
