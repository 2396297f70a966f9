use crate::domain::model::{Anchor, Quote};
use crate::domain::ports::{IndexSource, RenderSurface, Section};
use crate::utils::error::{Result, SiteError};
use async_trait::async_trait;
use rand::Rng;

/// Production index source backed by the thread RNG. Uniform over `[0, len)`,
/// independent draws.
pub struct ThreadRngIndex;

impl IndexSource for ThreadRngIndex {
    fn next_index(&mut self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Picks one quote at random from the fixed set and writes it into the quote
/// anchor. Holds no state between invocations beyond the quote set itself.
pub struct QuoteRotator {
    quotes: Vec<Quote>,
    index: Box<dyn IndexSource>,
}

impl QuoteRotator {
    pub fn new(quotes: Vec<Quote>) -> Result<Self> {
        Self::with_index_source(quotes, Box::new(ThreadRngIndex))
    }

    pub fn with_index_source(quotes: Vec<Quote>, index: Box<dyn IndexSource>) -> Result<Self> {
        if quotes.is_empty() {
            return Err(SiteError::ConfigError {
                message: "quote set must contain at least one quote".to_string(),
            });
        }
        Ok(Self { quotes, index })
    }

    /// Select one quote. Every call draws a fresh index.
    pub fn pick(&mut self) -> &Quote {
        let idx = self.index.next_index(self.quotes.len());
        &self.quotes[idx]
    }
}

#[async_trait]
impl Section for QuoteRotator {
    fn name(&self) -> &'static str {
        "quote"
    }

    async fn apply(&mut self, surface: &mut dyn RenderSurface) -> Result<()> {
        let text = self.pick().text.clone();
        surface.write_text(Anchor::Quote, &text)
    }
}
