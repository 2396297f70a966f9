use crate::domain::model::{Anchor, Quote, UtmParams};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Write-only handle over the page shell. Components only ever write into
/// their own anchors; nothing reads the surface back until the final render.
pub trait RenderSurface: Send {
    /// Write plain text into an anchor, replacing prior content. The text is
    /// escaped by the implementation.
    fn write_text(&mut self, anchor: Anchor, text: &str) -> Result<()>;

    /// Write pre-rendered markup into an anchor, replacing prior content.
    fn write_html(&mut self, anchor: Anchor, html: &str) -> Result<()>;

    /// Remove any content previously written to an anchor.
    fn clear(&mut self, anchor: Anchor) -> Result<()>;
}

/// One independent page section (quote, product grid, footer). Sections own
/// disjoint anchors, so the order they run in carries no meaning.
#[async_trait]
pub trait Section: Send {
    fn name(&self) -> &'static str;

    async fn apply(&mut self, surface: &mut dyn RenderSurface) -> Result<()>;
}

/// Source of random indices for quote selection. Injected so tests can pin
/// the selection to a known element.
pub trait IndexSource: Send {
    /// Return an index in `[0, len)`. `len` is always at least 1.
    fn next_index(&mut self, len: usize) -> usize;
}

pub trait ConfigProvider: Send + Sync {
    fn data_endpoint(&self) -> &str;
    fn site_url(&self) -> Option<&str>;
    fn utm(&self) -> Option<&UtmParams>;
    fn cta_caption(&self) -> &str;
    fn quotes(&self) -> &[Quote];
    fn output_path(&self) -> &str;
}

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}
