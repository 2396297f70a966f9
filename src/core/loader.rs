use crate::core::cards::{build_cards, render_grid};
use crate::domain::model::{Anchor, Product};
use crate::domain::ports::{RenderSurface, Section};
use crate::utils::error::{Result, SiteError};
use crate::utils::links::LinkPolicy;
use async_trait::async_trait;
use reqwest::Client;

/// Fetches the product document, renders one card per product and writes the
/// grid. All-or-nothing: any fetch or parse failure surfaces as a single
/// `LoadFailure` and the grid anchor is left untouched.
pub struct ProductLoader {
    client: Client,
    endpoint: String,
    links: LinkPolicy,
    caption: String,
}

impl ProductLoader {
    pub fn new(endpoint: impl Into<String>, links: LinkPolicy, caption: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            links,
            caption: caption.into(),
        }
    }

    /// Retrieve and parse the product sequence. HTTP(S) endpoints are
    /// fetched over the network; anything else is read as a local file.
    pub async fn fetch_products(&self) -> Result<Vec<Product>> {
        if self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://") {
            self.fetch_remote().await
        } else {
            self.fetch_local().await
        }
    }

    async fn fetch_remote(&self) -> Result<Vec<Product>> {
        tracing::debug!("fetching products from {}", self.endpoint);
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(load_failure)?;
        response.json::<Vec<Product>>().await.map_err(load_failure)
    }

    async fn fetch_local(&self) -> Result<Vec<Product>> {
        tracing::debug!("reading products from {}", self.endpoint);
        let bytes = tokio::fs::read(&self.endpoint).await.map_err(load_failure)?;
        serde_json::from_slice(&bytes).map_err(load_failure)
    }
}

fn load_failure(err: impl std::fmt::Display) -> SiteError {
    SiteError::LoadFailure {
        reason: err.to_string(),
    }
}

#[async_trait]
impl Section for ProductLoader {
    fn name(&self) -> &'static str {
        "products"
    }

    async fn apply(&mut self, surface: &mut dyn RenderSurface) -> Result<()> {
        let products = self.fetch_products().await?;
        let cards = build_cards(&products, &self.links, &self.caption);
        let html = render_grid(&cards).map_err(load_failure)?;

        // Only touch the surface once the grid rendered in full.
        surface.clear(Anchor::ProductGrid)?;
        surface.write_html(Anchor::ProductGrid, &html)?;
        tracing::info!("rendered {} product cards", cards.len());
        Ok(())
    }
}
