use crate::core::loader::ProductLoader;
use crate::core::rotator::QuoteRotator;
use crate::core::stamper::FooterStamper;
use crate::domain::model::BuildReport;
use crate::domain::ports::{ConfigProvider, RenderSurface, Section};
use crate::utils::error::{Result, SiteError};
use crate::utils::links::LinkPolicy;

/// Runs the page sections against one surface. Sections own disjoint anchors
/// and a failure in one never blocks the others; contained failures end up
/// in the build report.
pub struct SiteEngine {
    sections: Vec<Box<dyn Section>>,
}

impl SiteEngine {
    pub fn new(sections: Vec<Box<dyn Section>>) -> Self {
        Self { sections }
    }

    /// Standard three-section page: quote, product grid, footer stamp.
    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let rotator = QuoteRotator::new(config.quotes().to_vec())?;
        let links = LinkPolicy::new(config.site_url(), config.utm().cloned())?;
        let loader = ProductLoader::new(config.data_endpoint(), links, config.cta_caption());
        Ok(Self::new(vec![
            Box::new(rotator),
            Box::new(loader),
            Box::new(FooterStamper),
        ]))
    }

    pub async fn assemble(&mut self, surface: &mut dyn RenderSurface) -> BuildReport {
        let mut report = BuildReport::default();

        for section in &mut self.sections {
            let name = section.name();
            tracing::debug!("applying '{}' section", name);
            match section.apply(surface).await {
                Ok(()) => report.applied.push(name),
                Err(err @ SiteError::MissingTarget { .. }) => {
                    tracing::debug!("'{}' section skipped: {}", name, err);
                    report.skipped.push((name, err.to_string()));
                }
                Err(err) => {
                    tracing::warn!("'{}' section failed: {}", name, err);
                    report.failed.push((name, err.to_string()));
                }
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::surface::ShellSurface;
    use crate::domain::model::{Anchor, Quote, UtmParams};
    use httpmock::prelude::*;

    struct TestConfig {
        data_endpoint: String,
    }

    impl ConfigProvider for TestConfig {
        fn data_endpoint(&self) -> &str {
            &self.data_endpoint
        }
        fn site_url(&self) -> Option<&str> {
            None
        }
        fn utm(&self) -> Option<&UtmParams> {
            None
        }
        fn cta_caption(&self) -> &str {
            "Découvrir"
        }
        fn quotes(&self) -> &[Quote] {
            static QUOTES: std::sync::OnceLock<Vec<Quote>> = std::sync::OnceLock::new();
            QUOTES.get_or_init(|| vec![Quote::new("une seule citation")])
        }
        fn output_path(&self) -> &str {
            "./dist"
        }
    }

    const FULL_SHELL: &str = "<h2>{{QUOTE}}</h2><main>{{PRODUCTS}}</main><footer>{{YEAR}}</footer>";

    #[tokio::test]
    async fn all_sections_apply_on_a_full_shell() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([
                    {"title": "A", "description": "d", "image": "i.png", "link": "https://x"}
                ]));
        });

        let config = TestConfig {
            data_endpoint: server.url("/"),
        };
        let mut engine = SiteEngine::from_config(&config).unwrap();
        let mut surface = ShellSurface::new(FULL_SHELL);
        let report = engine.assemble(&mut surface).await;

        assert_eq!(report.applied, vec!["quote", "products", "footer"]);
        assert!(report.is_clean());

        let html = surface.render();
        assert!(html.contains("une seule citation"));
        assert!(html.contains("product-card"));
    }

    #[tokio::test]
    async fn load_failure_does_not_block_siblings() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/");
            then.status(500);
        });

        let config = TestConfig {
            data_endpoint: server.url("/"),
        };
        let mut engine = SiteEngine::from_config(&config).unwrap();
        let mut surface = ShellSurface::new(FULL_SHELL);
        let report = engine.assemble(&mut surface).await;

        assert_eq!(report.applied, vec!["quote", "footer"]);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, "products");

        let html = surface.render();
        assert!(html.contains("une seule citation"));
        assert!(!html.contains("product-card"));
    }

    #[tokio::test]
    async fn missing_quote_anchor_is_skipped_not_fatal() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([]));
        });

        let config = TestConfig {
            data_endpoint: server.url("/"),
        };
        let mut engine = SiteEngine::from_config(&config).unwrap();
        let mut surface = ShellSurface::new("<main>{{PRODUCTS}}</main><footer>{{YEAR}}</footer>");
        let report = engine.assemble(&mut surface).await;

        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].0, "quote");
        assert_eq!(report.applied, vec!["products", "footer"]);
        assert!(report.is_clean());
    }

    #[tokio::test]
    async fn sections_write_into_disjoint_anchors() {
        struct Marker(&'static str, Anchor);

        #[async_trait::async_trait]
        impl Section for Marker {
            fn name(&self) -> &'static str {
                self.0
            }
            async fn apply(&mut self, surface: &mut dyn RenderSurface) -> crate::Result<()> {
                surface.write_text(self.1, self.0)
            }
        }

        let mut engine = SiteEngine::new(vec![
            Box::new(Marker("left", Anchor::Quote)),
            Box::new(Marker("right", Anchor::Year)),
        ]);
        let mut surface = ShellSurface::new("{{QUOTE}}|{{YEAR}}");
        let report = engine.assemble(&mut surface).await;

        assert_eq!(report.applied, vec!["left", "right"]);
        assert_eq!(surface.render(), "left|right");
    }
}
