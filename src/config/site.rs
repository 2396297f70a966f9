use crate::config::CliConfig;
use crate::domain::model::{Quote, UtmParams};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_endpoint, validate_non_empty_string, validate_path, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_ENDPOINT: &str = "https://lueur-quotidienne.netlify.app/assets/data/products.json";
const DEFAULT_CTA_CAPTION: &str = "Découvrir";

/// Optional site configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    pub site: Option<SiteSection>,
    pub data: Option<DataSection>,
    pub utm: Option<UtmParams>,
    #[serde(default)]
    pub quotes: Vec<Quote>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteSection {
    pub url: Option<String>,
    pub cta_caption: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataSection {
    pub endpoint: Option<String>,
}

impl SiteConfig {
    pub fn from_str(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_str(&raw)
    }
}

/// Fully resolved settings: CLI flags override the config file, which
/// overrides built-in defaults.
#[derive(Debug, Clone)]
pub struct SiteSettings {
    data_endpoint: String,
    site_url: Option<String>,
    utm: Option<UtmParams>,
    cta_caption: String,
    quotes: Vec<Quote>,
    output_path: String,
}

impl SiteSettings {
    pub fn resolve(cli: &CliConfig) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => SiteConfig::load(path)?,
            None => SiteConfig::default(),
        };
        Ok(Self::merge(cli, file))
    }

    fn merge(cli: &CliConfig, file: SiteConfig) -> Self {
        let site = file.site.unwrap_or_default();
        let data = file.data.unwrap_or_default();

        Self {
            data_endpoint: cli
                .data_endpoint
                .clone()
                .or(data.endpoint)
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            site_url: cli.site_url.clone().or(site.url),
            utm: file.utm,
            cta_caption: site
                .cta_caption
                .unwrap_or_else(|| DEFAULT_CTA_CAPTION.to_string()),
            quotes: if file.quotes.is_empty() {
                default_quotes()
            } else {
                file.quotes
            },
            output_path: cli.output_path.clone(),
        }
    }
}

impl ConfigProvider for SiteSettings {
    fn data_endpoint(&self) -> &str {
        &self.data_endpoint
    }

    fn site_url(&self) -> Option<&str> {
        self.site_url.as_deref()
    }

    fn utm(&self) -> Option<&UtmParams> {
        self.utm.as_ref()
    }

    fn cta_caption(&self) -> &str {
        &self.cta_caption
    }

    fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }
}

impl Validate for SiteSettings {
    fn validate(&self) -> Result<()> {
        validate_endpoint("data_endpoint", &self.data_endpoint)?;
        validate_path("output_path", &self.output_path)?;
        validate_non_empty_string("cta_caption", &self.cta_caption)?;
        if let Some(url) = &self.site_url {
            validate_url("site_url", url)?;
        }
        if let Some(utm) = &self.utm {
            validate_non_empty_string("utm.source", &utm.source)?;
            validate_non_empty_string("utm.medium", &utm.medium)?;
            validate_non_empty_string("utm.campaign", &utm.campaign)?;
        }
        Ok(())
    }
}

/// House quote set, used when the config file supplies none.
pub fn default_quotes() -> Vec<Quote> {
    [
        "La lumière que tu cherches à l'extérieur brille déjà en toi.",
        "Chaque jour est une nouvelle chance de semer des graines de bonheur.",
        "Un petit pas chaque matin éclaire tout le chemin.",
        "La douceur que tu offres aux autres revient toujours vers toi.",
        "Respire : ce moment est déjà un cadeau.",
        "Ce que tu arroses aujourd'hui fleurira demain.",
    ]
    .into_iter()
    .map(Quote::new)
    .collect()
}
