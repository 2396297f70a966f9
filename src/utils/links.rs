use crate::domain::model::UtmParams;
use crate::utils::error::{Result, SiteError};
use url::Url;

/// Outbound link decoration: UTM tagging for product links and resolution of
/// relative image paths against the public site URL.
#[derive(Debug, Clone, Default)]
pub struct LinkPolicy {
    site_url: Option<Url>,
    utm: Option<UtmParams>,
}

impl LinkPolicy {
    pub fn new(site_url: Option<&str>, utm: Option<UtmParams>) -> Result<Self> {
        let site_url = match site_url {
            Some(raw) => Some(Url::parse(raw).map_err(|e| SiteError::InvalidConfigValueError {
                field: "site_url".to_string(),
                value: raw.to_string(),
                reason: format!("Invalid URL format: {}", e),
            })?),
            None => None,
        };
        Ok(Self { site_url, utm })
    }

    /// Append the configured UTM parameters to a link unless it already
    /// carries a `utm_source` pair. Links that do not parse as URLs are
    /// passed through untouched.
    pub fn decorate_link(&self, link: &str) -> String {
        let Some(utm) = &self.utm else {
            return link.to_string();
        };
        let Ok(mut url) = Url::parse(link) else {
            return link.to_string();
        };
        if url.query_pairs().any(|(key, _)| key == "utm_source") {
            return link.to_string();
        }
        url.query_pairs_mut()
            .append_pair("utm_source", &utm.source)
            .append_pair("utm_medium", &utm.medium)
            .append_pair("utm_campaign", &utm.campaign);
        url.to_string()
    }

    /// Resolve a relative image path against the site URL. Absolute URLs and
    /// paths without a configured site URL pass through unchanged.
    pub fn resolve_image(&self, image: &str) -> String {
        if image.is_empty() || image.starts_with("http://") || image.starts_with("https://") {
            return image.to_string();
        }
        match &self.site_url {
            Some(base) => base
                .join(image)
                .map(|url| url.to_string())
                .unwrap_or_else(|_| image.to_string()),
            None => image.to_string(),
        }
    }
}
