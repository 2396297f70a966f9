use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("render target '{anchor}' is absent from the page shell")]
    MissingTarget { anchor: String },

    #[error("product data load failed: {reason}")]
    LoadFailure { reason: String },

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("template rendering failed: {0}")]
    TemplateError(#[from] askama::Error),

    #[error("config file parse error: {0}")]
    ConfigParseError(#[from] toml::de::Error),

    #[error("configuration error: {message}")]
    ConfigError { message: String },

    #[error("invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Contained within one section; the page still builds.
    Low,
    /// Transient, worth re-running.
    Medium,
    /// The build produced no page.
    High,
    /// Bad configuration; nothing was attempted.
    Critical,
}

impl SiteError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SiteError::MissingTarget { .. } | SiteError::LoadFailure { .. } => ErrorSeverity::Low,
            SiteError::HttpError(_) => ErrorSeverity::Medium,
            SiteError::IoError(_) | SiteError::JsonError(_) | SiteError::TemplateError(_) => {
                ErrorSeverity::High
            }
            SiteError::ConfigParseError(_)
            | SiteError::ConfigError { .. }
            | SiteError::InvalidConfigValueError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SiteError::MissingTarget { anchor } => {
                format!("The page shell has no '{}' placeholder; that section was skipped.", anchor)
            }
            SiteError::LoadFailure { reason } => {
                format!("Could not load the product data ({}); the grid stays empty.", reason)
            }
            SiteError::HttpError(e) => format!("A network request failed: {}", e),
            SiteError::IoError(e) => format!("A file operation failed: {}", e),
            SiteError::JsonError(e) => format!("A JSON document could not be parsed: {}", e),
            SiteError::TemplateError(e) => format!("Page rendering failed: {}", e),
            SiteError::ConfigParseError(e) => format!("The site config file is not valid TOML: {}", e),
            SiteError::ConfigError { message } => format!("Configuration problem: {}", message),
            SiteError::InvalidConfigValueError { field, value, reason } => {
                format!("Configuration value '{}' = '{}' is invalid: {}", field, value, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SiteError::MissingTarget { .. } => {
                "Add the placeholder to the shell template, or ignore if the section is unwanted."
            }
            SiteError::LoadFailure { .. } | SiteError::HttpError(_) => {
                "Check that the data endpoint is reachable and serves a JSON array of products."
            }
            SiteError::IoError(_) => "Check file paths and directory permissions.",
            SiteError::JsonError(_) => "Validate the data file against the expected product schema.",
            SiteError::TemplateError(_) => "Check the card template for syntax errors.",
            SiteError::ConfigParseError(_)
            | SiteError::ConfigError { .. }
            | SiteError::InvalidConfigValueError { .. } => {
                "Fix the flagged setting in the CLI flags or the site config file."
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
