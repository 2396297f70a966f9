use serde::{Deserialize, Serialize};
use std::fmt;

/// One inspirational sentence from the fixed rotation set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
}

impl Quote {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// One promoted item from the products data file.
///
/// Fields default to empty strings when absent from the source document;
/// a sparse record renders as a sparse card rather than failing the load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub link: String,
}

/// UTM campaign parameters appended to outbound product links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtmParams {
    pub source: String,
    pub medium: String,
    pub campaign: String,
}

/// Named anchor points a render surface exposes for writing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    Quote,
    ProductGrid,
    Year,
    Date,
}

impl Anchor {
    pub const ALL: [Anchor; 4] = [
        Anchor::Quote,
        Anchor::ProductGrid,
        Anchor::Year,
        Anchor::Date,
    ];
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Anchor::Quote => "quote",
            Anchor::ProductGrid => "product-grid",
            Anchor::Year => "year",
            Anchor::Date => "date",
        };
        write!(f, "{}", name)
    }
}

/// Outcome of one page build: which sections wrote content, which were
/// skipped over an absent anchor, and which failed outright.
#[derive(Debug, Default)]
pub struct BuildReport {
    pub applied: Vec<&'static str>,
    pub skipped: Vec<(&'static str, String)>,
    pub failed: Vec<(&'static str, String)>,
}

impl BuildReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}
