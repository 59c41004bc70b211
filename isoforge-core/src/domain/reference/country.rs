// isoforge-core/src/domain/reference/country.rs

use serde::{Deserialize, Serialize};

/// A country exactly as one source published it.
/// `continent` may be empty (the standards body does not publish it).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCountry {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub continent: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

/// A fully merged country. Built once by the merger, never repaired in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub code: String,
    pub name: String,
    /// Continent tag (`C_EU`, `C_AS`...). Empty when no source could resolve it.
    pub continent: String,
    pub currency: Option<String>,
}

impl Country {
    pub fn has_continent(&self) -> bool {
        !self.continent.is_empty()
    }
}

impl From<RawCountry> for Country {
    fn from(raw: RawCountry) -> Self {
        Self {
            code: raw.code,
            name: raw.name,
            continent: raw.continent,
            currency: raw.currency,
        }
    }
}
