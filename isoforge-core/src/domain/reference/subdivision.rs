// isoforge-core/src/domain/reference/subdivision.rs

use serde::{Deserialize, Serialize};

/// A subdivision row as published by a source.
///
/// The standards body publishes one row per language; `language` lets the
/// merger collapse them. A missing `parent` means "direct child of the country".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSubdivision {
    pub code: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// A normalized subdivision, owned by exactly one country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subdivision {
    /// Compound `COUNTRY-LOCAL` code, unique within a run.
    pub code: String,
    pub name: String,
    /// Normalized category tag (`province`, `region`...).
    #[serde(rename = "type")]
    pub kind: String,
    /// Code of the parent subdivision, or of the owning country.
    pub parent: String,
    /// Code of the owning country.
    pub country: String,
}

impl Subdivision {
    pub fn is_direct_child(&self) -> bool {
        self.parent == self.country
    }
}
