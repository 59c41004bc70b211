// isoforge-core/src/domain/reference/currency.rs

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub symbol: String,
    /// Withdrawn currencies (and test tokens) are kept regardless of usage.
    #[serde(default)]
    pub deprecated: bool,
}
