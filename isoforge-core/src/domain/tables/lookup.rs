// isoforge-core/src/domain/tables/lookup.rs

use crate::domain::identifier::clean_code;
use std::collections::BTreeMap;

/// Continent tags forced for specific countries, whatever the gazetteer says.
#[derive(Debug, Clone)]
pub struct ContinentOverrides(BTreeMap<String, String>);

impl ContinentOverrides {
    pub fn new(raw: BTreeMap<String, String>) -> Self {
        Self(
            raw.into_iter()
                .map(|(code, continent)| (clean_code(&code), continent.trim().to_string()))
                .collect(),
        )
    }

    pub fn get(&self, country_code: &str) -> Option<&str> {
        self.0.get(country_code).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for ContinentOverrides {
    fn default() -> Self {
        // Christmas Island and Timor-Leste are listed under Oceania by the gazetteer.
        let mut raw = BTreeMap::new();
        raw.insert("CX".to_string(), "C_AS".to_string());
        raw.insert("TL".to_string(), "C_AS".to_string());
        Self(raw)
    }
}

/// Static country → currency-code mapping. Takes precedence over the sources.
#[derive(Debug, Clone, Default)]
pub struct CountryCurrencies(BTreeMap<String, String>);

impl CountryCurrencies {
    pub fn new(raw: BTreeMap<String, String>) -> Self {
        Self(
            raw.into_iter()
                .map(|(country, currency)| (clean_code(&country), clean_code(&currency)))
                .collect(),
        )
    }

    pub fn get(&self, country_code: &str) -> Option<&str> {
        self.0.get(country_code).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
