// isoforge-core/src/domain/merge/countries.rs

use std::collections::{HashMap, HashSet};
use tracing::debug;

use crate::domain::identifier::{clean_code, clean_name};
use crate::domain::reference::{Country, RawCountry};
use crate::domain::report::{Issue, RunReport};
use crate::domain::tables::{ContinentOverrides, CountryCurrencies, ReferenceTables};

pub struct CountryMerger<'t> {
    continent_overrides: &'t ContinentOverrides,
    country_currencies: &'t CountryCurrencies,
}

impl<'t> CountryMerger<'t> {
    pub fn new(tables: &'t ReferenceTables) -> Self {
        Self {
            continent_overrides: &tables.continent_overrides,
            country_currencies: &tables.country_currencies,
        }
    }

    /// Merges the primary (standards body) and secondary (gazetteer) country lists.
    ///
    /// Primary countries come first, in their published order, with continent taken
    /// from the secondary entry of the same code. Secondary-only countries follow.
    /// A country left without continent is kept and reported.
    pub fn merge(
        &self,
        primary: Vec<RawCountry>,
        secondary: Vec<RawCountry>,
        report: &mut RunReport,
    ) -> Vec<Country> {
        let mut secondary_order: Vec<String> = Vec::new();
        let mut secondary_by_code: HashMap<String, RawCountry> = HashMap::new();
        for raw in secondary {
            let code = clean_code(&raw.code);
            if secondary_by_code.contains_key(&code) {
                debug!(code = %code, "Duplicate secondary country ignored");
                continue;
            }
            secondary_order.push(code.clone());
            secondary_by_code.insert(code, raw);
        }

        let mut merged = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        for raw in primary {
            let code = clean_code(&raw.code);
            if !seen.insert(code.clone()) {
                debug!(code = %code, "Duplicate primary country ignored");
                continue;
            }

            let secondary = secondary_by_code.get(&code);
            let continent = self
                .continent_for(&code, secondary.map(|s| s.continent.as_str()))
                .unwrap_or_default();
            let currency = self.currency_for(
                &code,
                [
                    secondary.and_then(|s| s.currency.as_deref()),
                    raw.currency.as_deref(),
                ],
            );

            let country = Country {
                name: clean_name(&raw.name),
                code,
                continent,
                currency,
            };
            self.check_continent(&country, secondary.is_some(), report);
            merged.push(country);
        }

        for code in secondary_order {
            if seen.contains(&code) {
                continue;
            }
            let Some(raw) = secondary_by_code.remove(&code) else {
                continue;
            };

            let continent = self
                .continent_for(&code, Some(raw.continent.as_str()))
                .unwrap_or_default();
            let currency = self.currency_for(&code, [raw.currency.as_deref(), None]);

            let country = Country {
                name: clean_name(&raw.name),
                code,
                continent,
                currency,
            };
            self.check_continent(&country, true, report);
            merged.push(country);
        }

        merged
    }

    fn continent_for(&self, code: &str, published: Option<&str>) -> Option<String> {
        self.continent_overrides
            .get(code)
            .or(published)
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(String::from)
    }

    fn currency_for(&self, code: &str, published: [Option<&str>; 2]) -> Option<String> {
        self.country_currencies
            .get(code)
            .map(String::from)
            .or_else(|| {
                published
                    .into_iter()
                    .flatten()
                    .map(clean_code)
                    .find(|c| !c.is_empty())
            })
    }

    fn check_continent(&self, country: &Country, in_secondary: bool, report: &mut RunReport) {
        if country.has_continent() {
            return;
        }
        let detail = if in_secondary {
            "secondary source publishes no continent for this country"
        } else {
            "country is absent from the secondary source, continent left empty"
        };
        report.record(Issue::UnresolvableReference {
            code: country.code.clone(),
            detail: detail.to_string(),
        });
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn raw(code: &str, name: &str, continent: &str) -> RawCountry {
        RawCountry {
            code: code.to_string(),
            name: name.to_string(),
            continent: continent.to_string(),
            currency: None,
        }
    }

    #[test]
    fn test_continent_is_repaired_from_secondary() {
        let tables = ReferenceTables::default();
        let mut report = RunReport::default();

        let merged = CountryMerger::new(&tables).merge(
            vec![raw("FR", "France", "")],
            vec![raw("FR", "France (Republic)", "C_EU")],
            &mut report,
        );

        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].continent, "C_EU");
        // primary wins for naming
        assert_eq!(merged[0].name, "France");
        assert!(!report.has_issues());
    }

    #[test]
    fn test_secondary_only_country_is_appended() {
        let tables = ReferenceTables::default();
        let mut report = RunReport::default();

        let merged = CountryMerger::new(&tables).merge(
            vec![raw("FR", "France", "")],
            vec![raw("FR", "France", "C_EU"), raw("AQ", "Antarctica", "C_AN")],
            &mut report,
        );

        let codes: Vec<&str> = merged.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, vec!["FR", "AQ"]);
        assert_eq!(merged[1].name, "Antarctica");
        assert_eq!(merged[1].continent, "C_AN");
    }

    #[test]
    fn test_missing_cross_reference_leaves_continent_empty_and_reports() {
        let tables = ReferenceTables::default();
        let mut report = RunReport::default();

        let merged =
            CountryMerger::new(&tables).merge(vec![raw("XK", "Kosovo", "")], vec![], &mut report);

        assert_eq!(merged[0].continent, "");
        assert!(matches!(
            report.issues.as_slice(),
            [Issue::UnresolvableReference { code, .. }] if code == "XK"
        ));
    }

    #[test]
    fn test_overrides_and_static_currency_win() {
        let mut currencies = BTreeMap::new();
        currencies.insert("TL".to_string(), "USD".to_string());
        let tables = ReferenceTables {
            country_currencies: CountryCurrencies::new(currencies),
            ..ReferenceTables::default()
        };
        let mut report = RunReport::default();

        let mut gazetteer = raw("TL", "Timor-Leste", "C_OC");
        gazetteer.currency = Some("AUD".to_string());

        let merged = CountryMerger::new(&tables).merge(
            vec![raw("TL", "Timor-Leste", "")],
            vec![gazetteer],
            &mut report,
        );

        assert_eq!(merged[0].continent, "C_AS");
        assert_eq!(merged[0].currency.as_deref(), Some("USD"));
    }

    #[test]
    fn test_secondary_currency_is_assigned() {
        let tables = ReferenceTables::default();
        let mut report = RunReport::default();

        let mut gazetteer = raw("FR", "France", "C_EU");
        gazetteer.currency = Some("eur".to_string());

        let merged = CountryMerger::new(&tables).merge(
            vec![raw("FR", "France", "")],
            vec![gazetteer],
            &mut report,
        );
        assert_eq!(merged[0].currency.as_deref(), Some("EUR"));
    }
}
