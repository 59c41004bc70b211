// isoforge-core/src/domain/merge/currencies.rs

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::identifier::{clean_code, clean_currency_name};
use crate::domain::reference::{Country, Currency};
use crate::domain::report::{Issue, RunReport};

/// Keeps the currencies worth emitting, sorted by code.
///
/// A current currency is kept when at least one merged country references it.
/// Deprecated currencies are then unioned in unconditionally: they stand for
/// historical associations the sources no longer publish.
/// `candidates` is in source priority order; the first record of a code wins.
pub fn select_currencies(
    candidates: Vec<Currency>,
    countries: &[Country],
    report: &mut RunReport,
) -> Vec<Currency> {
    let referenced: BTreeSet<&str> = countries
        .iter()
        .filter_map(|c| c.currency.as_deref())
        .collect();

    let (deprecated, current): (Vec<Currency>, Vec<Currency>) = candidates
        .into_iter()
        .map(|c| Currency {
            code: clean_code(&c.code),
            name: clean_currency_name(&c.name),
            symbol: c.symbol.trim().to_string(),
            deprecated: c.deprecated,
        })
        .filter(|c| !c.code.is_empty())
        .partition(|c| c.deprecated);

    let mut selected: BTreeMap<String, Currency> = BTreeMap::new();
    for currency in current {
        if referenced.contains(currency.code.as_str()) && !selected.contains_key(&currency.code) {
            selected.insert(currency.code.clone(), currency);
        }
    }
    for currency in deprecated {
        selected.entry(currency.code.clone()).or_insert(currency);
    }

    for country in countries {
        if let Some(code) = country.currency.as_deref()
            && !selected.contains_key(code)
        {
            report.record(Issue::UnresolvableReference {
                code: country.code.clone(),
                detail: format!("currency '{}' is not published by any source", code),
            });
        }
    }

    selected.into_values().collect()
}
