// isoforge-core/src/domain/emission/ordering.rs

use std::collections::{BTreeMap, HashMap};

use crate::domain::hierarchy::HierarchyResolver;
use crate::domain::reference::{Country, Currency, Subdivision};
use crate::domain::report::RunReport;

/// All subdivisions emitted to one destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContinentGroup {
    pub continent: String,
    pub subdivisions: Vec<Subdivision>,
}

/// Deterministic total order for emission.
pub struct OrderingEngine;

impl OrderingEngine {
    /// Partitions subdivisions by the continent of their owning country.
    /// Countries without continent (or unknown to `countries`) land in `unassigned`.
    /// Groups come back sorted by continent tag.
    pub fn group_by_continent(
        countries: &[Country],
        subdivisions: Vec<Subdivision>,
        unassigned: &str,
    ) -> Vec<ContinentGroup> {
        let continent_of: HashMap<&str, &str> = countries
            .iter()
            .filter(|c| c.has_continent())
            .map(|c| (c.code.as_str(), c.continent.as_str()))
            .collect();

        let mut groups: BTreeMap<String, Vec<Subdivision>> = BTreeMap::new();
        for subdivision in subdivisions {
            let continent = continent_of
                .get(subdivision.country.as_str())
                .copied()
                .unwrap_or(unassigned);
            groups
                .entry(continent.to_string())
                .or_default()
                .push(subdivision);
        }

        groups
            .into_iter()
            .map(|(continent, subdivisions)| ContinentGroup {
                continent,
                subdivisions,
            })
            .collect()
    }

    /// Orders the subdivisions of one continent:
    /// country (first encountered once sorted by code), then depth ascending,
    /// then code (ordinal) inside a depth tier.
    ///
    /// The input is sorted by code first, so any permutation of the same
    /// records produces the same output.
    pub fn order_continent(
        subdivisions: Vec<Subdivision>,
        report: &mut RunReport,
    ) -> Vec<Subdivision> {
        let mut subdivisions = subdivisions;
        subdivisions.sort_by(|a, b| a.code.cmp(&b.code));

        let mut country_index: HashMap<String, usize> = HashMap::new();
        let mut by_country: Vec<(String, Vec<Subdivision>)> = Vec::new();
        for subdivision in subdivisions {
            let index = *country_index
                .entry(subdivision.country.clone())
                .or_insert_with(|| {
                    by_country.push((subdivision.country.clone(), Vec::new()));
                    by_country.len() - 1
                });
            by_country[index].1.push(subdivision);
        }

        let mut ordered = Vec::new();
        for (country, peers) in &by_country {
            let resolver = HierarchyResolver::new(country, peers);

            let mut tiers: BTreeMap<usize, Vec<&Subdivision>> = BTreeMap::new();
            for subdivision in peers {
                tiers
                    .entry(resolver.level(subdivision, report))
                    .or_default()
                    .push(subdivision);
            }

            for (_, mut tier) in tiers {
                tier.sort_by(|a, b| a.code.cmp(&b.code));
                ordered.extend(tier.into_iter().cloned());
            }
        }

        ordered
    }

    /// Flat country list: by code, ordinal ascending.
    pub fn order_countries(countries: &[Country]) -> Vec<Country> {
        let mut sorted = countries.to_vec();
        sorted.sort_by(|a, b| a.code.cmp(&b.code));
        sorted
    }

    /// Currency list: by code, ordinal ascending.
    pub fn order_currencies(currencies: Vec<Currency>) -> Vec<Currency> {
        let mut sorted = currencies;
        sorted.sort_by(|a, b| a.code.cmp(&b.code));
        sorted
    }
}
