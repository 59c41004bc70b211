// isoforge-core/src/application/reconcile.rs

// Fetch → normalize → merge → resolve depth → order → expand aliases.
// Pure with respect to the filesystem: the result is an in-memory plan
// the pipeline hands to the writer. Nothing in here aborts the run.

use std::collections::HashSet;
use tracing::{debug, info, instrument};

use crate::domain::emission::{
    LegacyCodeExpander, OrderingEngine, SubdivisionLine, TypeEntry, collect_types,
};
use crate::domain::identifier::clean_code;
use crate::domain::merge::{
    CountryMerger, SubdivisionNormalizer, select_currencies, union_subdivisions,
};
use crate::domain::reference::{Country, Currency};
use crate::domain::report::{Issue, RunReport};
use crate::domain::tables::ReferenceTables;
use crate::error::IsoforgeError;
use crate::ports::ReferenceSource;

/// The providers of one run.
pub struct PipelineSources<'s> {
    /// Standards body: naming and detail.
    pub primary: &'s dyn ReferenceSource,
    /// Gazetteer: existence and continent.
    pub secondary: &'s dyn ReferenceSource,
    /// Market-data sites, consulted for currency records only.
    pub markets: Vec<&'s dyn ReferenceSource>,
}

impl<'s> PipelineSources<'s> {
    pub fn new(primary: &'s dyn ReferenceSource, secondary: &'s dyn ReferenceSource) -> Self {
        Self {
            primary,
            secondary,
            markets: Vec::new(),
        }
    }

    pub fn with_markets(mut self, markets: Vec<&'s dyn ReferenceSource>) -> Self {
        self.markets = markets;
        self
    }
}

/// Ordered subdivision lines for one continent destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContinentFile {
    pub continent: String,
    pub lines: Vec<SubdivisionLine>,
}

impl ContinentFile {
    pub fn file_name(&self) -> String {
        format!("{}.txt", self.continent)
    }
}

/// Everything to emit, already in final order.
#[derive(Debug, Clone, Default)]
pub struct EmissionPlan {
    pub countries: Vec<Country>,
    pub continents: Vec<ContinentFile>,
    pub currencies: Vec<Currency>,
    pub subdivision_types: Vec<TypeEntry>,
}

impl EmissionPlan {
    pub fn subdivision_count(&self) -> usize {
        self.lines().filter(|l| !l.is_alias()).count()
    }

    pub fn alias_count(&self) -> usize {
        self.lines().filter(|l| l.is_alias()).count()
    }

    fn lines(&self) -> impl Iterator<Item = &SubdivisionLine> {
        self.continents.iter().flat_map(|c| c.lines.iter())
    }
}

#[instrument(skip_all)]
pub fn reconcile(
    sources: &PipelineSources<'_>,
    tables: &ReferenceTables,
    unassigned_continent: &str,
    report: &mut RunReport,
) -> EmissionPlan {
    // 1. COUNTRIES
    println!("🌐 Merging countries...");
    let primary_raw = or_report(
        sources.primary.name(),
        "countries",
        sources.primary.countries(),
        report,
    );
    let secondary_raw = or_report(
        sources.secondary.name(),
        "countries",
        sources.secondary.countries(),
        report,
    );
    let primary_codes: HashSet<String> = primary_raw.iter().map(|c| clean_code(&c.code)).collect();
    let countries = CountryMerger::new(tables).merge(primary_raw, secondary_raw, report);
    info!(countries = countries.len(), "Countries merged");

    // 2. SUBDIVISIONS
    // The primary source only knows its own countries; the gazetteer is asked for all of them.
    println!("🗺️  Collecting subdivisions...");
    let normalizer = SubdivisionNormalizer::new(&tables.type_aliases);
    let mut primary_subdivisions = Vec::new();
    let mut secondary_subdivisions = Vec::new();
    for country in &countries {
        let item = format!("subdivisions of {}", country.code);
        if primary_codes.contains(&country.code) {
            let rows = or_report(
                sources.primary.name(),
                &item,
                sources.primary.subdivisions(country),
                report,
            );
            primary_subdivisions.extend(normalizer.normalize_all(country, rows));
        }
        let rows = or_report(
            sources.secondary.name(),
            &item,
            sources.secondary.subdivisions(country),
            report,
        );
        secondary_subdivisions.extend(normalizer.normalize_all(country, rows));
    }
    let subdivisions = union_subdivisions(primary_subdivisions, secondary_subdivisions);
    info!(subdivisions = subdivisions.len(), "Subdivisions merged");

    // 3. ORDER + ALIASES, per continent
    println!("🧠 Ordering subdivisions by continent, country and depth...");
    let expander = LegacyCodeExpander::new(&tables.renames);
    let continents: Vec<ContinentFile> =
        OrderingEngine::group_by_continent(&countries, subdivisions, unassigned_continent)
            .into_iter()
            .map(|group| {
                let ordered = OrderingEngine::order_continent(group.subdivisions, report);
                ContinentFile {
                    continent: group.continent,
                    lines: expander.expand(ordered),
                }
            })
            .collect();
    // Types of the emitted lines, once retired records are dropped
    let subdivision_types = collect_types(
        continents
            .iter()
            .flat_map(|file| file.lines.iter().map(|line| &line.subdivision)),
    );
    debug!(types = subdivision_types.len(), "Subdivision types collected");

    // 4. CURRENCIES (primary first, then market sites)
    println!("💱 Selecting currencies...");
    let mut candidates = or_report(
        sources.primary.name(),
        "currencies",
        sources.primary.currencies(),
        report,
    );
    for market in &sources.markets {
        candidates.extend(or_report(
            market.name(),
            "currencies",
            market.currencies(),
            report,
        ));
    }
    let currencies =
        OrderingEngine::order_currencies(select_currencies(candidates, &countries, report));

    EmissionPlan {
        countries: OrderingEngine::order_countries(&countries),
        continents,
        currencies,
        subdivision_types,
    }
}

/// A failed or empty fetch degrades to an empty list and a `SourceUnavailable` issue.
fn or_report<T>(
    source: &str,
    item: &str,
    fetched: Result<Vec<T>, IsoforgeError>,
    report: &mut RunReport,
) -> Vec<T> {
    let detail = match fetched {
        Ok(records) if !records.is_empty() => {
            debug!(source, item, records = records.len(), "Fetched");
            return records;
        }
        Ok(_) => "empty result".to_string(),
        Err(e) => e.to_string(),
    };
    report.record(Issue::SourceUnavailable {
        source: source.to_string(),
        item: item.to_string(),
        detail,
    });
    Vec::new()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::reference::{RawCountry, RawSubdivision};
    use crate::domain::tables::{RenameEntry, RenameTable};
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemorySource {
        name: &'static str,
        countries: Vec<RawCountry>,
        subdivisions: HashMap<&'static str, Vec<RawSubdivision>>,
        currencies: Vec<Currency>,
    }

    impl ReferenceSource for MemorySource {
        fn name(&self) -> &str {
            self.name
        }

        fn countries(&self) -> Result<Vec<RawCountry>, IsoforgeError> {
            Ok(self.countries.clone())
        }

        fn subdivisions(&self, country: &Country) -> Result<Vec<RawSubdivision>, IsoforgeError> {
            self.subdivisions
                .get(country.code.as_str())
                .cloned()
                .ok_or_else(|| IsoforgeError::InternalError(format!("no page for {}", country.code)))
        }

        fn currencies(&self) -> Result<Vec<Currency>, IsoforgeError> {
            Ok(self.currencies.clone())
        }
    }

    fn country(code: &str, continent: &str, currency: Option<&str>) -> RawCountry {
        RawCountry {
            code: code.to_string(),
            name: code.to_string(),
            continent: continent.to_string(),
            currency: currency.map(String::from),
        }
    }

    fn row(code: &str, kind: &str, parent: Option<&str>) -> RawSubdivision {
        RawSubdivision {
            code: code.to_string(),
            name: code.to_string(),
            kind: kind.to_string(),
            parent: parent.map(String::from),
            language: None,
        }
    }

    fn currency(code: &str, deprecated: bool) -> Currency {
        Currency {
            code: code.to_string(),
            name: code.to_string(),
            symbol: String::new(),
            deprecated,
        }
    }

    fn codes(file: &ContinentFile) -> Vec<&str> {
        file.lines
            .iter()
            .map(|l| l.subdivision.code.as_str())
            .collect()
    }

    fn sources() -> (MemorySource, MemorySource, MemorySource) {
        let primary = MemorySource {
            name: "iso",
            countries: vec![country("FR", "", None), country("US", "", None)],
            subdivisions: HashMap::from([
                (
                    "FR",
                    vec![
                        row("FR-75", "Metropolitan department", Some("FR-IDF")),
                        row("FR-IDF", "Metropolitan region", None),
                        row("FR-GES", "Metropolitan region", None),
                    ],
                ),
                (
                    "US",
                    vec![row("US-LA", "State", Some("US-CA")), row("US-CA", "State", None)],
                ),
            ]),
            currencies: vec![currency("EUR", false), currency("FRF", true)],
        };
        let secondary = MemorySource {
            name: "geonames",
            countries: vec![
                country("FR", "C_EU", Some("EUR")),
                country("US", "C_NA", Some("USD")),
                country("AQ", "C_AN", None),
            ],
            subdivisions: HashMap::from([
                ("FR", vec![row("FR-IDF", "Region", None), row("FR-A", "Region", None)]),
                ("US", vec![]),
            ]),
            ..MemorySource::default()
        };
        let market = MemorySource {
            name: "ifcmarkets",
            currencies: vec![currency("USD", false), currency("XBT", false)],
            ..MemorySource::default()
        };
        (primary, secondary, market)
    }

    #[test]
    fn test_reconcile_end_to_end() -> anyhow::Result<()> {
        let (primary, secondary, market) = sources();
        let tables = ReferenceTables {
            renames: RenameTable::new(vec![RenameEntry {
                deprecated: "FR-A".to_string(),
                current: "FR-GES".to_string(),
            }])?,
            ..ReferenceTables::default()
        };
        let mut report = RunReport::default();

        let plan = reconcile(
            &PipelineSources::new(&primary, &secondary)
                .with_markets(vec![&market as &dyn ReferenceSource]),
            &tables,
            "unassigned",
            &mut report,
        );

        let country_codes: Vec<&str> = plan.countries.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(country_codes, vec!["AQ", "FR", "US"]);

        let continents: Vec<&str> = plan.continents.iter().map(|c| c.continent.as_str()).collect();
        assert_eq!(continents, vec!["C_EU", "C_NA"]);

        // FR-A is superseded by the alias line emitted right after FR-GES
        assert_eq!(
            codes(&plan.continents[0]),
            vec!["FR-GES", "FR-A", "FR-IDF", "FR-75"]
        );
        assert_eq!(
            plan.continents[0].lines[1].alias_of.as_deref(),
            Some("FR-GES")
        );
        // primary wins the FR-IDF tie
        assert_eq!(plan.continents[0].lines[2].subdivision.kind, "metropolitan region");
        assert_eq!(codes(&plan.continents[1]), vec!["US-CA", "US-LA"]);
        assert_eq!(plan.subdivision_count(), 5);
        assert_eq!(plan.alias_count(), 1);

        // "region" only came from the superseded FR-A record of the gazetteer
        let types: Vec<&str> = plan.subdivision_types.iter().map(|t| t.kind.as_str()).collect();
        assert_eq!(
            types,
            vec!["metropolitan department", "metropolitan region", "state"]
        );

        let currency_codes: Vec<&str> = plan.currencies.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(currency_codes, vec!["EUR", "FRF", "USD"]);

        // AQ has no subdivision page at the gazetteer; US returned an empty list
        assert_eq!(report.issues.len(), 2);
        assert!(report.issues.iter().all(|i| matches!(i, Issue::SourceUnavailable { .. })));
        Ok(())
    }

    #[test]
    fn test_unavailable_primary_degrades_to_secondary() {
        let (_, secondary, _) = sources();
        let empty = MemorySource {
            name: "iso",
            ..MemorySource::default()
        };
        let mut report = RunReport::default();

        let plan = reconcile(
            &PipelineSources::new(&empty, &secondary),
            &ReferenceTables::default(),
            "unassigned",
            &mut report,
        );

        assert_eq!(plan.countries.len(), 3);
        assert_eq!(codes(&plan.continents[0]), vec!["FR-A", "FR-IDF"]);
        assert!(report.issues.iter().any(|i| matches!(
            i,
            Issue::SourceUnavailable { source, item, .. } if source == "iso" && item == "countries"
        )));
    }
}
