// isoforge-core/src/domain/merge/subdivisions.rs

use std::collections::{HashMap, HashSet};
use tracing::debug;

use crate::domain::identifier::{apply_alias, clean_code, clean_name, normalize_type};
use crate::domain::reference::{Country, RawSubdivision, Subdivision};
use crate::domain::tables::TypeAliasTable;

const PREFERRED_LANGUAGE: &str = "en";

/// The standards body publishes one row per language for the same code.
/// Keeps one row per code: the English one when present, otherwise the first seen.
/// Codes keep the order of their first appearance.
pub fn collapse_language_variants(rows: Vec<RawSubdivision>) -> Vec<RawSubdivision> {
    let mut order: Vec<String> = Vec::new();
    let mut chosen: HashMap<String, RawSubdivision> = HashMap::new();

    for row in rows {
        let code = clean_code(&row.code);
        match chosen.get(&code) {
            None => {
                order.push(code.clone());
                chosen.insert(code, row);
            }
            Some(current) => {
                let current_is_english = current.language.as_deref() == Some(PREFERRED_LANGUAGE);
                let row_is_english = row.language.as_deref() == Some(PREFERRED_LANGUAGE);
                if row_is_english && !current_is_english {
                    chosen.insert(code, row);
                }
            }
        }
    }

    order
        .into_iter()
        .filter_map(|code| chosen.remove(&code))
        .collect()
}

/// Identifier Normalizer applied to subdivision rows.
pub struct SubdivisionNormalizer<'t> {
    aliases: &'t TypeAliasTable,
}

impl<'t> SubdivisionNormalizer<'t> {
    pub fn new(aliases: &'t TypeAliasTable) -> Self {
        Self { aliases }
    }

    pub fn normalize(&self, country: &Country, raw: RawSubdivision) -> Subdivision {
        let parent = raw
            .parent
            .as_deref()
            .map(clean_code)
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| country.code.clone());

        Subdivision {
            code: clean_code(&raw.code),
            name: clean_name(&raw.name),
            kind: apply_alias(&normalize_type(&raw.kind), self.aliases),
            parent,
            country: country.code.clone(),
        }
    }

    pub fn normalize_all(&self, country: &Country, rows: Vec<RawSubdivision>) -> Vec<Subdivision> {
        collapse_language_variants(rows)
            .into_iter()
            .map(|raw| self.normalize(country, raw))
            .collect()
    }
}

/// Unions the subdivisions of both sources, one record per code.
/// On a tie the primary record wins; duplicates inside one source are dropped too.
pub fn union_subdivisions(
    primary: Vec<Subdivision>,
    secondary: Vec<Subdivision>,
) -> Vec<Subdivision> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut merged = Vec::with_capacity(primary.len() + secondary.len());

    for subdivision in primary.into_iter().chain(secondary) {
        if seen.insert(subdivision.code.clone()) {
            merged.push(subdivision);
        } else {
            debug!(code = %subdivision.code, "Duplicate subdivision dropped");
        }
    }

    merged
}
