// isoforge-core/src/domain/tables/rename.rs
//
// Codes retired by successive ISO 3166-2 revisions, mapped to the code
// that replaced them. Only emission looks at this table: a canonical record
// keeps its identity, the table decides which alias lines follow it.

use crate::domain::error::DomainError;
use crate::domain::identifier::clean_code;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameEntry {
    pub deprecated: String,
    pub current: String,
}

#[derive(Debug, Clone, Default)]
pub struct RenameTable {
    current_by_deprecated: BTreeMap<String, String>,
    deprecated_by_current: BTreeMap<String, BTreeSet<String>>,
}

impl RenameTable {
    /// Builds and validates the table.
    ///
    /// Rejected: a code renamed to itself, a deprecated code pointing at two
    /// different current codes, and any code that is both a target and an alias
    /// (resolution chains must have length 1).
    pub fn new(entries: Vec<RenameEntry>) -> Result<Self, DomainError> {
        let mut current_by_deprecated: BTreeMap<String, String> = BTreeMap::new();

        for entry in entries {
            let deprecated = clean_code(&entry.deprecated);
            let current = clean_code(&entry.current);

            if deprecated.is_empty() || current.is_empty() {
                return Err(DomainError::RenameTableInconsistency(format!(
                    "empty code in entry '{}' -> '{}'",
                    entry.deprecated, entry.current
                )));
            }
            if deprecated == current {
                return Err(DomainError::RenameTableInconsistency(format!(
                    "'{}' is renamed to itself",
                    deprecated
                )));
            }
            if let Some(existing) = current_by_deprecated.get(&deprecated)
                && *existing != current
            {
                return Err(DomainError::RenameTableInconsistency(format!(
                    "'{}' resolves to both '{}' and '{}'",
                    deprecated, existing, current
                )));
            }
            current_by_deprecated.insert(deprecated, current);
        }

        let mut deprecated_by_current: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for (deprecated, current) in &current_by_deprecated {
            if current_by_deprecated.contains_key(current) {
                return Err(DomainError::RenameTableInconsistency(format!(
                    "'{}' is both the target of '{}' and an alias of '{}'",
                    current, deprecated, current_by_deprecated[current]
                )));
            }
            deprecated_by_current
                .entry(current.clone())
                .or_default()
                .insert(deprecated.clone());
        }

        Ok(Self {
            current_by_deprecated,
            deprecated_by_current,
        })
    }

    /// Current code a deprecated code was renamed to.
    pub fn current_for(&self, deprecated: &str) -> Option<&str> {
        self.current_by_deprecated.get(deprecated).map(String::as_str)
    }

    /// Deprecated aliases of a current code, ascending.
    pub fn aliases_of<'a>(&'a self, current: &str) -> impl Iterator<Item = &'a str> + use<'a> {
        self.deprecated_by_current
            .get(current)
            .into_iter()
            .flat_map(|aliases| aliases.iter().map(String::as_str))
    }

    pub fn is_deprecated(&self, code: &str) -> bool {
        self.current_by_deprecated.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.current_by_deprecated.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current_by_deprecated.is_empty()
    }
}
