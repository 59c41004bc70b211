// isoforge-core/src/domain/tables/type_alias.rs

use crate::domain::error::DomainError;
use std::collections::BTreeMap;

/// Foreign-language synonyms of subdivision types (`provincia` → `province`).
#[derive(Debug, Clone)]
pub struct TypeAliasTable {
    by_synonym: BTreeMap<String, String>,
}

impl TypeAliasTable {
    pub fn new(canonical: BTreeMap<String, Vec<String>>) -> Result<Self, DomainError> {
        let mut by_synonym: BTreeMap<String, String> = BTreeMap::new();

        for (kind, synonyms) in canonical {
            let kind = kind.trim().to_lowercase();
            for synonym in synonyms.iter().map(|s| s.trim().to_lowercase()) {
                if let Some(previous) = by_synonym.insert(synonym.clone(), kind.clone())
                    && previous != kind
                {
                    return Err(DomainError::TypeAliasInconsistency(format!(
                        "'{}' is a synonym of both '{}' and '{}'",
                        synonym, previous, kind
                    )));
                }
            }
        }

        Ok(Self {
            by_synonym,
        })
    }

    /// The canonical type `kind` is a synonym of, if any.
    pub fn resolve(&self, kind: &str) -> Option<&str> {
        self.by_synonym.get(kind).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_synonym.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_synonym.is_empty()
    }
}

impl Default for TypeAliasTable {
    fn default() -> Self {
        let by_synonym = [
            ("département", "department"),
            ("departamento", "department"),
            ("provincia", "province"),
        ]
        .into_iter()
        .map(|(synonym, kind)| (synonym.to_string(), kind.to_string()))
        .collect();
        Self { by_synonym }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_collapses_known_synonyms() {
        let table = TypeAliasTable::default();
        assert_eq!(table.resolve("departamento"), Some("department"));
        assert_eq!(table.resolve("provincia"), Some("province"));
        assert_eq!(table.resolve("province"), None);
    }

    #[test]
    fn test_synonym_with_two_targets_is_rejected() {
        let mut raw = BTreeMap::new();
        raw.insert("province".to_string(), vec!["provincia".to_string()]);
        raw.insert("region".to_string(), vec!["Provincia".to_string()]);

        let result = TypeAliasTable::new(raw);
        assert!(matches!(
            result,
            Err(DomainError::TypeAliasInconsistency(_))
        ));
    }
}
