// isoforge-core/src/domain/emission/legacy.rs

use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

use crate::domain::reference::Subdivision;
use crate::domain::tables::RenameTable;

/// One emitted subdivision line. `alias_of` is set on soft-deprecated synonyms
/// and points at the canonical code they resolve to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubdivisionLine {
    pub subdivision: Subdivision,
    pub alias_of: Option<String>,
}

impl SubdivisionLine {
    pub fn is_alias(&self) -> bool {
        self.alias_of.is_some()
    }
}

/// Emits, right after each canonical record, one alias record per deprecated
/// code that was renamed into it (ascending by alias code).
pub struct LegacyCodeExpander<'t> {
    renames: &'t RenameTable,
}

impl<'t> LegacyCodeExpander<'t> {
    pub fn new(renames: &'t RenameTable) -> Self {
        Self { renames }
    }

    pub fn expand(&self, ordered: Vec<Subdivision>) -> Vec<SubdivisionLine> {
        let present: HashSet<String> = ordered.iter().map(|s| s.code.clone()).collect();
        let mut lines = Vec::with_capacity(ordered.len());

        for subdivision in ordered {
            // A source still listing the retired code: the alias line replaces it.
            if let Some(current) = self.renames.current_for(&subdivision.code)
                && present.contains(current)
            {
                debug!(code = %subdivision.code, current, "Retired code superseded by alias line");
                continue;
            }

            let aliases: Vec<SubdivisionLine> = self
                .renames
                .aliases_of(&subdivision.code)
                .map(|alias| SubdivisionLine {
                    subdivision: Subdivision {
                        code: alias.to_string(),
                        ..subdivision.clone()
                    },
                    alias_of: Some(subdivision.code.clone()),
                })
                .collect();

            lines.push(SubdivisionLine {
                subdivision,
                alias_of: None,
            });
            lines.extend(aliases);
        }

        lines
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::tables::RenameEntry;
    use anyhow::Result;

    fn sub(code: &str, name: &str) -> Subdivision {
        Subdivision {
            code: code.to_string(),
            name: name.to_string(),
            kind: "metropolitan region".to_string(),
            parent: "FR".to_string(),
            country: "FR".to_string(),
        }
    }

    fn renames(pairs: &[(&str, &str)]) -> Result<RenameTable> {
        Ok(RenameTable::new(
            pairs
                .iter()
                .map(|(d, c)| RenameEntry {
                    deprecated: d.to_string(),
                    current: c.to_string(),
                })
                .collect(),
        )?)
    }

    #[test]
    fn test_aliases_follow_their_canonical_record() -> Result<()> {
        let table = renames(&[("FR-M", "FR-GES"), ("FR-A", "FR-GES"), ("FR-G", "FR-GES")])?;
        let lines = LegacyCodeExpander::new(&table).expand(vec![
            sub("FR-ARA", "Auvergne-Rhône-Alpes"),
            sub("FR-GES", "Grand-Est"),
            sub("FR-HDF", "Hauts-de-France"),
        ]);

        let codes: Vec<&str> = lines.iter().map(|l| l.subdivision.code.as_str()).collect();
        assert_eq!(
            codes,
            vec!["FR-ARA", "FR-GES", "FR-A", "FR-G", "FR-M", "FR-HDF"]
        );

        let alias = &lines[2];
        assert!(alias.is_alias());
        assert_eq!(alias.alias_of.as_deref(), Some("FR-GES"));
        assert_eq!(alias.subdivision.name, "Grand-Est");
        assert_eq!(alias.subdivision.kind, "metropolitan region");
        assert_eq!(alias.subdivision.parent, "FR");
        Ok(())
    }

    #[test]
    fn test_every_rename_entry_with_present_target_is_emitted() -> Result<()> {
        let pairs = [("FR-A", "FR-GES"), ("FR-O", "FR-HDF"), ("FR-Q", "FR-NOR")];
        let table = renames(&pairs)?;
        let lines = LegacyCodeExpander::new(&table)
            .expand(vec![sub("FR-GES", "Grand-Est"), sub("FR-HDF", "Hauts-de-France")]);

        for (deprecated, current) in pairs {
            let target = lines
                .iter()
                .position(|l| l.subdivision.code == current && !l.is_alias());
            let Some(target) = target else {
                // FR-NOR is not part of the output: no alias expected
                assert!(lines.iter().all(|l| l.subdivision.code != deprecated));
                continue;
            };
            let alias = &lines[target + 1];
            assert_eq!(alias.subdivision.code, deprecated);
            assert_eq!(alias.alias_of.as_deref(), Some(current));
        }
        Ok(())
    }

    #[test]
    fn test_retired_record_still_published_is_superseded() -> Result<()> {
        let table = renames(&[("FR-A", "FR-GES")])?;
        let lines = LegacyCodeExpander::new(&table)
            .expand(vec![sub("FR-A", "Alsace"), sub("FR-GES", "Grand-Est")]);

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].subdivision.code, "FR-GES");
        assert_eq!(lines[1].subdivision.name, "Grand-Est");
        Ok(())
    }

    #[test]
    fn test_retired_record_without_target_is_kept() -> Result<()> {
        let table = renames(&[("FR-A", "FR-GES")])?;
        let lines = LegacyCodeExpander::new(&table).expand(vec![sub("FR-A", "Alsace")]);

        assert_eq!(lines.len(), 1);
        assert!(!lines[0].is_alias());
        Ok(())
    }
}
