// isoforge-core/src/domain/emission/type_enum.rs

use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::identifier::{canonical_enum_token, title_case};
use crate::domain::reference::Subdivision;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeEntry {
    pub token: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Distinct subdivision types, one entry per enum token, sorted by token.
/// Two types collapsing into the same token keep the lexicographically smaller one.
pub fn collect_types<'a, I>(subdivisions: I) -> Vec<TypeEntry>
where
    I: IntoIterator<Item = &'a Subdivision>,
{
    let mut by_token: BTreeMap<String, TypeEntry> = BTreeMap::new();

    for subdivision in subdivisions {
        let kind = subdivision.kind.to_lowercase();
        let token = canonical_enum_token(&kind);
        let keep_existing = by_token.get(&token).is_some_and(|e| e.kind <= kind);
        if !keep_existing {
            by_token.insert(
                token.clone(),
                TypeEntry {
                    label: title_case(&kind),
                    token,
                    kind,
                },
            );
        }
    }

    by_token.into_values().collect()
}
