// isoforge-core/src/domain/project/templates.rs
//
// One line template per entity kind. The defaults produce Java enum constants;
// another target language only needs another set of templates.

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct EnumTemplates {
    /// Fields: code, token, name, continent, currency
    pub country: String,
    /// Fields: code, token, name, type, type_token, parent, parent_token, country
    pub subdivision: String,
    /// Subdivision fields, plus alias_of and alias_of_token
    #[serde(rename = "subdivision-alias")]
    pub subdivision_alias: String,
    /// Fields: code, name, symbol, deprecated
    pub currency: String,
    /// Fields: token, label, type
    #[serde(rename = "subdivision-type")]
    pub subdivision_type: String,
}

impl Default for EnumTemplates {
    fn default() -> Self {
        Self {
            country: r#"{{ token }}("{{ name }}", {{ continent or "null" }}, {{ currency or "null" }}),"#
                .to_string(),
            subdivision: r#"{{ token }}("{{ name }}", {{ type_token }}, {{ parent_token }}),"#
                .to_string(),
            subdivision_alias:
                r#"{{ token }}("{{ name }}", {{ type_token }}, {{ parent_token }}, {{ alias_of_token }}),"#
                    .to_string(),
            // minijinja prints booleans as True/False
            currency: r#"{{ code }}("{{ name }}", "{{ symbol }}", {{ "true" if deprecated else "false" }}),"#
                .to_string(),
            subdivision_type: r#"{{ token }}("{{ label }}"),"#.to_string(),
        }
    }
}
