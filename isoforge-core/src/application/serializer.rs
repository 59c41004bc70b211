// isoforge-core/src/application/serializer.rs

// One strategy per entity kind. Each builds a flat context (tokens already
// computed, name already escaped) and hands it to the line template, so a
// new output format is a new set of templates and nothing else.

use serde_json::json;

use crate::application::ports::TemplateEngine;
use crate::domain::emission::{SubdivisionLine, TypeEntry};
use crate::domain::identifier::{canonical_enum_token, escape_display_name};
use crate::domain::project::{EnumTemplates, ProjectConfig};
use crate::domain::reference::{Country, Currency};
use crate::error::IsoforgeError;

pub struct EnumSerializer<'r, T: TemplateEngine + ?Sized> {
    engine: &'r T,
    templates: &'r EnumTemplates,
    escape_names: bool,
}

impl<'r, T: TemplateEngine + ?Sized> EnumSerializer<'r, T> {
    pub fn new(engine: &'r T, templates: &'r EnumTemplates, escape_names: bool) -> Self {
        Self {
            engine,
            templates,
            escape_names,
        }
    }

    pub fn from_config(engine: &'r T, config: &'r ProjectConfig) -> Self {
        Self::new(engine, &config.templates, config.escape_names)
    }

    fn display(&self, raw: &str) -> String {
        if self.escape_names {
            escape_display_name(raw)
        } else {
            raw.to_string()
        }
    }

    /// An empty continent renders as a missing value (`null` with the default template).
    pub fn country(&self, country: &Country) -> Result<String, IsoforgeError> {
        let continent = country.has_continent().then_some(country.continent.as_str());
        let context = json!({
            "code": country.code,
            "token": canonical_enum_token(&country.code),
            "name": self.display(&country.name),
            "continent": continent,
            "currency": country.currency,
        });
        self.engine.render(&self.templates.country, &context)
    }

    pub fn subdivision(&self, line: &SubdivisionLine) -> Result<String, IsoforgeError> {
        let subdivision = &line.subdivision;
        let context = json!({
            "code": subdivision.code,
            "token": canonical_enum_token(&subdivision.code),
            "name": self.display(&subdivision.name),
            "type": subdivision.kind,
            "type_token": canonical_enum_token(&subdivision.kind),
            "parent": subdivision.parent,
            "parent_token": canonical_enum_token(&subdivision.parent),
            "country": subdivision.country,
            "alias_of": line.alias_of,
            "alias_of_token": line.alias_of.as_deref().map(canonical_enum_token),
        });

        let template = if line.is_alias() {
            &self.templates.subdivision_alias
        } else {
            &self.templates.subdivision
        };
        self.engine.render(template, &context)
    }

    pub fn currency(&self, currency: &Currency) -> Result<String, IsoforgeError> {
        let context = json!({
            "code": currency.code,
            "token": canonical_enum_token(&currency.code),
            "name": self.display(&currency.name),
            "symbol": self.display(&currency.symbol),
            "deprecated": currency.deprecated,
        });
        self.engine.render(&self.templates.currency, &context)
    }

    pub fn subdivision_type(&self, entry: &TypeEntry) -> Result<String, IsoforgeError> {
        let context = json!({
            "token": entry.token,
            "label": self.display(&entry.label),
            "type": entry.kind,
        });
        self.engine.render(&self.templates.subdivision_type, &context)
    }
}
