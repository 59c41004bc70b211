// isoforge-core/src/infrastructure/render/jinja.rs

// Turns one line template (`{{ token }}("{{ name }}", ...)`) plus a record
// context into the text of one enum constant. The filters below are the
// identifier transforms, so custom templates can reuse them.

use crate::domain::identifier::{canonical_enum_token, escape_display_name, title_case};
use crate::infrastructure::error::InfrastructureError;
use minijinja::Environment;

pub struct JinjaRenderer<'a> {
    env: Environment<'a>,
}

impl<'a> JinjaRenderer<'a> {
    pub fn new() -> Self {
        let mut env = Environment::new();

        // {{ "FR-75" | token }} -> FR_75
        env.add_filter("token", |value: &str| -> String { canonical_enum_token(value) });
        env.add_filter("title", |value: &str| -> String { title_case(value) });
        env.add_filter("escape_name", |value: &str| -> String {
            escape_display_name(value)
        });

        env.add_filter("upper", |value: &str| -> String { value.to_uppercase() });
        env.add_filter("lower", |value: &str| -> String { value.to_lowercase() });

        Self { env }
    }

    pub fn render_line(
        &self,
        template_str: &str,
        context: &serde_json::Value,
    ) -> Result<String, InfrastructureError> {
        self.env
            .render_str(template_str, context)
            .map_err(InfrastructureError::TemplateError)
    }
}

impl<'a> Default for JinjaRenderer<'a> {
    fn default() -> Self {
        Self::new()
    }
}

use crate::application::ports::TemplateEngine;
use crate::error::IsoforgeError;

impl<'a> TemplateEngine for JinjaRenderer<'a> {
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String, IsoforgeError> {
        self.render_line(template, context)
            .map_err(IsoforgeError::Infrastructure)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use anyhow::Result;
    use serde_json::json;

    #[test]
    fn test_render_with_context() -> Result<()> {
        let renderer = JinjaRenderer::new();
        let line = renderer.render_line(
            r#"{{ token }}("{{ name }}", {{ continent or "null" }}),"#,
            &json!({ "token": "FR", "name": "France", "continent": "C_EU" }),
        )?;
        assert_eq!(line, r#"FR("France", C_EU),"#);
        Ok(())
    }

    #[test]
    fn test_missing_value_falls_back() -> Result<()> {
        let renderer = JinjaRenderer::new();
        let line = renderer.render_line(
            r#"{{ continent or "null" }}"#,
            &json!({ "continent": null }),
        )?;
        assert_eq!(line, "null");
        Ok(())
    }

    #[test]
    fn test_identifier_filters() -> Result<()> {
        let renderer = JinjaRenderer::new();
        let line = renderer.render_line(
            r#"{{ code | token }} {{ kind | title }} {{ name | escape_name }}"#,
            &json!({ "code": "US-CA", "kind": "autonomous region", "name": "say \"hi\"" }),
        )?;
        assert_eq!(line, r#"US_CA Autonomous Region say \"hi\""#);
        Ok(())
    }

    #[test]
    fn test_broken_template_is_an_error() {
        let renderer = JinjaRenderer::new();
        let result = TemplateEngine::render(&renderer, "{{ token ", &json!({}));
        assert!(result.is_err());
    }
}
