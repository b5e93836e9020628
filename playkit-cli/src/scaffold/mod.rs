//! Project scaffolding
//!
//! [`ProjectMaterializer`] creates whole projects from the template registry and
//! [`add_unit`] appends single stubs to an existing one.

pub mod fs;
pub mod materializer;
pub mod naming;
pub mod units;

use handlebars::Handlebars;

pub use materializer::{GenerationOptions, MaterializeReport, ProjectMaterializer};
pub use units::{add_unit, UnitKind};

#[allow(missing_docs)]
mod helpers {
    use handlebars::handlebars_helper;

    // Quoted, escaped string literal for generated TypeScript
    handlebars_helper!(js_string: |value: str| serde_json::to_string(value).unwrap_or_default());

    // Text content for generated HTML
    handlebars_helper!(html_text: |value: str| handlebars::html_escape(value));
}

use helpers::{html_text, js_string};

/// Handlebars registry for generated source code
fn renderer() -> Handlebars<'static> {
    let mut handlebars = Handlebars::new();

    // Disable HTML escaping since we're generating code
    handlebars.register_escape_fn(handlebars::no_escape);
    handlebars.register_helper("js_string", Box::new(js_string));
    handlebars.register_helper("html_text", Box::new(html_text));

    handlebars
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_js_string_quotes_and_escapes() {
        let rendered = renderer()
            .render_template(
                "const a = {{js_string name}};",
                &json!({ "name": "say \"hi\" \\ now" }),
            )
            .unwrap();
        assert_eq!(rendered, r#"const a = "say \"hi\" \\ now";"#);
    }

    #[test]
    fn test_html_text_escapes_markup() {
        let rendered = renderer()
            .render_template(
                "<title>{{html_text title}}</title>",
                &json!({ "title": "<b>&Co</b>" }),
            )
            .unwrap();
        assert_eq!(rendered, "<title>&lt;b&gt;&amp;Co&lt;/b&gt;</title>");
    }
}
