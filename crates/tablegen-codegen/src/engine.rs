use crate::{sql, Context, Template};

use handlebars::{handlebars_helper, Handlebars};
use std::fmt;
use tablegen_core::{err, Error, GeneratedType, Result};

/// Turns a [`GeneratedType`] into unformatted source text.
pub trait TemplateEngine: fmt::Debug {
    fn render(&self, ty: &GeneratedType) -> Result<String>;
}

/// A [`TemplateEngine`] backed by Handlebars templates.
///
/// Templates are rendered in registration order and their output
/// concatenated. Rendering runs in strict mode: referencing an attribute the
/// model does not have is an error rather than an empty string. Output is
/// not HTML-escaped.
///
/// Besides the [`Context`] attributes, templates can use two helpers:
/// `rust_str` embeds a value as a Rust raw string literal, and `doc` escapes
/// control characters so a value fits on a single comment line.
pub struct HandlebarsEngine {
    registry: Handlebars<'static>,
    names: Vec<String>,
}

handlebars_helper!(rust_str: |s: str| sql::raw_literal(s));
handlebars_helper!(doc: |s: str| doc_line(s));

/// Escapes line breaks and other control characters in `s`.
fn doc_line(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_control() {
                c.escape_default().to_string()
            } else {
                c.to_string()
            }
        })
        .collect()
}

impl HandlebarsEngine {
    pub fn new(templates: &[Template]) -> Result<Self> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_escape_fn(handlebars::no_escape);
        registry.register_helper("rust_str", Box::new(rust_str));
        registry.register_helper("doc", Box::new(doc));

        let mut names = Vec::with_capacity(templates.len());

        for template in templates {
            registry
                .register_template_string(&template.name, &template.source)
                .map_err(|e| {
                    Error::template_parse(e)
                        .context(err!("failed to parse template; name={}", template.name))
                })?;
            names.push(template.name.clone());
        }

        Ok(Self { registry, names })
    }
}

impl TemplateEngine for HandlebarsEngine {
    fn render(&self, ty: &GeneratedType) -> Result<String> {
        let context = Context::new(ty);
        let mut out = String::new();

        for name in &self.names {
            let text = self.registry.render(name, &context).map_err(|e| {
                Error::template_exec(e).context(err!("failed to execute template; name={name}"))
            })?;

            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(&text);
        }

        Ok(out)
    }
}

impl fmt::Debug for HandlebarsEngine {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("HandlebarsEngine")
            .field("templates", &self.names)
            .finish()
    }
}
