mod context;
pub use context::Context;

mod engine;
pub use engine::{HandlebarsEngine, TemplateEngine};

mod format;
pub use format::{Format, Rustfmt, Unparse};

mod renderer;
pub use renderer::Renderer;

mod sql;

mod template;
pub use template::Template;

use tablegen_core::{GeneratedType, Result};

/// Renders `ty` with a single template source and formats the result.
pub fn render(ty: &GeneratedType, template: &str) -> Result<Vec<u8>> {
    Renderer::from_templates(&[Template::new("custom", template)])?.render(ty)
}
