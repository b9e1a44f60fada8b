use crate::{Format, HandlebarsEngine, Template, TemplateEngine, Unparse};

use tablegen_core::{err, GeneratedType, Result};

/// Renders generated types through a template engine and a formatting pass.
#[derive(Debug)]
pub struct Renderer {
    engine: Box<dyn TemplateEngine>,
    formatter: Box<dyn Format>,
}

impl Renderer {
    /// A renderer using `engine` and the in-process [`Unparse`] formatter.
    pub fn new(engine: impl TemplateEngine + 'static) -> Self {
        Self {
            engine: Box::new(engine),
            formatter: Box::new(Unparse),
        }
    }

    /// A renderer for the given Handlebars templates.
    pub fn from_templates(templates: &[Template]) -> Result<Self> {
        Ok(Self::new(HandlebarsEngine::new(templates)?))
    }

    /// A renderer for the bundled struct and method templates.
    pub fn bundled() -> Result<Self> {
        Self::from_templates(&Template::bundled())
    }

    /// Replace the formatting pass.
    pub fn formatter(mut self, formatter: impl Format + 'static) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    /// Renders and formats the source for one type.
    pub fn render(&self, ty: &GeneratedType) -> Result<Vec<u8>> {
        let context = || err!("failed to render type; table={}.{}", ty.schema, ty.table_name);

        let text = self.engine.render(ty).map_err(|e| e.context(context()))?;
        let formatted = self
            .formatter
            .format(&text)
            .map_err(|e| e.context(context()))?;

        tracing::debug!(
            table = %ty.table_name,
            bytes = formatted.len(),
            "rendered type"
        );
        Ok(formatted.into_bytes())
    }

    /// Renders every type and concatenates the blocks in order.
    pub fn render_all(&self, types: &[GeneratedType]) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        self.render_into(types, &mut out)?;
        Ok(out)
    }

    /// Appends the rendered blocks of every type to `out`.
    ///
    /// `out` is only written once every block has rendered and formatted
    /// successfully; on error it is left untouched.
    pub fn render_into(&self, types: &[GeneratedType], out: &mut Vec<u8>) -> Result<()> {
        let mut buf = Vec::new();

        for ty in types {
            let block = self.render(ty)?;
            if !buf.is_empty() {
                buf.push(b'\n');
            }
            buf.extend_from_slice(&block);
        }

        out.extend_from_slice(&buf);
        Ok(())
    }
}
