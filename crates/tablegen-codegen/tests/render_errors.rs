use tablegen_codegen::{Renderer, Template, TemplateEngine};
use tablegen_core::{
    schema::{Column, Table},
    GeneratedType, KeyStrategy, Result, TypeMap,
};

fn build(name: &str, keys: &KeyStrategy) -> GeneratedType {
    let table = Table {
        columns: vec![Column {
            ordinal: 1,
            name: "id".to_string(),
            data_type: "bigint".to_string(),
            not_null: true,
            default_value: String::new(),
            is_primary_key: true,
        }],
        ..Table::new("public", name)
    };
    GeneratedType::build(&table, &TypeMap::postgresql(), keys).unwrap()
}

#[test]
fn unknown_attribute_is_exec_error() {
    let renderer =
        Renderer::from_templates(&[Template::new("broken", "pub struct {{name}} { {{colour}} }")])
            .unwrap();

    let err = renderer.render(&build("users", &KeyStrategy::new())).unwrap_err();

    assert!(err.is_template_exec(), "{err}");
    assert!(!err.is_format());
    assert!(
        err.to_string()
            .starts_with("failed to render type; table=public.users: failed to execute template; name=broken"),
        "{err}"
    );
}

#[test]
fn unknown_field_attribute_is_exec_error() {
    let renderer = Renderer::from_templates(&[Template::new(
        "broken",
        "pub struct {{name}} { {{#each fields}}pub {{name}}: {{go_type}},{{/each}} }",
    )])
    .unwrap();

    let err = renderer.render(&build("users", &KeyStrategy::new())).unwrap_err();
    assert!(err.is_template_exec(), "{err}");
}

#[test]
fn exec_error_leaves_shared_buffer_untouched() {
    // Only types with a generated key reach the bad reference.
    let renderer = Renderer::from_templates(&[Template::new(
        "partial",
        "pub struct {{name}}; {{#if auto_key}}{{missing}}{{/if}}",
    )])
    .unwrap();

    let keys = KeyStrategy::new().table("accounts", true);
    let types = [build("users", &keys), build("accounts", &keys)];

    let mut out = b"// existing\n".to_vec();
    let err = renderer.render_into(&types, &mut out).unwrap_err();

    assert!(err.is_template_exec(), "{err}");
    assert_eq!(out, b"// existing\n");

    assert!(renderer.render_all(&types).is_err());
}

#[test]
fn unclosed_block_is_parse_error() {
    let err = Renderer::from_templates(&[Template::new(
        "unclosed",
        "pub struct {{name}} { {{#each fields}}pub {{name}}: {{type}}, }",
    )])
    .unwrap_err();

    assert!(err.is_template_parse(), "{err}");
    assert!(
        err.to_string()
            .starts_with("failed to parse template; name=unclosed: invalid template:"),
        "{err}"
    );
}

#[test]
fn invalid_rust_is_format_error() {
    let renderer =
        Renderer::from_templates(&[Template::new("open", "pub struct {{name}} {")]).unwrap();

    let err = renderer.render(&build("users", &KeyStrategy::new())).unwrap_err();
    assert!(err.is_format(), "{err}");
}

#[test]
fn render_all_concatenates_in_order() {
    let renderer =
        Renderer::from_templates(&[Template::new("unit", "pub struct {{name}};")]).unwrap();
    let keys = KeyStrategy::new();

    let out = renderer
        .render_all(&[build("zebras", &keys), build("apples", &keys)])
        .unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "pub struct Zebras;\n\npub struct Apples;\n"
    );
}

/// An engine that does not use templates at all.
#[derive(Debug)]
struct Plain;

impl TemplateEngine for Plain {
    fn render(&self, ty: &GeneratedType) -> Result<String> {
        let fields: String = ty
            .fields
            .iter()
            .map(|f| format!("pub {}: {},", f.name, f.ty))
            .collect();
        Ok(format!("pub struct {} {{ {fields} }}", ty.name))
    }
}

#[test]
fn renderer_accepts_any_engine() {
    let out = Renderer::new(Plain)
        .render(&build("users", &KeyStrategy::new()))
        .unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "pub struct Users {\n    pub id: i64,\n}\n"
    );
}
