use kiln::builder::helpers::Helper;
use kiln::error::Error;
use kiln::renderer::{MiniJinjaRenderer, TemplateRenderer};
use serde_json::json;

#[test]
fn test_renders_with_helpers() {
    let renderer = MiniJinjaRenderer::new();
    let output = renderer
        .render(
            "page.j2",
            "{{ capitalize(name) }} at {{ to_url(name) }}\n",
            &json!({ "name": "getting-started" }),
            &[Helper::Capitalize, Helper::ToUrl],
        )
        .unwrap();
    assert_eq!(output, "Getting Started at /getting-started\n");
}

#[test]
fn test_output_is_not_escaped() {
    let renderer = MiniJinjaRenderer::new();
    let output = renderer
        .render(
            "data.json.j2",
            "{\"html\": \"{{ markup }}\"}",
            &json!({ "markup": "<b>&</b>" }),
            &[],
        )
        .unwrap();
    assert_eq!(output, "{\"html\": \"<b>&</b>\"}");
}

#[test]
fn test_syntax_error_names_the_template() {
    let renderer = MiniJinjaRenderer::new();
    match renderer.render("templates/broken.j2", "{% if %}", &json!({}), &[]) {
        Err(Error::RenderError { template, .. }) => assert_eq!(template, "templates/broken.j2"),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_helpers_are_scoped_to_the_call() {
    let renderer = MiniJinjaRenderer::new();
    let result = renderer.render(
        "year.j2",
        "{{ current_year() }}",
        &json!({}),
        &[Helper::Capitalize],
    );
    assert!(matches!(result, Err(Error::RenderError { .. })));
}
