#![allow(dead_code)]

use kiln::builder::helpers::Helper;
use kiln::error::Result;
use kiln::renderer::TemplateRenderer;

/// Renders every template as its own bundle path.
pub struct EchoRenderer;

impl TemplateRenderer for EchoRenderer {
    fn render(
        &self,
        name: &str,
        _template: &str,
        _context: &serde_json::Value,
        _helpers: &[Helper],
    ) -> Result<String> {
        Ok(name.to_string())
    }
}
