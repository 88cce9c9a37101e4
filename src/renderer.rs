//! Template rendering for kiln.
//! Wraps MiniJinja and exposes each builder's helper table to templates as
//! plain functions.

use crate::builder::helpers::{self, Helper};
use crate::error::{Error, Result};
use minijinja::{AutoEscape, Environment};

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template with the given context and helper functions.
    ///
    /// # Arguments
    /// * `name` - Identifier reported in errors, usually the bundle path
    /// * `template` - Template source
    /// * `context` - Context variables for rendering
    /// * `helpers` - Functions made callable from the template
    ///
    /// # Returns
    /// * `Result<String>` - Rendered text
    fn render(
        &self,
        name: &str,
        template: &str,
        context: &serde_json::Value,
        helpers: &[Helper],
    ) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        // generated sources are never HTML or JSON documents to be escaped
        env.set_auto_escape_callback(|_| AutoEscape::None);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

fn register(env: &mut Environment<'static>, helper: Helper) {
    let name = helper.name();
    match helper {
        Helper::Capitalize => env.add_function(name, |s: String| helpers::capitalize(&s)),
        Helper::ToTitle => env.add_function(name, |s: String| helpers::to_title(&s)),
        Helper::ToSlug => env.add_function(name, |s: String| helpers::to_slug(&s)),
        Helper::ToSnakeCase => env.add_function(name, |s: String| helpers::to_snake_case(&s)),
        Helper::ToVariableName => {
            env.add_function(name, |s: String| helpers::to_variable_name(&s))
        }
        Helper::ToLibFile => env.add_function(name, |s: String| helpers::to_lib_file(&s)),
        Helper::ReplaceIfNested => {
            env.add_function(name, |s: String| helpers::replace_if_nested(&s))
        }
        Helper::ToUrl => env.add_function(name, |s: String| helpers::to_url(&s)),
        Helper::Trimmed => env.add_function(name, |s: String| helpers::trimmed(&s)),
        Helper::PlusOne => env.add_function(name, helpers::plus_one),
        Helper::Sum => env.add_function(name, helpers::sum),
        Helper::StringsJoin => env.add_function(name, |items: Vec<String>, sep: String| {
            helpers::strings_join(&items, &sep)
        }),
        Helper::Today => env.add_function(name, helpers::today),
        Helper::CurrentYear => env.add_function(name, helpers::current_year),
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders a template using MiniJinja.
    ///
    /// # Errors
    /// * `Error::RenderError` if the template fails to parse or evaluate
    fn render(
        &self,
        name: &str,
        template: &str,
        context: &serde_json::Value,
        helpers: &[Helper],
    ) -> Result<String> {
        let mut env = self.env.clone();
        for helper in helpers {
            register(&mut env, *helper);
        }

        let wrap = |source| Error::RenderError {
            template: name.to_string(),
            source,
        };
        env.add_template_owned(name.to_string(), template.to_string())
            .map_err(wrap)?;
        let tmpl = env.get_template(name).map_err(wrap)?;
        tmpl.render(context).map_err(wrap)
    }
}
