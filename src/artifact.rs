//! The context threaded through a composite tree while it is created.

use crate::builder::{ArtifactKind, ContentBuilder};
use crate::data::TemplateData;
use crate::error::Result;
use crate::fs::FileSystem;
use crate::renderer::TemplateRenderer;
use crate::resources::{Bundle, Registry};
use log::debug;
use std::path::Path;

/// Bundle, destination, renderer and builder rules for one generation run.
pub struct Artifact<'a> {
    pub bundle: &'a Bundle,
    pub fs: &'a dyn FileSystem,
    pub renderer: &'a dyn TemplateRenderer,
    kind: ArtifactKind,
    registry: Registry,
}

impl<'a> Artifact<'a> {
    pub fn new(
        kind: ArtifactKind,
        registry: Registry,
        bundle: &'a Bundle,
        fs: &'a dyn FileSystem,
        renderer: &'a dyn TemplateRenderer,
    ) -> Self {
        Self {
            bundle,
            fs,
            renderer,
            kind,
            registry,
        }
    }

    pub fn kind(&self) -> ArtifactKind {
        self.kind
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// A builder bound to this artifact's kind and registry.
    pub fn builder(&self) -> ContentBuilder<'_> {
        let mut builder = ContentBuilder::new(self.kind);
        builder.set_embedded_resources(&self.registry);
        builder
    }

    /// Resolves `template_id`, renders it and writes the result to `dest`.
    ///
    /// # Errors
    /// * Any builder, bundle, rendering or write error, unchanged
    pub fn render_to(&self, template_id: &str, data: &TemplateData, dest: &Path) -> Result<()> {
        let mut builder = self.builder();
        builder.set_template_id(template_id).set_template_data(data.clone());
        let content = builder.get_content()?;

        let source = self.bundle.open(&content.template_path)?;
        let context = content.template_data.to_context()?;
        let output = self.renderer.render(
            &content.template_path,
            source,
            &context,
            &content.helpers,
        )?;
        debug!("Rendered '{}' into '{}'", content.template_path, dest.display());
        self.fs.write_file(dest, output.as_bytes())
    }

    /// Writes the bundled file registered as `file_id` to `dest` unchanged.
    pub fn copy_to(&self, file_id: &str, dest: &Path) -> Result<()> {
        let path = self.registry.get(file_id)?;
        let source = self.bundle.open(path)?;
        debug!("Copying '{}' to '{}'", path, dest.display());
        self.fs.write_file(dest, source.as_bytes())
    }
}
