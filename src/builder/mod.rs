//! Content builders.
//!
//! A builder turns a template identifier plus its [`TemplateData`] into a
//! [`Content`]: the bundle path of the template to render and the helper
//! functions that template may call. Each [`ArtifactKind`] has its own
//! branching table and helper set. Builders never touch the filesystem.

pub mod helpers;

use crate::data::{MetadataType, TemplateData, ThemeKind};
use crate::error::{Error, Result};
use crate::resources::Registry;
use helpers::Helper;
use std::fmt;

/// Category of generated artifact; selects the builder rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Project,
    Theme,
    Page,
    Resource,
    Metadata,
    Content,
    Menu,
    NoPage,
}

impl ArtifactKind {
    pub fn name(&self) -> &'static str {
        match self {
            ArtifactKind::Project => "project",
            ArtifactKind::Theme => "theme",
            ArtifactKind::Page => "page",
            ArtifactKind::Resource => "resource",
            ArtifactKind::Metadata => "metadata",
            ArtifactKind::Content => "content",
            ArtifactKind::Menu => "menu",
            ArtifactKind::NoPage => "nopage",
        }
    }

    /// Helper functions visible to templates of this kind.
    pub fn helpers(&self) -> Vec<Helper> {
        use Helper::*;
        match self {
            ArtifactKind::Project => vec![Capitalize, ToTitle, CurrentYear],
            ArtifactKind::Theme => vec![Capitalize, ToSlug, CurrentYear],
            ArtifactKind::Page => vec![Capitalize, Today, ToTitle, ToVariableName],
            ArtifactKind::Resource => vec![
                Capitalize,
                ToVariableName,
                ReplaceIfNested,
                ToLibFile,
                ToSlug,
            ],
            ArtifactKind::Metadata => vec![Capitalize, ToVariableName, ToLibFile, ToSnakeCase],
            ArtifactKind::Content => vec![ToSlug, ToTitle, Today],
            ArtifactKind::Menu => vec![Capitalize, StringsJoin, ToUrl, PlusOne, Sum],
            ArtifactKind::NoPage => vec![Capitalize, StringsJoin, Trimmed, Today],
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything needed to render one file.
#[derive(Debug, Clone, PartialEq)]
pub struct Content {
    pub kind: ArtifactKind,
    pub template_path: String,
    pub template_id: String,
    pub template_data: TemplateData,
    pub helpers: Vec<Helper>,
}

/// Resolves template identifiers for one artifact kind.
#[derive(Debug, Clone)]
pub struct ContentBuilder<'a> {
    kind: ArtifactKind,
    registry: Option<&'a Registry>,
    template_id: Option<String>,
    template_data: TemplateData,
}

impl<'a> ContentBuilder<'a> {
    pub fn new(kind: ArtifactKind) -> Self {
        Self {
            kind,
            registry: None,
            template_id: None,
            template_data: TemplateData::default(),
        }
    }

    pub fn kind(&self) -> ArtifactKind {
        self.kind
    }

    pub fn set_embedded_resources(&mut self, registry: &'a Registry) -> &mut Self {
        self.registry = Some(registry);
        self
    }

    pub fn set_template_id(&mut self, id: impl Into<String>) -> &mut Self {
        self.template_id = Some(id.into());
        self
    }

    pub fn set_template_data(&mut self, data: TemplateData) -> &mut Self {
        self.template_data = data;
        self
    }

    /// Resolves the template path and helper set for the bound identifier.
    ///
    /// # Returns
    /// * `Result<Content>` - A fresh value; calling twice with the same
    ///   inputs yields equal results
    ///
    /// # Errors
    /// * `Error::ConfigError` if no registry or identifier is bound
    /// * `Error::TemplateNotFound` if the identifier is unknown for this kind
    /// * `Error::OptionNotValid` if a metadata `api` or `lib` template has no type
    /// * `Error::ResourceNotFound` if the resolved key is missing from the registry
    pub fn get_content(&self) -> Result<Content> {
        let registry = self.registry.ok_or_else(|| {
            Error::ConfigError(format!("{} builder has no embedded resources", self.kind))
        })?;
        let id = self.template_id.as_deref().ok_or_else(|| {
            Error::ConfigError(format!("{} builder has no template id", self.kind))
        })?;

        let key = self.resolve_key(registry, id)?;
        let template_path = registry.get(&key)?.to_string();

        Ok(Content {
            kind: self.kind,
            template_path,
            template_id: id.to_string(),
            template_data: self.template_data.clone(),
            helpers: self.kind.helpers(),
        })
    }

    fn resolve_key(&self, registry: &Registry, id: &str) -> Result<String> {
        let theme = self.template_data.theme_kind();
        let key = match self.kind {
            ArtifactKind::Project => match id {
                "menu" => Some("init_menu".to_string()),
                "index" if theme == ThemeKind::Existing => Some("index_notheme".to_string()),
                other => direct(registry, other),
            },
            ArtifactKind::NoPage => match id {
                "sitemap" => Some("sitemap_static".to_string()),
                "rss" => Some("rss_static".to_string()),
                other => direct(registry, other),
            },
            ArtifactKind::Theme | ArtifactKind::Content | ArtifactKind::Menu => {
                direct(registry, id)
            }
            ArtifactKind::Page => match id {
                "svelte" | "markdown" => Some(themed(id, theme)),
                "indexendpoint" => Some(id.to_string()),
                _ => None,
            },
            ArtifactKind::Resource => match id {
                "index" | "slug" => Some(themed(id, theme)),
                "api_index" | "api_slug" | "string_matcher" | "generic_matcher" | "lib"
                | "indexendpoint" | "slugendpoint" | "sluglayout" => Some(id.to_string()),
                _ => None,
            },
            ArtifactKind::Metadata => match id {
                "index" | "slug" => Some(themed(id, theme)),
                "api" | "lib" => Some(format!("{}_{}", id, self.metadata_type()?)),
                "api_metadata_index" | "generic_matcher" | "indexendpoint" | "slugendpoint" => {
                    Some(id.to_string())
                }
                _ => None,
            },
        };

        key.ok_or_else(|| Error::TemplateNotFound {
            id: id.to_string(),
            kind: self.kind.to_string(),
            valid: self.accepted_ids(registry),
        })
    }

    fn metadata_type(&self) -> Result<MetadataType> {
        self.template_data.metadata_type.ok_or_else(|| {
            Error::option_not_valid("(missing type)", MetadataType::ALL.map(|t| t.name()))
        })
    }

    fn accepted_ids(&self, registry: &Registry) -> Vec<String> {
        let fixed: &[&str] = match self.kind {
            ArtifactKind::Page => &["svelte", "markdown", "indexendpoint"],
            ArtifactKind::Resource => &[
                "index",
                "indexendpoint",
                "slug",
                "slugendpoint",
                "sluglayout",
                "lib",
                "api_index",
                "api_slug",
                "string_matcher",
                "generic_matcher",
            ],
            ArtifactKind::Metadata => &[
                "index",
                "indexendpoint",
                "slug",
                "slugendpoint",
                "api",
                "lib",
                "api_metadata_index",
                "generic_matcher",
            ],
            _ => return registry.keys().map(String::from).collect(),
        };
        fixed.iter().map(|s| s.to_string()).collect()
    }
}

fn direct(registry: &Registry, id: &str) -> Option<String> {
    registry.contains(id).then(|| id.to_string())
}

fn themed(id: &str, theme: ThemeKind) -> String {
    match theme {
        ThemeKind::Styled => format!("{}_styled", id),
        ThemeKind::Blank | ThemeKind::Existing => format!("{}_blank", id),
    }
}
