//! Rendering data handed to templates.

use crate::config::Settings;
use crate::css::CssLib;
use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a project is themed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    /// Unstyled starter theme
    Blank,
    /// Built-in styled theme
    Styled,
    /// Theme supplied from outside the project
    Existing,
}

impl ThemeKind {
    pub const ALL: [ThemeKind; 3] = [ThemeKind::Blank, ThemeKind::Styled, ThemeKind::Existing];

    pub fn name(&self) -> &'static str {
        match self {
            ThemeKind::Blank => "blank",
            ThemeKind::Styled => "styled",
            ThemeKind::Existing => "existing",
        }
    }
}

impl fmt::Display for ThemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ThemeKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ThemeKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| Error::option_not_valid(s, ThemeKind::ALL.map(|k| k.name())))
    }
}

/// Whether a metadata field holds one value or a list of values per entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetadataType {
    Single,
    List,
}

impl MetadataType {
    pub const ALL: [MetadataType; 2] = [MetadataType::Single, MetadataType::List];

    pub fn name(&self) -> &'static str {
        match self {
            MetadataType::Single => "single",
            MetadataType::List => "list",
        }
    }
}

impl fmt::Display for MetadataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MetadataType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        MetadataType::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| Error::option_not_valid(s, MetadataType::ALL.map(|t| t.name())))
    }
}

/// Source language of a public page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageLanguage {
    Svelte,
    Markdown,
}

impl PageLanguage {
    pub const ALL: [PageLanguage; 2] = [PageLanguage::Svelte, PageLanguage::Markdown];

    pub fn name(&self) -> &'static str {
        match self {
            PageLanguage::Svelte => "svelte",
            PageLanguage::Markdown => "markdown",
        }
    }
}

impl FromStr for PageLanguage {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        PageLanguage::ALL
            .into_iter()
            .find(|l| l.name() == s)
            .ok_or_else(|| Error::option_not_valid(s, PageLanguage::ALL.map(|l| l.name())))
    }
}

/// Theme descriptor: which theme, under which name, styled with what.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeData {
    pub kind: ThemeKind,
    pub name: String,
    pub css_lib: CssLib,
}

impl ThemeData {
    pub fn new(kind: ThemeKind, name: impl Into<String>, css_lib: CssLib) -> Self {
        Self {
            kind,
            name: name.into(),
            css_lib,
        }
    }
}

/// Resources and their contents, as listed in the navigation menu.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItems {
    pub resources: Vec<String>,
    pub contents: IndexMap<String, Vec<String>>,
    pub with_content: bool,
}

/// Everything that feeds the sitemap and the RSS feed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoPageItems {
    pub base_url: String,
    pub resources: Vec<String>,
    pub contents: IndexMap<String, Vec<String>>,
    pub pages: Vec<String>,
}

/// Rendering parameters for a single generated file.
///
/// Built once per file and never mutated after it is bound to a builder.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TemplateData {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub metadata_type: Option<MetadataType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu: Option<MenuItems>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_page: Option<NoPageItems>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<Settings>,
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}

impl TemplateData {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_project_name(mut self, project_name: impl Into<String>) -> Self {
        self.project_name = Some(project_name.into());
        self
    }

    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    pub fn with_metadata_type(mut self, metadata_type: MetadataType) -> Self {
        self.metadata_type = Some(metadata_type);
        self
    }

    pub fn with_theme(mut self, theme: ThemeData) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn with_menu(mut self, menu: MenuItems) -> Self {
        self.menu = Some(menu);
        self
    }

    pub fn with_no_page(mut self, items: NoPageItems) -> Self {
        self.no_page = Some(items);
        self
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = Some(settings);
        self
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Theme kind, or `Blank` when no theme descriptor is attached.
    pub fn theme_kind(&self) -> ThemeKind {
        self.theme.as_ref().map_or(ThemeKind::Blank, |t| t.kind)
    }

    /// Serializes the data into the context object templates see.
    pub fn to_context(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}
