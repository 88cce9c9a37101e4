//! Project configuration for kiln.
//! Settings name every folder and file the generator touches. They are read
//! from `kiln.json`, `kiln.yml` or `kiln.yaml` in the project root, and any
//! field left out falls back to its default.

use crate::constants::CONFIG_FILES;
use crate::data::ThemeData;
use crate::error::{Error, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

/// Named folders, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathSettings {
    pub config: String,
    pub content: String,
    #[serde(rename = "static")]
    pub static_files: String,
    pub src: String,
    pub routes: String,
    pub lib: String,
    pub params: String,
    pub api: String,
    pub themes: String,
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            config: "config".into(),
            content: "content".into(),
            static_files: "static".into(),
            src: "src".into(),
            routes: "src/routes".into(),
            lib: "src/lib".into(),
            params: "src/params".into(),
            api: "src/routes/api".into(),
            themes: "themes".into(),
        }
    }
}

/// File names used for pages, endpoints and content entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSettings {
    pub content: String,
    pub index: String,
    pub markdown: String,
    pub index_endpoint: String,
    pub slug: String,
    pub slug_endpoint: String,
    pub slug_layout: String,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            content: "index.svx".into(),
            index: "+page.svelte".into(),
            markdown: "+page.svx".into(),
            index_endpoint: "+page.ts".into(),
            slug: "+page.svelte".into(),
            slug_endpoint: "+page.ts".into(),
            slug_layout: "+layout.svelte".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    pub version: String,
    pub filename: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            version: "v1".into(),
            filename: "+server.ts".into(),
        }
    }
}

/// Theme folder layout, plus the theme the project was created with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSettings {
    pub file: String,
    pub components: String,
    pub partials: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<ThemeData>,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            file: "theme.config.js".into(),
            components: "components".into(),
            partials: "partials".into(),
            active: None,
        }
    }
}

/// Every configurable name the generator relies on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub paths: PathSettings,
    pub pages: PageSettings,
    pub api: ApiSettings,
    pub theme: ThemeSettings,
}

/// Parses settings text, trying JSON first and YAML second.
///
/// # Arguments
/// * `content` - Raw settings document
///
/// # Returns
/// * `Result<Settings>` - Parsed settings with defaults for absent fields
///
/// # Errors
/// * `Error::ConfigError` if the text is neither valid JSON nor valid YAML
pub fn parse_settings(content: &str) -> Result<Settings> {
    match serde_json::from_str(content) {
        Ok(settings) => Ok(settings),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid settings format: {}", e))),
    }
}

/// Reads and parses a single settings file.
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path = path.as_ref();
    debug!("Loading settings from {}", path.display());
    let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    parse_settings(&content)
}

/// Looks for a settings file in `root` and falls back to the defaults.
///
/// # Arguments
/// * `root` - Project root to search
///
/// # Returns
/// * `Result<Settings>` - Settings from the first file found, or the defaults
pub fn find_settings<P: AsRef<Path>>(root: P) -> Result<Settings> {
    for file in CONFIG_FILES {
        let candidate = root.as_ref().join(file);
        if candidate.exists() {
            return load_settings(candidate);
        }
    }
    debug!("No settings file in {}, using defaults", root.as_ref().display());
    Ok(Settings::default())
}

/// A validated root directory paired with its settings.
///
/// Construction is the only fallible step: once a `ProjectConfig` exists,
/// every path derived from it is well formed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    root: PathBuf,
    settings: Settings,
}

impl ProjectConfig {
    /// Validates `root` and every named segment in `settings`.
    ///
    /// # Errors
    /// * `Error::ConfigError` if the root is empty, or a segment is empty,
    ///   absolute, or climbs out of the root with `..`
    pub fn new<P: Into<PathBuf>>(root: P, settings: Settings) -> Result<Self> {
        let root = root.into();
        if root.as_os_str().is_empty() {
            return Err(Error::ConfigError("project root is missing".into()));
        }

        let segments = [
            ("paths.config", &settings.paths.config),
            ("paths.content", &settings.paths.content),
            ("paths.static", &settings.paths.static_files),
            ("paths.src", &settings.paths.src),
            ("paths.routes", &settings.paths.routes),
            ("paths.lib", &settings.paths.lib),
            ("paths.params", &settings.paths.params),
            ("paths.api", &settings.paths.api),
            ("paths.themes", &settings.paths.themes),
            ("pages.content", &settings.pages.content),
            ("pages.index", &settings.pages.index),
            ("pages.markdown", &settings.pages.markdown),
            ("pages.index_endpoint", &settings.pages.index_endpoint),
            ("pages.slug", &settings.pages.slug),
            ("pages.slug_endpoint", &settings.pages.slug_endpoint),
            ("pages.slug_layout", &settings.pages.slug_layout),
            ("api.version", &settings.api.version),
            ("api.filename", &settings.api.filename),
            ("theme.file", &settings.theme.file),
            ("theme.components", &settings.theme.components),
            ("theme.partials", &settings.theme.partials),
        ];
        for (field, value) in segments {
            validate_segment(field, value)?;
        }

        Ok(Self { root, settings })
    }

    /// Loads settings from `root` and validates them.
    pub fn from_root<P: Into<PathBuf>>(root: P) -> Result<Self> {
        let root = root.into();
        let settings = find_settings(&root)?;
        Self::new(root, settings)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Theme recorded when the project was created, if any.
    pub fn active_theme(&self) -> Option<&ThemeData> {
        self.settings.theme.active.as_ref()
    }
}

fn validate_segment(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::ConfigError(format!("'{}' must not be empty", field)));
    }
    let path = Path::new(value);
    let escapes = path
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if escapes {
        return Err(Error::ConfigError(format!(
            "'{}' must be a relative path inside the project, got '{}'",
            field, value
        )));
    }
    Ok(())
}
