//! Path resolution for generated projects.
//!
//! Two levels are kept apart on purpose:
//!
//! * [`WorkdirPaths`] resolves paths for a project that does not exist yet,
//!   relative to the working directory it will be created in.
//! * [`ProjectPaths`] resolves paths inside an existing project root.
//!
//! Both are pure: every call is derived from a validated [`ProjectConfig`]
//! and never touches the filesystem.

use crate::builder::helpers::to_lib_file;
use crate::config::{ProjectConfig, Settings};
use crate::error::Result;
use std::path::{Path, PathBuf};

/// Well-known project folders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FolderKey {
    Root,
    Config,
    Content,
    Static,
    Src,
    Routes,
    Lib,
    Params,
    Api,
    Themes,
}

/// Entry point to both path levels.
#[derive(Debug, Clone, Copy)]
pub struct PathMaker<'a> {
    config: &'a ProjectConfig,
}

impl<'a> PathMaker<'a> {
    pub fn new(config: &'a ProjectConfig) -> Self {
        Self { config }
    }

    /// Paths for projects created inside the configured root.
    pub fn workdir(&self) -> WorkdirPaths<'a> {
        WorkdirPaths {
            config: self.config,
        }
    }

    /// Paths inside the configured root, treated as a project root.
    pub fn project(&self) -> ProjectPaths<'a> {
        ProjectPaths {
            config: self.config,
        }
    }
}

/// Working-directory level: every method takes the name of the project
/// about to be created.
#[derive(Debug, Clone, Copy)]
pub struct WorkdirPaths<'a> {
    config: &'a ProjectConfig,
}

impl<'a> WorkdirPaths<'a> {
    pub fn project_root(&self, project_name: &str) -> PathBuf {
        self.config.root().join(project_name)
    }

    pub fn project_folder(&self, project_name: &str, key: FolderKey) -> PathBuf {
        self.project_root(project_name)
            .join(relative_folder(self.config.settings(), key))
    }

    pub fn project_config_folder(&self, project_name: &str) -> PathBuf {
        self.project_folder(project_name, FolderKey::Config)
    }

    pub fn project_content_folder(&self, project_name: &str) -> PathBuf {
        self.project_folder(project_name, FolderKey::Content)
    }

    pub fn project_src_folder(&self, project_name: &str) -> PathBuf {
        self.project_folder(project_name, FolderKey::Src)
    }

    pub fn project_routes_folder(&self, project_name: &str) -> PathBuf {
        self.project_folder(project_name, FolderKey::Routes)
    }

    pub fn project_themes_folder(&self, project_name: &str) -> PathBuf {
        self.project_folder(project_name, FolderKey::Themes)
    }

    pub fn project_theme_partials_folder(&self, project_name: &str, theme_name: &str) -> PathBuf {
        self.project_themes_folder(project_name)
            .join(theme_name)
            .join(&self.config.settings().theme.partials)
    }

    /// Configuration for the project once it exists, rooted at
    /// `root/project_name` with the same settings.
    pub fn enter(&self, project_name: &str) -> Result<ProjectConfig> {
        ProjectConfig::new(
            self.project_root(project_name),
            self.config.settings().clone(),
        )
    }
}

/// Project level: the configured root is the project itself.
#[derive(Debug, Clone, Copy)]
pub struct ProjectPaths<'a> {
    config: &'a ProjectConfig,
}

impl<'a> ProjectPaths<'a> {
    fn settings(&self) -> &'a Settings {
        self.config.settings()
    }

    /// Folder for `key`, relative to the project root.
    pub fn relative(&self, key: FolderKey) -> PathBuf {
        relative_folder(self.settings(), key)
    }

    pub fn folder(&self, key: FolderKey) -> PathBuf {
        self.config.root().join(self.relative(key))
    }

    pub fn root_folder(&self) -> PathBuf {
        self.config.root().to_path_buf()
    }

    pub fn config_folder(&self) -> PathBuf {
        self.folder(FolderKey::Config)
    }

    pub fn content_folder(&self) -> PathBuf {
        self.folder(FolderKey::Content)
    }

    pub fn static_folder(&self) -> PathBuf {
        self.folder(FolderKey::Static)
    }

    pub fn routes_folder(&self) -> PathBuf {
        self.folder(FolderKey::Routes)
    }

    pub fn lib_folder(&self) -> PathBuf {
        self.folder(FolderKey::Lib)
    }

    pub fn params_folder(&self) -> PathBuf {
        self.folder(FolderKey::Params)
    }

    /// Versioned API folder, e.g. `src/routes/api/v1`.
    pub fn api_folder(&self) -> PathBuf {
        self.folder(FolderKey::Api)
    }

    pub fn themes_folder(&self) -> PathBuf {
        self.folder(FolderKey::Themes)
    }

    pub fn theme_folder(&self, theme_name: &str) -> PathBuf {
        self.themes_folder().join(theme_name)
    }

    pub fn theme_components_folder(&self, theme_name: &str) -> PathBuf {
        self.theme_folder(theme_name)
            .join(&self.settings().theme.components)
    }

    pub fn theme_partials_folder(&self, theme_name: &str) -> PathBuf {
        self.theme_folder(theme_name)
            .join(&self.settings().theme.partials)
    }

    pub fn theme_components_dirname(&self) -> &'a str {
        &self.settings().theme.components
    }

    pub fn theme_partials_dirname(&self) -> &'a str {
        &self.settings().theme.partials
    }

    pub fn path_to_routes(&self, name: &str) -> PathBuf {
        self.routes_folder().join(name)
    }

    pub fn path_to_existing_resource(&self, name: &str) -> PathBuf {
        self.content_folder().join(name)
    }

    /// `posts` becomes `loadPosts.ts`, the name templates import through
    /// `to_lib_file`.
    pub fn resource_lib_filename(&self, resource: &str) -> String {
        to_lib_file(resource)
    }

    /// Lib file for a metadata field, e.g. `loadPostsCategory.ts`.
    pub fn metadata_lib_filename(&self, resource: &str, metadata: &str) -> String {
        to_lib_file(&format!("{}_{}", resource, metadata))
    }

    pub fn resource_content_filename(&self) -> &'a str {
        &self.settings().pages.content
    }

    pub fn index_page_filename(&self) -> &'a str {
        &self.settings().pages.index
    }

    pub fn markdown_page_filename(&self) -> &'a str {
        &self.settings().pages.markdown
    }

    pub fn index_endpoint_filename(&self) -> &'a str {
        &self.settings().pages.index_endpoint
    }

    pub fn slug_page_filename(&self) -> &'a str {
        &self.settings().pages.slug
    }

    pub fn slug_endpoint_filename(&self) -> &'a str {
        &self.settings().pages.slug_endpoint
    }

    pub fn slug_layout_filename(&self) -> &'a str {
        &self.settings().pages.slug_layout
    }

    pub fn api_filename(&self) -> &'a str {
        &self.settings().api.filename
    }

    pub fn theme_config_filename(&self) -> &'a str {
        &self.settings().theme.file
    }

    /// Whether `path` lies under this project root.
    pub fn contains(&self, path: &Path) -> bool {
        path.starts_with(self.config.root())
    }
}

fn relative_folder(settings: &Settings, key: FolderKey) -> PathBuf {
    let paths = &settings.paths;
    match key {
        FolderKey::Root => PathBuf::new(),
        FolderKey::Config => PathBuf::from(&paths.config),
        FolderKey::Content => PathBuf::from(&paths.content),
        FolderKey::Static => PathBuf::from(&paths.static_files),
        FolderKey::Src => PathBuf::from(&paths.src),
        FolderKey::Routes => PathBuf::from(&paths.routes),
        FolderKey::Lib => PathBuf::from(&paths.lib),
        FolderKey::Params => PathBuf::from(&paths.params),
        FolderKey::Api => PathBuf::from(&paths.api).join(&settings.api.version),
        FolderKey::Themes => PathBuf::from(&paths.themes),
    }
}
