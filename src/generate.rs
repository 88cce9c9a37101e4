//! High-level generation commands.
//!
//! Each command assembles a tree through [`FsManager`], binds it to the
//! matching artifact context and creates it. Commands are one-shot: they
//! write every target file again and stop at the first error.

use crate::artifact::Artifact;
use crate::builder::helpers::to_slug;
use crate::builder::ArtifactKind;
use crate::composer::Folder;
use crate::config::{ProjectConfig, Settings};
use crate::css::{CssLib, CssSetup};
use crate::data::{
    MenuItems, MetadataType, NoPageItems, PageLanguage, TemplateData, ThemeData, ThemeKind,
};
use crate::error::{Error, Result};
use crate::fs::FileSystem;
use crate::fsm::FsManager;
use crate::pathmaker::{FolderKey, PathMaker};
use crate::renderer::TemplateRenderer;
use crate::resources::{Bundle, Registry};
use log::{info, warn};

/// Which entry template a new content file starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentTemplate {
    Blank,
    Sample,
}

impl ContentTemplate {
    fn id(&self) -> &'static str {
        match self {
            ContentTemplate::Blank => "blank",
            ContentTemplate::Sample => "sample",
        }
    }
}

/// Options for a new project.
#[derive(Debug, Clone)]
pub struct ProjectOptions {
    pub name: String,
    pub theme: ThemeData,
}

/// Shared handles for every command.
pub struct Generator<'a> {
    bundle: &'a Bundle,
    fs: &'a dyn FileSystem,
    renderer: &'a dyn TemplateRenderer,
}

impl<'a> Generator<'a> {
    pub fn new(
        bundle: &'a Bundle,
        fs: &'a dyn FileSystem,
        renderer: &'a dyn TemplateRenderer,
    ) -> Self {
        Self {
            bundle,
            fs,
            renderer,
        }
    }

    fn artifact(&self, kind: ArtifactKind, registry: Registry) -> Artifact<'a> {
        Artifact::new(kind, registry, self.bundle, self.fs, self.renderer)
    }

    fn create(&self, kind: ArtifactKind, registry: Registry, mut tree: Folder) -> Result<()> {
        let artifact = self.artifact(kind, registry);
        tree.create(&artifact)
    }

    /// Fails unless the content folder holds a resource called `name`.
    fn require_resource(&self, project: &ProjectConfig, name: &str) -> Result<()> {
        let path = PathMaker::new(project)
            .project()
            .path_to_existing_resource(name);
        if self.fs.exists(&path) {
            Ok(())
        } else {
            Err(Error::ArtifactNotFound {
                kind: "resource".into(),
                name: name.into(),
            })
        }
    }

    /// Creates a new project under the working directory.
    ///
    /// # Arguments
    /// * `workdir` - Working-directory level configuration
    /// * `options` - Project name and theme
    ///
    /// # Returns
    /// * `Result<ProjectConfig>` - Project level configuration of the new project
    pub fn init_project(
        &self,
        workdir: &ProjectConfig,
        options: &ProjectOptions,
    ) -> Result<ProjectConfig> {
        let project_root = PathMaker::new(workdir).workdir().project_root(&options.name);
        if self.fs.exists(&project_root) {
            warn!("'{}' already exists, files will be overwritten", project_root.display());
        }

        let project = PathMaker::new(workdir).workdir().enter(&options.name)?;
        let data = TemplateData::new(&options.name)
            .with_project_name(&options.name)
            .with_theme(options.theme.clone())
            .with_settings(recorded_settings(&project, &options.theme));

        let tree = FsManager::new(&project).project_tree(&data);
        self.create(ArtifactKind::Project, Registry::project(), tree)?;

        CssSetup::new(
            options.theme.css_lib,
            workdir,
            data,
            self.bundle,
            self.fs,
            self.renderer,
        )
        .setup(true)?;

        info!("Project '{}' created in {}", options.name, project_root.display());
        Ok(project)
    }

    /// Creates a project for developing a theme: the theme folder and the
    /// framework files, with an index page that does not depend on the
    /// theme's partials.
    pub fn new_theme(
        &self,
        workdir: &ProjectConfig,
        project_name: &str,
        theme_name: &str,
        css_lib: CssLib,
    ) -> Result<ProjectConfig> {
        let project = PathMaker::new(workdir).workdir().enter(project_name)?;
        let theme = ThemeData::new(ThemeKind::Existing, theme_name, css_lib);
        let data = TemplateData::new(project_name)
            .with_project_name(project_name)
            .with_theme(theme.clone())
            .with_settings(recorded_settings(&project, &theme));

        let fsm = FsManager::new(&project);
        let mut tree = fsm.project_tree(&data);
        tree.add(
            fsm.new_folder(FolderKey::Themes)
                .with(fsm.new_theme_folder(&theme, &data)),
        );
        self.create(ArtifactKind::Project, Registry::project(), tree)?;

        CssSetup::new(css_lib, workdir, data, self.bundle, self.fs, self.renderer)
            .setup(false)?;

        info!("Theme '{}' created in project '{}'", theme_name, project_name);
        Ok(project)
    }

    /// Adds a resource: content folder, routes, lib loader and API.
    /// `About Us` is created as `about-us`.
    ///
    /// # Errors
    /// * `Error::OptionNotValid` if the name is absolute or contains `..`
    pub fn new_resource(&self, project: &ProjectConfig, name: &str) -> Result<()> {
        let name = &route_name(name)?;
        let mut data = TemplateData::new(name)
            .with_resource(name)
            .with_settings(project.settings().clone());
        data.theme = project.active_theme().cloned();

        let tree = FsManager::new(project).resource_tree(name, &data);
        self.create(ArtifactKind::Resource, Registry::resource()?, tree)?;
        info!("Resource '{}' created", name);
        Ok(())
    }

    /// Adds a metadata field to an existing resource.
    ///
    /// # Errors
    /// * `Error::OptionNotValid` if either name cannot be used as a route
    /// * `Error::ArtifactNotFound` if the resource is not in the project
    pub fn add_metadata(
        &self,
        project: &ProjectConfig,
        resource: &str,
        name: &str,
        metadata_type: MetadataType,
    ) -> Result<()> {
        let resource = &route_name(resource)?;
        let name = &route_name(name)?;
        self.require_resource(project, resource)?;

        let mut data = TemplateData::new(name)
            .with_resource(resource)
            .with_metadata_type(metadata_type)
            .with_settings(project.settings().clone());
        data.theme = project.active_theme().cloned();

        let tree = FsManager::new(project).metadata_tree(resource, name, &data);
        self.create(ArtifactKind::Metadata, Registry::metadata()?, tree)?;
        info!("Metadata '{}' ({}) added to '{}'", name, metadata_type, resource);
        Ok(())
    }

    /// Adds a public page written in Svelte or Markdown.
    pub fn new_page(
        &self,
        project: &ProjectConfig,
        name: &str,
        language: PageLanguage,
    ) -> Result<()> {
        let name = &route_name(name)?;
        let mut data = TemplateData::new(name);
        data.theme = project.active_theme().cloned();

        let tree = FsManager::new(project).page_tree(name, language, &data);
        self.create(ArtifactKind::Page, Registry::page(), tree)?;
        info!("Page '{}' created", name);
        Ok(())
    }

    /// Adds a content entry to an existing resource.
    pub fn new_content(
        &self,
        project: &ProjectConfig,
        resource: &str,
        slug: &str,
        template: ContentTemplate,
    ) -> Result<()> {
        let resource = &route_name(resource)?;
        let slug = &route_name(slug)?;
        self.require_resource(project, resource)?;

        let data = TemplateData::new(slug).with_resource(resource);
        let tree = FsManager::new(project).content_tree(resource, slug, template.id(), &data);
        self.create(ArtifactKind::Content, Registry::content(), tree)?;
        info!("Content '{}/{}' created", resource, slug);
        Ok(())
    }

    /// Rewrites `config/menu.js.ts` from the given entries.
    pub fn generate_menu(&self, project: &ProjectConfig, items: MenuItems) -> Result<()> {
        let data = TemplateData::new("menu").with_menu(items);
        let tree = FsManager::new(project).menu_tree(&data);
        self.create(ArtifactKind::Menu, Registry::menu(), tree)?;
        info!("Menu generated");
        Ok(())
    }

    /// Rewrites the static sitemap and RSS feed.
    ///
    /// # Errors
    /// * `Error::OptionNotValid` if the base URL does not parse
    pub fn generate_xml(
        &self,
        project: &ProjectConfig,
        site_name: &str,
        items: NoPageItems,
    ) -> Result<()> {
        url::Url::parse(&items.base_url).map_err(|_| {
            Error::option_not_valid(&items.base_url, ["an absolute URL such as https://example.com"])
        })?;

        let data = TemplateData::new(site_name).with_no_page(items);
        let tree = FsManager::new(project).no_page_tree(&data);
        self.create(ArtifactKind::NoPage, Registry::xml(), tree)?;
        info!("Sitemap and RSS feed generated");
        Ok(())
    }
}

/// Slugifies every `/`-separated segment of a user-supplied name.
///
/// # Errors
/// * `Error::OptionNotValid` if the name is absolute, or a segment is
///   empty, `.`, `..` or has nothing left after slugifying
fn route_name(name: &str) -> Result<String> {
    let invalid = || {
        Error::option_not_valid(name, ["a relative name such as 'posts' or 'blog/posts'"])
    };
    if name.starts_with('/') || name.starts_with('\\') {
        return Err(invalid());
    }

    let mut segments = Vec::new();
    for segment in name.split('/').map(str::trim) {
        if segment.is_empty() || segment == "." || segment == ".." {
            return Err(invalid());
        }
        let slug = to_slug(segment);
        if slug.is_empty() {
            return Err(invalid());
        }
        segments.push(slug);
    }
    Ok(segments.join("/"))
}

fn recorded_settings(project: &ProjectConfig, theme: &ThemeData) -> Settings {
    let mut settings = project.settings().clone();
    settings.theme.active = Some(theme.clone());
    settings
}
