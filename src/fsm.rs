//! Factories for the folders and files of a project.
//!
//! Callers ask for a tree by what it is (a resource, a metadata field, a
//! page) and get a root [`Folder`] wired with the right template ids.
//! Every factory works at project level: the root of each tree is the
//! project root of the [`ProjectConfig`] the manager was built with.

use crate::composer::{File, Folder};
use crate::config::ProjectConfig;
use crate::constants::{DOTENV_FILE, SITE_CONFIG_FILES};
use crate::data::{PageLanguage, TemplateData, ThemeData, ThemeKind};
use crate::pathmaker::{FolderKey, PathMaker, ProjectPaths};

const SLUG_FOLDER: &str = "[slug=string]";
const METADATA_SLUG_FOLDER: &str = "[slug=generic]";

/// Builds pre-wired trees for one project.
#[derive(Debug, Clone, Copy)]
pub struct FsManager<'a> {
    paths: ProjectPaths<'a>,
}

impl<'a> FsManager<'a> {
    pub fn new(config: &'a ProjectConfig) -> Self {
        Self {
            paths: PathMaker::new(config).project(),
        }
    }

    /// A well-known folder. `Root` is placed at the project root; every
    /// other key yields a folder named by its path relative to the root.
    pub fn new_folder(&self, key: FolderKey) -> Folder {
        match key {
            FolderKey::Root => Folder::root(self.paths.root_folder()),
            other => Folder::new(self.paths.relative(other).display().to_string()),
        }
    }

    pub fn new_dotenv_file(&self, data: TemplateData) -> File {
        File::new(DOTENV_FILE, "dotenv", data)
    }

    pub fn new_project_settings_file(&self, data: TemplateData) -> File {
        File::new("kiln.json", "project_settings", data)
    }

    /// The `config/` folder with every site configuration file.
    pub fn new_config_folder(&self, data: &TemplateData) -> Folder {
        let mut folder = self.new_folder(FolderKey::Config);
        for (id, filename) in SITE_CONFIG_FILES {
            folder.add(File::new(filename, id, data.clone()));
        }
        folder
    }

    pub fn new_index_page(&self, data: TemplateData) -> File {
        File::new(self.paths.index_page_filename(), "index", data)
    }

    pub fn new_index_endpoint(&self, data: TemplateData) -> File {
        File::new(self.paths.index_endpoint_filename(), "indexendpoint", data)
    }

    /// `themes/<name>/` with its components, partials, config and docs.
    pub fn new_theme_folder(&self, theme: &ThemeData, data: &TemplateData) -> Folder {
        let theme_data = data.clone().with_theme(theme.clone());
        let named = TemplateData {
            name: theme.name.clone(),
            ..theme_data.clone()
        };
        Folder::new(theme.name.clone())
            .with(Folder::new(self.paths.theme_components_dirname()))
            .with(Folder::new(self.paths.theme_partials_dirname()))
            .with(File::new(
                self.paths.theme_config_filename(),
                "theme_config",
                theme_data,
            ))
            .with(File::new("README.md", "readme", named.clone()))
            .with(File::new("LICENSE", "license", named))
    }

    /// Skeleton of a new project. The theme folder is left out when the
    /// theme comes from outside the project.
    pub fn project_tree(&self, data: &TemplateData) -> Folder {
        let mut root = self.new_folder(FolderKey::Root);
        root.add(self.new_dotenv_file(data.clone()))
            .add(self.new_project_settings_file(data.clone()))
            .add(self.new_config_folder(data))
            .add(self.new_folder(FolderKey::Content))
            .add(self.new_folder(FolderKey::Static))
            .add(
                self.new_folder(FolderKey::Routes)
                    .with(self.new_index_page(data.clone()))
                    .with(self.new_index_endpoint(data.clone())),
            );

        if let Some(theme) = data.theme.as_ref().filter(|t| t.kind != ThemeKind::Existing) {
            root.add(self.new_folder(FolderKey::Themes).with(self.new_theme_folder(theme, data)));
        }
        root
    }

    /// Content folder, routes, lib loader, param matcher and API for a
    /// new resource.
    pub fn resource_tree(&self, name: &str, data: &TemplateData) -> Folder {
        let paths = &self.paths;
        let routes = Folder::new(name)
            .with(File::new(paths.index_page_filename(), "index", data.clone()))
            .with(File::new(
                paths.index_endpoint_filename(),
                "indexendpoint",
                data.clone(),
            ))
            .with(
                Folder::new(SLUG_FOLDER)
                    .with(File::new(paths.slug_page_filename(), "slug", data.clone()))
                    .with(File::new(
                        paths.slug_endpoint_filename(),
                        "slugendpoint",
                        data.clone(),
                    ))
                    .with(File::new(
                        paths.slug_layout_filename(),
                        "sluglayout",
                        data.clone(),
                    )),
            );

        let api = Folder::new(name)
            .with(File::new(paths.api_filename(), "api_index", data.clone()))
            .with(
                Folder::new(SLUG_FOLDER)
                    .with(File::new(paths.api_filename(), "api_slug", data.clone())),
            );

        self.new_folder(FolderKey::Root)
            .with(self.new_folder(FolderKey::Content).with(Folder::new(name)))
            .with(self.new_folder(FolderKey::Routes).with(routes))
            .with(self.new_folder(FolderKey::Lib).with(File::new(
                paths.resource_lib_filename(name),
                "lib",
                data.clone(),
            )))
            .with(
                self.new_folder(FolderKey::Params)
                    .with(File::new("string.js", "string_matcher", data.clone())),
            )
            .with(self.new_folder(FolderKey::Api).with(api))
    }

    /// Routes, lib loader, matcher and API for a metadata field of an
    /// existing resource.
    pub fn metadata_tree(&self, resource: &str, name: &str, data: &TemplateData) -> Folder {
        let paths = &self.paths;
        let routes = Folder::new(resource).with(
            Folder::new(name)
                .with(File::new(paths.index_page_filename(), "index", data.clone()))
                .with(File::new(
                    paths.index_endpoint_filename(),
                    "indexendpoint",
                    data.clone(),
                ))
                .with(
                    Folder::new(METADATA_SLUG_FOLDER)
                        .with(File::new(paths.slug_page_filename(), "slug", data.clone()))
                        .with(File::new(
                            paths.slug_endpoint_filename(),
                            "slugendpoint",
                            data.clone(),
                        )),
                ),
        );

        let api = Folder::new(resource).with(
            Folder::new(name)
                .with(File::new(
                    paths.api_filename(),
                    "api_metadata_index",
                    data.clone(),
                ))
                .with(
                    Folder::new(METADATA_SLUG_FOLDER)
                        .with(File::new(paths.api_filename(), "api", data.clone())),
                ),
        );

        self.new_folder(FolderKey::Root)
            .with(self.new_folder(FolderKey::Routes).with(routes))
            .with(self.new_folder(FolderKey::Lib).with(File::new(
                paths.metadata_lib_filename(resource, name),
                "lib",
                data.clone(),
            )))
            .with(
                self.new_folder(FolderKey::Params)
                    .with(File::new("generic.js", "generic_matcher", data.clone())),
            )
            .with(self.new_folder(FolderKey::Api).with(api))
    }

    /// A public page under the routes folder.
    pub fn page_tree(&self, name: &str, language: PageLanguage, data: &TemplateData) -> Folder {
        let page = match language {
            PageLanguage::Svelte => Folder::new(name)
                .with(File::new(
                    self.paths.index_page_filename(),
                    language.name(),
                    data.clone(),
                ))
                .with(self.new_index_endpoint(data.clone())),
            PageLanguage::Markdown => Folder::new(name).with(File::new(
                self.paths.markdown_page_filename(),
                language.name(),
                data.clone(),
            )),
        };
        self.new_folder(FolderKey::Root)
            .with(self.new_folder(FolderKey::Routes).with(page))
    }

    /// `content/<resource>/<slug>/index.svx`.
    pub fn content_tree(
        &self,
        resource: &str,
        slug: &str,
        template_id: &str,
        data: &TemplateData,
    ) -> Folder {
        self.new_folder(FolderKey::Root).with(
            self.new_folder(FolderKey::Content).with(
                Folder::new(resource).with(Folder::new(slug).with(File::new(
                    self.paths.resource_content_filename(),
                    template_id,
                    data.clone(),
                ))),
            ),
        )
    }

    pub fn menu_tree(&self, data: &TemplateData) -> Folder {
        self.new_folder(FolderKey::Root).with(
            self.new_folder(FolderKey::Config)
                .with(File::new("menu.js.ts", "menu", data.clone())),
        )
    }

    /// Static sitemap and RSS feed.
    pub fn no_page_tree(&self, data: &TemplateData) -> Folder {
        self.new_folder(FolderKey::Root).with(
            self.new_folder(FolderKey::Static)
                .with(File::new("sitemap.xml", "sitemap", data.clone()))
                .with(File::new("rss.xml", "rss", data.clone())),
        )
    }
}

