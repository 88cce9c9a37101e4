//! Embedded templates and the registries that name them.
//!
//! The [`Bundle`] holds every file shipped inside the binary, addressed by
//! its path under `resources/`. A [`Registry`] maps symbolic template
//! identifiers to bundle paths. Registries are plain values built on demand
//! and handed to the builders that need them.

use crate::css::CssLib;
use crate::error::{Error, Result};
use indexmap::IndexMap;
use std::borrow::Cow;

macro_rules! embed_files {
    ($($path:literal),* $(,)?) => {
        &[$(($path, include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/resources/", $path)))),*]
    };
}

static EMBEDDED: &[(&str, &str)] = embed_files![
    // site config
    "templates/site/defaults.js.ts.j2",
    "templates/site/externals.js.ts.j2",
    "templates/site/website.js.ts.j2",
    "templates/site/init_menu.js.ts.j2",
    "templates/site/menu.js.ts.j2",
    // misc
    "templates/misc/env.j2",
    "templates/misc/kiln.json.j2",
    "templates/misc/README.md.j2",
    "templates/misc/LICENSE.j2",
    // project pages
    "templates/project/index.svelte.j2",
    "templates/project/index.notheme.svelte.j2",
    "templates/project/index.ts.j2",
    "templates/project/theme.config.js.j2",
    // resources
    "templates/resource/lib.ts.j2",
    "templates/resource/page.ts.j2",
    "templates/resource/slug.ts.j2",
    "templates/resource/layout.svelte.j2",
    "templates/resource/blank/page.svelte.j2",
    "templates/resource/blank/slug.svelte.j2",
    "templates/resource/styled/page.svelte.j2",
    "templates/resource/styled/slug.svelte.j2",
    "templates/resource/api/index.ts.j2",
    "templates/resource/api/slug.ts.j2",
    "templates/resource/api/metadata_index.ts.j2",
    "templates/resource/matchers/string.js.j2",
    "templates/resource/matchers/generic.js.j2",
    // metadata
    "templates/metadata/api_single.ts.j2",
    "templates/metadata/api_list.ts.j2",
    "templates/metadata/lib_single.ts.j2",
    "templates/metadata/lib_list.ts.j2",
    "templates/metadata/page.ts.j2",
    "templates/metadata/slug.ts.j2",
    "templates/metadata/blank/page.svelte.j2",
    "templates/metadata/blank/slug.svelte.j2",
    "templates/metadata/styled/page.svelte.j2",
    "templates/metadata/styled/slug.svelte.j2",
    // pages
    "templates/page/page.ts.j2",
    "templates/page/blank/page.svelte.j2",
    "templates/page/blank/page.svx.j2",
    "templates/page/styled/page.svelte.j2",
    "templates/page/styled/page.svx.j2",
    // content
    "templates/content/blank.svx.j2",
    "templates/content/sample.svx.j2",
    // xml
    "templates/xml/sitemap.xml.j2",
    "templates/xml/rss.xml.j2",
    // themes, shared by every framework
    "templates/themes/shared/svelte.config.js",
    "templates/themes/shared/vite.config.ts.j2",
    "templates/themes/shared/app.html",
    "templates/themes/shared/layout.ts.j2",
    "templates/themes/shared/error.unstyled.svelte.j2",
    "templates/themes/shared/error.styled.svelte.j2",
    "templates/themes/blank/layout.svelte.j2",
    "templates/themes/blank/Hero.svelte",
    "templates/themes/styled/layout.svelte.j2",
    "templates/themes/styled/Hero.svelte",
    "templates/themes/styled/Footer.svelte",
    // themes, per framework
    "templates/themes/bootstrap/package.json.j2",
    "templates/themes/bootstrap/app.scss",
    "templates/themes/bootstrap/variables.scss",
    "templates/themes/bulma/package.json.j2",
    "templates/themes/bulma/app.scss",
    "templates/themes/bulma/variables.scss",
    "templates/themes/scss/package.json.j2",
    "templates/themes/scss/app.scss",
    "templates/themes/scss/variables.scss",
    "templates/themes/tailwindcss/package.json.j2",
    "templates/themes/tailwindcss/app.css",
    "templates/themes/tailwindcss/tailwind.config.cjs",
    "templates/themes/tailwindcss/postcss.config.cjs",
    "templates/themes/vanillacss/package.json.j2",
    "templates/themes/vanillacss/app.css",
];

/// Read-only, path-addressed store of template files.
#[derive(Debug, Clone, Default)]
pub struct Bundle {
    files: IndexMap<String, Cow<'static, str>>,
}

impl Bundle {
    /// The files compiled into the binary.
    pub fn embedded() -> Self {
        let files = EMBEDDED
            .iter()
            .map(|(path, text)| (path.to_string(), Cow::Borrowed(*text)))
            .collect();
        Self { files }
    }

    /// A bundle built from arbitrary entries.
    pub fn from_entries<I, P, T>(entries: I) -> Self
    where
        I: IntoIterator<Item = (P, T)>,
        P: Into<String>,
        T: Into<String>,
    {
        let files = entries
            .into_iter()
            .map(|(path, text)| (path.into(), Cow::Owned(text.into())))
            .collect();
        Self { files }
    }

    /// Returns the text stored at `path`.
    ///
    /// # Errors
    /// * `Error::BundleFileNotFound` if nothing is stored there
    pub fn open(&self, path: &str) -> Result<&str> {
        self.files
            .get(path)
            .map(|text| text.as_ref())
            .ok_or_else(|| Error::BundleFileNotFound {
                path: path.to_string(),
            })
    }

    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }
}

type Table = &'static [(&'static str, &'static str)];

const PROJECT_FILES: Table = &[
    ("defaults", "templates/site/defaults.js.ts.j2"),
    ("externals", "templates/site/externals.js.ts.j2"),
    ("website", "templates/site/website.js.ts.j2"),
    ("init_menu", "templates/site/init_menu.js.ts.j2"),
    ("menu", "templates/site/menu.js.ts.j2"),
    ("dotenv", "templates/misc/env.j2"),
    ("project_settings", "templates/misc/kiln.json.j2"),
    ("readme", "templates/misc/README.md.j2"),
    ("license", "templates/misc/LICENSE.j2"),
    ("index", "templates/project/index.svelte.j2"),
    ("index_notheme", "templates/project/index.notheme.svelte.j2"),
    ("indexendpoint", "templates/project/index.ts.j2"),
    ("theme_config", "templates/project/theme.config.js.j2"),
];

const RESOURCE_FILES: Table = &[
    ("lib", "templates/resource/lib.ts.j2"),
    ("index_blank", "templates/resource/blank/page.svelte.j2"),
    ("index_styled", "templates/resource/styled/page.svelte.j2"),
    ("indexendpoint", "templates/resource/page.ts.j2"),
    ("slug_blank", "templates/resource/blank/slug.svelte.j2"),
    ("slug_styled", "templates/resource/styled/slug.svelte.j2"),
    ("slugendpoint", "templates/resource/slug.ts.j2"),
    ("sluglayout", "templates/resource/layout.svelte.j2"),
];

const API_FILES: Table = &[
    ("api_index", "templates/resource/api/index.ts.j2"),
    ("api_slug", "templates/resource/api/slug.ts.j2"),
    ("api_metadata_index", "templates/resource/api/metadata_index.ts.j2"),
];

const MATCHER_FILES: Table = &[
    ("string_matcher", "templates/resource/matchers/string.js.j2"),
    ("generic_matcher", "templates/resource/matchers/generic.js.j2"),
];

const METADATA_FILES: Table = &[
    ("api_single", "templates/metadata/api_single.ts.j2"),
    ("api_list", "templates/metadata/api_list.ts.j2"),
    ("lib_single", "templates/metadata/lib_single.ts.j2"),
    ("lib_list", "templates/metadata/lib_list.ts.j2"),
    ("index_blank", "templates/metadata/blank/page.svelte.j2"),
    ("index_styled", "templates/metadata/styled/page.svelte.j2"),
    ("indexendpoint", "templates/metadata/page.ts.j2"),
    ("slug_blank", "templates/metadata/blank/slug.svelte.j2"),
    ("slug_styled", "templates/metadata/styled/slug.svelte.j2"),
    ("slugendpoint", "templates/metadata/slug.ts.j2"),
];

const PAGE_FILES: Table = &[
    ("svelte_blank", "templates/page/blank/page.svelte.j2"),
    ("svelte_styled", "templates/page/styled/page.svelte.j2"),
    ("markdown_blank", "templates/page/blank/page.svx.j2"),
    ("markdown_styled", "templates/page/styled/page.svx.j2"),
    ("indexendpoint", "templates/page/page.ts.j2"),
];

const CONTENT_FILES: Table = &[
    ("blank", "templates/content/blank.svx.j2"),
    ("sample", "templates/content/sample.svx.j2"),
];

const XML_FILES: Table = &[
    ("sitemap_static", "templates/xml/sitemap.xml.j2"),
    ("rss_static", "templates/xml/rss.xml.j2"),
];

const MENU_FILES: Table = &[("menu", "templates/site/menu.js.ts.j2")];

const UNSTYLED_THEME_FILES: Table = &[
    ("svelte_config", "templates/themes/shared/svelte.config.js"),
    ("vite_config", "templates/themes/shared/vite.config.ts.j2"),
    ("app_html", "templates/themes/shared/app.html"),
    ("layout", "templates/themes/blank/layout.svelte.j2"),
    ("layout_ts", "templates/themes/shared/layout.ts.j2"),
    ("error", "templates/themes/shared/error.unstyled.svelte.j2"),
    ("hero", "templates/themes/blank/Hero.svelte"),
];

const STYLED_THEME_FILES: Table = &[
    ("svelte_config", "templates/themes/shared/svelte.config.js"),
    ("vite_config", "templates/themes/shared/vite.config.ts.j2"),
    ("app_html", "templates/themes/shared/app.html"),
    ("layout", "templates/themes/styled/layout.svelte.j2"),
    ("layout_ts", "templates/themes/shared/layout.ts.j2"),
    ("error", "templates/themes/shared/error.styled.svelte.j2"),
    ("hero", "templates/themes/styled/Hero.svelte"),
    ("footer", "templates/themes/styled/Footer.svelte"),
];

const BOOTSTRAP_FILES: Table = &[
    ("package_json", "templates/themes/bootstrap/package.json.j2"),
    ("app_css", "templates/themes/bootstrap/app.scss"),
    ("variables_scss", "templates/themes/bootstrap/variables.scss"),
];

const BULMA_FILES: Table = &[
    ("package_json", "templates/themes/bulma/package.json.j2"),
    ("app_css", "templates/themes/bulma/app.scss"),
    ("variables_scss", "templates/themes/bulma/variables.scss"),
];

const SCSS_FILES: Table = &[
    ("package_json", "templates/themes/scss/package.json.j2"),
    ("app_css", "templates/themes/scss/app.scss"),
    ("variables_scss", "templates/themes/scss/variables.scss"),
];

const TAILWIND_FILES: Table = &[
    ("package_json", "templates/themes/tailwindcss/package.json.j2"),
    ("app_css", "templates/themes/tailwindcss/app.css"),
    ("tailwind_css_config", "templates/themes/tailwindcss/tailwind.config.cjs"),
    ("postcss", "templates/themes/tailwindcss/postcss.config.cjs"),
];

const VANILLA_FILES: Table = &[
    ("package_json", "templates/themes/vanillacss/package.json.j2"),
    ("app_css", "templates/themes/vanillacss/app.css"),
];

/// Styling mode of the theme registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeStyle {
    Unstyled,
    Styled,
}

/// Immutable map from template identifier to bundle path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    entries: IndexMap<String, String>,
}

impl Registry {
    fn from_table(table: Table) -> Self {
        Self::from_entries(table.iter().copied())
    }

    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn project() -> Self {
        Self::from_table(PROJECT_FILES)
    }

    /// Resource pages together with their API routes and matchers.
    pub fn resource() -> Result<Self> {
        Self::from_table(RESOURCE_FILES)
            .merge(&Self::from_table(API_FILES))?
            .merge(&Self::from_table(MATCHER_FILES))
    }

    /// Metadata pages together with their API routes and matchers.
    pub fn metadata() -> Result<Self> {
        Self::from_table(METADATA_FILES)
            .merge(&Self::from_table(API_FILES))?
            .merge(&Self::from_table(MATCHER_FILES))
    }

    pub fn page() -> Self {
        Self::from_table(PAGE_FILES)
    }

    pub fn content() -> Self {
        Self::from_table(CONTENT_FILES)
    }

    pub fn xml() -> Self {
        Self::from_table(XML_FILES)
    }

    pub fn menu() -> Self {
        Self::from_table(MENU_FILES)
    }

    /// Theme files for `lib` in the given styling mode.
    pub fn theme(lib: CssLib, style: ThemeStyle) -> Result<Self> {
        let shared = match style {
            ThemeStyle::Unstyled => UNSTYLED_THEME_FILES,
            ThemeStyle::Styled => STYLED_THEME_FILES,
        };
        let framework = match lib {
            CssLib::Bootstrap => BOOTSTRAP_FILES,
            CssLib::Bulma => BULMA_FILES,
            CssLib::Scss => SCSS_FILES,
            CssLib::TailwindCss => TAILWIND_FILES,
            CssLib::VanillaCss => VANILLA_FILES,
        };
        Self::from_table(shared).merge(&Self::from_table(framework))
    }

    /// Disjoint union of two registries.
    ///
    /// # Errors
    /// * `Error::ConfigError` naming the first key present in both
    pub fn merge(&self, other: &Registry) -> Result<Registry> {
        let mut entries = self.entries.clone();
        for (key, path) in &other.entries {
            if entries.contains_key(key) {
                return Err(Error::ConfigError(format!(
                    "template identifier '{}' is registered twice",
                    key
                )));
            }
            entries.insert(key.clone(), path.clone());
        }
        Ok(Registry { entries })
    }

    /// Bundle path registered for `key`.
    ///
    /// # Errors
    /// * `Error::ResourceNotFound` if the key is unknown
    pub fn get(&self, key: &str) -> Result<&str> {
        self.entries
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| Error::ResourceNotFound {
                key: key.to_string(),
            })
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
