//! Common constants used throughout kiln.

/// Settings file names looked up in a project root, in order
pub const CONFIG_FILES: [&str; 3] = ["kiln.json", "kiln.yml", "kiln.yaml"];

/// Extensions recognised as public pages or content entries
pub const PAGE_EXTENSIONS: [&str; 3] = ["svelte", "svx", "mdx"];

/// Prefix hiding a page or content entry from menus and feeds
pub const DRAFT_PREFIX: &str = "__";

/// Default site address used when feeds are generated without one
pub const DEFAULT_BASE_URL: &str = "http://localhost:5173";

/// Name of the production dotenv file created with a project
pub const DOTENV_FILE: &str = ".env.production";

/// Files created under `config/` for every new project
pub const SITE_CONFIG_FILES: [(&str, &str); 4] = [
    ("defaults", "defaults.js.ts"),
    ("externals", "externals.js.ts"),
    ("website", "website.js.ts"),
    ("menu", "menu.js.ts"),
];

/// Theme file identifiers, shared by every CSS framework registry
pub mod theme_files {
    pub const PACKAGE_JSON: &str = "package_json";
    pub const SVELTE_CONFIG: &str = "svelte_config";
    pub const VITE_CONFIG: &str = "vite_config";
    pub const TAILWIND_CONFIG: &str = "tailwind_css_config";
    pub const POSTCSS: &str = "postcss";
    pub const APP_HTML: &str = "app_html";
    pub const APP_CSS: &str = "app_css";
    pub const VARIABLES_SCSS: &str = "variables_scss";
    pub const LAYOUT: &str = "layout";
    pub const LAYOUT_TS: &str = "layout_ts";
    pub const ERROR: &str = "error";
    pub const HERO: &str = "hero";
    pub const FOOTER: &str = "footer";
}
