//! CSS framework and theme setup.
//!
//! Choosing a plan is a pure decision over `(is_new_project, theme kind)`;
//! the plan's steps then depend only on the framework. [`plan_steps`] lists
//! the steps and [`CssSetup::setup`] runs them in order, stopping at the
//! first failure.

use crate::artifact::Artifact;
use crate::builder::ArtifactKind;
use crate::config::ProjectConfig;
use crate::constants::theme_files;
use crate::data::{TemplateData, ThemeKind};
use crate::error::{Error, Result};
use crate::fs::FileSystem;
use crate::pathmaker::{PathMaker, WorkdirPaths};
use crate::renderer::TemplateRenderer;
use crate::resources::{Bundle, Registry, ThemeStyle};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Supported CSS frameworks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CssLib {
    #[serde(rename = "bootstrap")]
    Bootstrap,
    #[serde(rename = "bulma")]
    Bulma,
    #[serde(rename = "scss")]
    Scss,
    #[serde(rename = "tailwindcss")]
    TailwindCss,
    #[serde(rename = "vanillacss")]
    VanillaCss,
}

impl CssLib {
    pub const ALL: [CssLib; 5] = [
        CssLib::Bootstrap,
        CssLib::Bulma,
        CssLib::Scss,
        CssLib::TailwindCss,
        CssLib::VanillaCss,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CssLib::Bootstrap => "bootstrap",
            CssLib::Bulma => "bulma",
            CssLib::Scss => "scss",
            CssLib::TailwindCss => "tailwindcss",
            CssLib::VanillaCss => "vanillacss",
        }
    }

    pub fn is_utility_first(&self) -> bool {
        matches!(self, CssLib::TailwindCss)
    }

    /// Frameworks compiled from SCSS ship a separate variables file.
    pub fn uses_scss(&self) -> bool {
        matches!(self, CssLib::Bootstrap | CssLib::Bulma | CssLib::Scss)
    }
}

impl fmt::Display for CssLib {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CssLib {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        CssLib::ALL
            .into_iter()
            .find(|lib| lib.name() == s)
            .ok_or_else(|| Error::option_not_valid(s, CssLib::ALL.map(|l| l.name())))
    }
}

/// Which fixed sequence of steps to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plan {
    /// New project with the blank theme
    Unstyled,
    /// New project with the built-in styled theme
    Styled,
    /// Theme scaffold, or a project using an external theme
    Theme,
}

impl Plan {
    pub fn select(is_new_project: bool, theme: ThemeKind) -> Plan {
        if !is_new_project {
            return Plan::Theme;
        }
        match theme {
            ThemeKind::Blank => Plan::Unstyled,
            ThemeKind::Styled => Plan::Styled,
            ThemeKind::Existing => Plan::Theme,
        }
    }

    pub fn style(&self) -> ThemeStyle {
        match self {
            Plan::Styled => ThemeStyle::Styled,
            Plan::Unstyled | Plan::Theme => ThemeStyle::Unstyled,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Render,
    Copy,
}

/// One file produced by a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub action: Action,
    pub file_id: &'static str,
    pub dest: PathBuf,
}

impl Step {
    fn render(file_id: &'static str, dest: PathBuf) -> Self {
        Self {
            action: Action::Render,
            file_id,
            dest,
        }
    }

    fn copy(file_id: &'static str, dest: PathBuf) -> Self {
        Self {
            action: Action::Copy,
            file_id,
            dest,
        }
    }
}

/// Ordered steps for `plan` with `lib`, written into the project
/// `project_name` under the working directory.
pub fn plan_steps(
    lib: CssLib,
    plan: Plan,
    paths: &WorkdirPaths<'_>,
    project_name: &str,
    theme_name: &str,
) -> Vec<Step> {
    let root = paths.project_root(project_name);
    let src = paths.project_src_folder(project_name);
    let routes = paths.project_routes_folder(project_name);

    let mut steps = vec![
        Step::render(theme_files::PACKAGE_JSON, root.join("package.json")),
        Step::copy(theme_files::SVELTE_CONFIG, root.join("svelte.config.js")),
        Step::render(theme_files::VITE_CONFIG, root.join("vite.config.ts")),
    ];

    if lib.is_utility_first() {
        steps.push(Step::copy(
            theme_files::TAILWIND_CONFIG,
            root.join("tailwind.config.cjs"),
        ));
        steps.push(Step::copy(theme_files::POSTCSS, root.join("postcss.config.cjs")));
    }

    steps.push(Step::copy(theme_files::APP_HTML, src.join("app.html")));

    if lib.uses_scss() {
        steps.push(Step::copy(theme_files::APP_CSS, src.join("app.scss")));
        steps.push(Step::copy(
            theme_files::VARIABLES_SCSS,
            src.join("_variables.scss"),
        ));
    } else {
        steps.push(Step::copy(theme_files::APP_CSS, src.join("app.css")));
    }

    steps.push(Step::render(theme_files::LAYOUT, routes.join("+layout.svelte")));
    steps.push(Step::render(theme_files::LAYOUT_TS, routes.join("+layout.ts")));
    steps.push(Step::render(theme_files::ERROR, routes.join("+error.svelte")));

    let partials = paths.project_theme_partials_folder(project_name, theme_name);
    match plan {
        Plan::Unstyled => {
            steps.push(Step::copy(theme_files::HERO, partials.join("Hero.svelte")));
        }
        Plan::Styled => {
            steps.push(Step::copy(theme_files::HERO, partials.join("Hero.svelte")));
            steps.push(Step::copy(theme_files::FOOTER, partials.join("Footer.svelte")));
        }
        Plan::Theme => {}
    }

    steps
}

/// Sets up a CSS framework for one project.
pub struct CssSetup<'a> {
    lib: CssLib,
    config: &'a ProjectConfig,
    data: TemplateData,
    bundle: &'a Bundle,
    fs: &'a dyn FileSystem,
    renderer: &'a dyn TemplateRenderer,
}

impl<'a> CssSetup<'a> {
    /// # Arguments
    /// * `lib` - Framework to set up
    /// * `config` - Working-directory level configuration
    /// * `data` - Must carry the project name and the theme descriptor
    pub fn new(
        lib: CssLib,
        config: &'a ProjectConfig,
        data: TemplateData,
        bundle: &'a Bundle,
        fs: &'a dyn FileSystem,
        renderer: &'a dyn TemplateRenderer,
    ) -> Self {
        Self {
            lib,
            config,
            data,
            bundle,
            fs,
            renderer,
        }
    }

    /// Chosen plan and its steps; nothing is written.
    ///
    /// # Errors
    /// * `Error::ConfigError` if the data lacks a project name or a theme
    pub fn plan(&self, is_new_project: bool) -> Result<(Plan, Vec<Step>)> {
        let project_name = self.data.project_name.as_deref().ok_or_else(|| {
            Error::ConfigError("CSS setup needs a project name".into())
        })?;
        let theme = self
            .data
            .theme
            .as_ref()
            .ok_or_else(|| Error::ConfigError("CSS setup needs a theme".into()))?;

        let plan = Plan::select(is_new_project, theme.kind);
        let paths = PathMaker::new(self.config).workdir();
        let steps = plan_steps(self.lib, plan, &paths, project_name, &theme.name);
        Ok((plan, steps))
    }

    /// Runs the selected plan.
    ///
    /// # Errors
    /// * The first error raised by any step; earlier steps stay written
    pub fn setup(&self, is_new_project: bool) -> Result<()> {
        let (plan, steps) = self.plan(is_new_project)?;
        let registry = Registry::theme(self.lib, plan.style())?;
        let artifact = Artifact::new(
            ArtifactKind::Theme,
            registry,
            self.bundle,
            self.fs,
            self.renderer,
        );

        debug!("Running {:?} plan for {} ({} steps)", plan, self.lib, steps.len());
        for step in &steps {
            match step.action {
                Action::Render => artifact.render_to(step.file_id, &self.data, &step.dest)?,
                Action::Copy => artifact.copy_to(step.file_id, &step.dest)?,
            }
        }
        info!("{} is set up", self.lib);
        Ok(())
    }
}
