use std::path::{Path, PathBuf};

use kiln::config::{ProjectConfig, Settings};
use kiln::constants::theme_files;
use kiln::css::{plan_steps, Action, CssLib, CssSetup, Plan};
use kiln::data::{TemplateData, ThemeData, ThemeKind};
use kiln::error::Error;
use kiln::fs::{FileSystem, MemoryFs};
use kiln::pathmaker::PathMaker;
use kiln::renderer::MiniJinjaRenderer;
use kiln::resources::Bundle;

fn workdir() -> ProjectConfig {
    ProjectConfig::new("/work", Settings::default()).unwrap()
}

fn ids(lib: CssLib, plan: Plan) -> Vec<&'static str> {
    let config = workdir();
    let paths = PathMaker::new(&config).workdir();
    plan_steps(lib, plan, &paths, "site", "site_theme")
        .into_iter()
        .map(|s| s.file_id)
        .collect()
}

#[test]
fn test_bulma_blank_new_project() {
    let steps = ids(CssLib::Bulma, Plan::select(true, ThemeKind::Blank));

    assert!(steps.contains(&theme_files::VARIABLES_SCSS));
    assert!(steps.contains(&theme_files::HERO));
    assert!(!steps.contains(&theme_files::TAILWIND_CONFIG));
    assert!(!steps.contains(&theme_files::POSTCSS));
    assert!(!steps.contains(&theme_files::FOOTER));
}

#[test]
fn test_tailwind_gets_its_configs() {
    let steps = ids(CssLib::TailwindCss, Plan::Unstyled);
    assert!(steps.contains(&theme_files::TAILWIND_CONFIG));
    assert!(steps.contains(&theme_files::POSTCSS));
    assert!(!steps.contains(&theme_files::VARIABLES_SCSS));
}

#[test]
fn test_unknown_framework_lists_all_options() {
    match "foo".parse::<CssLib>() {
        Err(Error::OptionNotValid { value, valid }) => {
            assert_eq!(value, "foo");
            assert_eq!(
                valid,
                vec!["bootstrap", "bulma", "scss", "tailwindcss", "vanillacss"]
            );
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_plan_selection() {
    assert_eq!(Plan::select(true, ThemeKind::Blank), Plan::Unstyled);
    assert_eq!(Plan::select(true, ThemeKind::Styled), Plan::Styled);
    assert_eq!(Plan::select(true, ThemeKind::Existing), Plan::Theme);
    assert_eq!(Plan::select(false, ThemeKind::Blank), Plan::Theme);
    assert_eq!(Plan::select(false, ThemeKind::Styled), Plan::Theme);
}

#[test]
fn test_plan_is_repeatable() {
    for lib in CssLib::ALL {
        for plan in [Plan::Unstyled, Plan::Styled, Plan::Theme] {
            assert_eq!(ids(lib, plan), ids(lib, plan));
        }
    }
}

#[test]
fn test_styled_adds_footer() {
    let steps = ids(CssLib::VanillaCss, Plan::Styled);
    assert!(steps.contains(&theme_files::HERO));
    assert!(steps.contains(&theme_files::FOOTER));
}

#[test]
fn test_theme_plan_has_no_partials() {
    let steps = ids(CssLib::Bootstrap, Plan::Theme);
    assert_eq!(steps.len(), 9);
    assert!(!steps.contains(&theme_files::HERO));
    assert!(!steps.contains(&theme_files::FOOTER));
}

#[test]
fn test_step_destinations() {
    let config = workdir();
    let paths = PathMaker::new(&config).workdir();
    let steps = plan_steps(CssLib::Scss, Plan::Unstyled, &paths, "site", "site_theme");

    let dest = |id: &str| {
        steps
            .iter()
            .find(|s| s.file_id == id)
            .map(|s| s.dest.clone())
            .unwrap()
    };
    assert_eq!(dest(theme_files::APP_CSS), PathBuf::from("/work/site/src/app.scss"));
    assert_eq!(
        dest(theme_files::LAYOUT),
        PathBuf::from("/work/site/src/routes/+layout.svelte")
    );
    assert_eq!(
        dest(theme_files::HERO),
        PathBuf::from("/work/site/themes/site_theme/partials/Hero.svelte")
    );
    assert_eq!(steps[0].action, Action::Render);
    assert_eq!(steps[1].action, Action::Copy);
}

#[test]
fn test_setup_writes_every_step() {
    let config = workdir();
    let bundle = Bundle::embedded();
    let fs = MemoryFs::new();
    let renderer = MiniJinjaRenderer::new();
    let data = TemplateData::new("site")
        .with_project_name("site")
        .with_theme(ThemeData::new(ThemeKind::Styled, "site_theme", CssLib::Bulma));

    let setup = CssSetup::new(CssLib::Bulma, &config, data, &bundle, &fs, &renderer);
    let (plan, steps) = setup.plan(true).unwrap();
    assert_eq!(plan, Plan::Styled);
    assert!(fs.files().is_empty());

    setup.setup(true).unwrap();
    for step in &steps {
        assert!(fs.exists(&step.dest), "{} missing", step.dest.display());
    }

    let package = fs
        .read_to_string(Path::new("/work/site/package.json"))
        .unwrap();
    assert!(package.contains("bulma"));
    let layout = fs
        .read_to_string(Path::new("/work/site/src/routes/+layout.svelte"))
        .unwrap();
    assert!(layout.contains("Footer"));
}

#[test]
fn test_setup_needs_theme() {
    let config = workdir();
    let bundle = Bundle::embedded();
    let fs = MemoryFs::new();
    let renderer = MiniJinjaRenderer::new();
    let data = TemplateData::new("site").with_project_name("site");

    let setup = CssSetup::new(CssLib::Scss, &config, data, &bundle, &fs, &renderer);
    assert!(matches!(setup.setup(true), Err(Error::ConfigError(_))));
    assert!(fs.files().is_empty());
}

#[test]
fn test_setup_stops_at_failing_step() {
    let missing = "templates/themes/shared/app.html";
    let embedded = Bundle::embedded();
    let bundle = Bundle::from_entries(
        embedded
            .paths()
            .filter(|path| *path != missing)
            .map(|path| (path.to_string(), embedded.open(path).unwrap().to_string())),
    );
    let config = workdir();
    let fs = MemoryFs::new();
    let renderer = MiniJinjaRenderer::new();
    let data = TemplateData::new("site")
        .with_project_name("site")
        .with_theme(ThemeData::new(ThemeKind::Blank, "site_theme", CssLib::TailwindCss));

    let setup = CssSetup::new(CssLib::TailwindCss, &config, data, &bundle, &fs, &renderer);
    match setup.setup(true) {
        Err(Error::BundleFileNotFound { path }) => assert_eq!(path, missing),
        other => panic!("unexpected result: {:?}", other),
    }

    assert!(fs.exists(Path::new("/work/site/package.json")));
    assert!(fs.exists(Path::new("/work/site/postcss.config.cjs")));
    assert!(!fs.exists(Path::new("/work/site/src/app.html")));
    assert!(!fs.exists(Path::new("/work/site/src/app.css")));
    assert!(!fs.exists(Path::new("/work/site/src/routes/+layout.svelte")));
}
