//! kiln's entry point: parses arguments, wires the embedded bundle, the
//! disk and the renderer together, and dispatches to a generation command.

use kiln::{
    cli::{get_args, Args, Command},
    config::{ProjectConfig, Settings},
    css::CssLib,
    data::{MetadataType, PageLanguage, ThemeData, ThemeKind},
    error::{default_error_handler, Result},
    existing,
    fs::OsFs,
    generate::{ContentTemplate, Generator, ProjectOptions},
    logger::init_logger,
    renderer::MiniJinjaRenderer,
    resources::Bundle,
};

fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn site_name(project: &ProjectConfig) -> String {
    project
        .root()
        .canonicalize()
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| "site".to_string())
}

/// Runs one command.
///
/// Commands that create a project treat `--dir` as the working directory
/// the project is created in; every other command treats it as the root of
/// an existing project.
fn run(args: Args) -> Result<()> {
    let bundle = Bundle::embedded();
    let fs = OsFs::new();
    let renderer = MiniJinjaRenderer::new();
    let generator = Generator::new(&bundle, &fs, &renderer);

    match args.command {
        Command::Init {
            name,
            css,
            theme,
            theme_name,
        } => {
            let workdir = ProjectConfig::new(&args.dir, Settings::default())?;
            let theme_name = theme_name.unwrap_or_else(|| format!("{}_theme", name));
            let kind: ThemeKind = theme.parse()?;
            let css_lib: CssLib = css.parse()?;
            let theme = ThemeData::new(kind, theme_name, css_lib);
            generator.init_project(&workdir, &ProjectOptions { name, theme })?;
        }
        Command::NewTheme { name, project, css } => {
            let workdir = ProjectConfig::new(&args.dir, Settings::default())?;
            let project = project.unwrap_or_else(|| format!("{}_project", name));
            generator.new_theme(&workdir, &project, &name, css.parse()?)?;
        }
        Command::NewResource { name } => {
            let project = ProjectConfig::from_root(&args.dir)?;
            generator.new_resource(&project, &name)?;
        }
        Command::AddMetadata {
            name,
            resource,
            metadata_type,
        } => {
            let project = ProjectConfig::from_root(&args.dir)?;
            let metadata_type: MetadataType = metadata_type.parse()?;
            generator.add_metadata(&project, &resource, &name, metadata_type)?;
        }
        Command::NewPage { name, language } => {
            let project = ProjectConfig::from_root(&args.dir)?;
            let language: PageLanguage = language.parse()?;
            generator.new_page(&project, &name, language)?;
        }
        Command::NewContent {
            resource,
            slug,
            sample,
        } => {
            let project = ProjectConfig::from_root(&args.dir)?;
            let template = if sample {
                ContentTemplate::Sample
            } else {
                ContentTemplate::Blank
            };
            generator.new_content(&project, &resource, &slug, template)?;
        }
        Command::Menu { full } => {
            let project = ProjectConfig::from_root(&args.dir)?;
            let items = existing::menu_items(&project, full)?;
            generator.generate_menu(&project, items)?;
        }
        Command::Xml { base_url } => {
            let project = ProjectConfig::from_root(&args.dir)?;
            let items = existing::no_page_items(&project, &base_url)?;
            generator.generate_xml(&project, &site_name(&project), items)?;
        }
    }
    Ok(())
}
