//! Command-line interface for kiln.
//! Flag values for enumerated options are kept as strings here and checked
//! by the library, so every front end reports the same "option not valid"
//! error.

use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments structure for kiln.
#[derive(Parser, Debug)]
#[command(author, version, about = "kiln: scaffolding for SvelteKit content sites", long_about = None)]
pub struct Args {
    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory to run in: the parent of a new project, or a project root
    #[arg(short = 'C', long, global = true, default_value = ".")]
    pub dir: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Create a new project
    Init {
        /// Project name, also the folder it is created in
        name: String,

        /// CSS framework: bootstrap, bulma, scss, tailwindcss or vanillacss
        #[arg(long, default_value = "tailwindcss")]
        css: String,

        /// Theme kind: blank, styled or existing
        #[arg(long, default_value = "blank")]
        theme: String,

        /// Theme name, defaults to `<name>_theme`
        #[arg(long)]
        theme_name: Option<String>,
    },

    /// Create a project for developing a theme
    NewTheme {
        /// Theme name
        name: String,

        /// Project folder, defaults to `<name>_project`
        #[arg(long)]
        project: Option<String>,

        /// CSS framework: bootstrap, bulma, scss, tailwindcss or vanillacss
        #[arg(long, default_value = "tailwindcss")]
        css: String,
    },

    /// Add a resource with its routes, loader and API
    NewResource {
        /// Resource name, e.g. `posts`
        name: String,
    },

    /// Add a metadata field to an existing resource
    AddMetadata {
        /// Metadata name, e.g. `category`
        name: String,

        /// Resource the metadata belongs to
        #[arg(long = "to")]
        resource: String,

        /// Values per entry: single or list
        #[arg(long = "type", default_value = "single")]
        metadata_type: String,
    },

    /// Add a public page
    NewPage {
        /// Page name, also its route
        name: String,

        /// Page language: svelte or markdown
        #[arg(long = "as", default_value = "svelte")]
        language: String,
    },

    /// Add a content entry to an existing resource
    NewContent {
        /// Resource the entry belongs to
        resource: String,

        /// Entry slug
        slug: String,

        /// Start from the sample entry instead of a blank one
        #[arg(short, long)]
        sample: bool,
    },

    /// Regenerate the navigation menu from the project
    Menu {
        /// List every content entry under its resource
        #[arg(long)]
        full: bool,
    },

    /// Regenerate the static sitemap and RSS feed
    Xml {
        /// Site address used in generated links
        #[arg(long, default_value = crate::constants::DEFAULT_BASE_URL)]
        base_url: String,
    },
}

/// Parses command line arguments and returns the Args structure.
///
/// # Returns
/// * `Args` - Parsed command line arguments
///
/// # Exits
/// * With status code 1 if the subcommand is missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if matches!(
                e.kind(),
                ErrorKind::MissingSubcommand
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ) {
                let _ = Args::command().print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
