//! Error handling for kiln.
//! Defines the error taxonomy shared by every generation step and the
//! `Result` alias used throughout the crate.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while resolving, rendering or writing generated files.
///
/// Every operation returns the first error it meets. Nothing is retried and
/// nothing already written is rolled back.
#[derive(Error, Debug)]
pub enum Error {
    /// An enumerated option (CSS framework, theme kind, metadata type, ...)
    /// received a value outside its accepted set.
    #[error("Option not valid: '{value}'. Valid options are: {}.", .valid.join(", "))]
    OptionNotValid { value: String, valid: Vec<String> },

    /// A builder was asked for a template identifier it does not know.
    #[error("Template not found in bundle: '{id}' is not a {kind} template. Valid templates are: {}.", .valid.join(", "))]
    TemplateNotFound {
        id: String,
        kind: String,
        valid: Vec<String>,
    },

    /// A registry was asked for a key it does not hold.
    #[error("File not found in bundle: no entry for '{key}'.")]
    ResourceNotFound { key: String },

    /// A registry entry points at a path missing from the embedded bundle.
    #[error("File not found in bundle: '{path}'.")]
    BundleFileNotFound { path: String },

    #[error("IO error on '{}': {source}.", .path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Template evaluation failed.
    #[error("Something went wrong rendering '{template}': {source}.")]
    RenderError {
        template: String,
        #[source]
        source: minijinja::Error,
    },

    #[error("Serialization error: {0}.")]
    SerializationError(#[from] serde_json::Error),

    /// Malformed project configuration or misuse of a builder.
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// A named artifact that must already exist in the project is missing.
    #[error("The {kind} '{name}' does not exist in this project.")]
    ArtifactNotFound { kind: String, name: String },

    /// Walking an existing project failed.
    #[error("Scan error: {0}.")]
    ScanError(String),
}

impl Error {
    /// Builds an `OptionNotValid` error from any list of accepted names.
    pub fn option_not_valid<I, S>(value: impl Into<String>, valid: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Error::OptionNotValid {
            value: value.into(),
            valid: valid.into_iter().map(Into::into).collect(),
        }
    }

    /// Wraps an I/O failure with the path that was being touched.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::IoError {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to report
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
