//! kiln is a scaffolding engine for SvelteKit content sites.
//! It materializes projects, resources, metadata, pages and CSS setups from
//! templates embedded in the binary.

/// Context threaded through a tree while it is created
pub mod artifact;

/// Content builders resolving template identifiers per artifact kind
pub mod builder;

/// Command-line interface module for the kiln application
pub mod cli;

/// Composite folder/file trees
pub mod composer;

/// Project settings, loaded from kiln.json, kiln.yml or kiln.yaml
pub mod config;

/// Common constants
pub mod constants;

/// CSS framework and theme setup plans
pub mod css;

/// Data handed to templates
pub mod data;

/// Error types and handling for the kiln application
pub mod error;

/// Discovery of resources, entries and pages in an existing project
pub mod existing;

/// Destination filesystems, on disk and in memory
pub mod fs;

/// Factories for well-known project folders and files
pub mod fsm;

/// Generation commands
pub mod generate;

pub mod logger;

/// Path resolution at working-directory and project level
pub mod pathmaker;

/// Template rendering with MiniJinja
pub mod renderer;

/// Embedded templates and their registries
pub mod resources;
