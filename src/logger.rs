//! Logger setup for the kiln binary.

/// Initializes `env_logger` once per process.
///
/// # Arguments
/// * `verbose` - Show debug output for every folder and file touched
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format_target(false)
        .init();
}
