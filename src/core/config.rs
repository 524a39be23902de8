use std::path::Path;
use tracing::info;

use crate::error::TrainJsonError;
use crate::models::Config;

/// Load configuration with CLI overrides.
///
/// An explicit `config_file` must exist; otherwise trainjson.toml in
/// `working_dir` is used when present.
pub fn load_config(
    working_dir: &Path,
    config_file: Option<&Path>,
    pretty: bool,
) -> Result<Config, TrainJsonError> {
    let config = match config_file {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load_from_dir(working_dir)?,
    };
    let config = config.with_overrides(pretty);

    info!(
        "Configuration loaded: extension={}, rounds={}, rest_seconds={}",
        config.scan.extension, config.defaults.rounds, config.defaults.rest_seconds
    );

    Ok(config)
}
