use std::path::{Path, PathBuf};

use crate::core::{to_json_string, write_document, ConvertOptions, ProgramConverter};
use crate::error::TrainJsonError;
use crate::models::Config;

/// Convert one exercise group CSV file.
///
/// Writes `{"<name>": [names, rounds, rest_seconds]}` to `output`, or prints
/// it when no output is given.
pub fn convert_group(csv_path: &Path, output: Option<PathBuf>, config: &Config) -> Result<(), TrainJsonError> {
    let converter = ProgramConverter::new(ConvertOptions::from_config(config));
    let document = converter.convert_group_file(csv_path)?;

    match output {
        Some(destination) => write_document(&document, &destination, &config.output)?,
        None => println!("{}", to_json_string(&document, config.output.pretty)?),
    }

    Ok(())
}
