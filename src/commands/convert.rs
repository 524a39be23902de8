use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::core::{default_output_path, to_json_string, write_document, ConvertOptions, ProgramConverter};
use crate::error::TrainJsonError;
use crate::models::Config;

/// Where the converted document goes
#[derive(Debug, Clone, Default)]
pub struct ConvertTarget {
    /// Explicit output file
    pub output: Option<PathBuf>,
    /// Print to stdout instead of writing a file
    pub stdout: bool,
}

/// Convert a program directory and write the JSON document.
///
/// Returns the path written, or `None` when printing to stdout.
pub fn convert_program(
    root: &Path,
    target: ConvertTarget,
    config: &Config,
) -> Result<Option<PathBuf>, TrainJsonError> {
    let converter = ProgramConverter::new(ConvertOptions::from_config(config));
    let document = converter.convert(root)?;

    let group_count: usize = document.values().map(|level| level.len()).sum();
    info!(
        "Program {} has {} levels and {} exercise groups",
        root.display(),
        document.len(),
        group_count
    );

    if target.stdout {
        let json = to_json_string(&document, config.output.pretty)?;
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", json)?;
        return Ok(None);
    }

    let destination = match target.output {
        Some(path) => path,
        None => default_output_path(root)?,
    };
    write_document(&document, &destination, &config.output)?;
    Ok(Some(destination))
}
