use std::fs;
use std::path::Path;
use tracing::debug;

use crate::core::{estimate_program, format_duration, ConvertOptions, GroupEstimate, ProgramConverter};
use crate::error::TrainJsonError;
use crate::models::{Config, ProgramDocument};

/// Load a program from a directory (converted on the fly) or from a JSON
/// document written earlier.
pub fn load_program(path: &Path, config: &Config) -> Result<ProgramDocument, TrainJsonError> {
    if path.is_dir() {
        debug!("Converting program directory {}", path.display());
        let converter = ProgramConverter::new(ConvertOptions::from_config(config));
        return converter.convert(path);
    }
    if !path.is_file() {
        return Err(TrainJsonError::PathNotFound(path.to_path_buf()));
    }

    debug!("Reading program document {}", path.display());
    let contents = fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|source| TrainJsonError::InvalidDocument {
        path: path.to_path_buf(),
        source,
    })
}

/// Print estimated workout durations for every exercise group
pub fn show_estimates(path: &Path, config: &Config) -> Result<Vec<GroupEstimate>, TrainJsonError> {
    let document = load_program(path, config)?;
    let estimates = estimate_program(&document);

    println!("=== Workout Estimates ===\n");

    if estimates.is_empty() {
        println!("No exercise groups found.");
        return Ok(estimates);
    }

    let mut current_level: Option<&str> = None;
    for estimate in &estimates {
        if current_level != Some(estimate.level.as_str()) {
            if current_level.is_some() {
                println!();
            }
            println!("{}:", estimate.level);
            current_level = Some(estimate.level.as_str());
        }
        println!(
            "  {} ({} exercises): {}",
            estimate.group,
            estimate.exercises,
            format_duration(estimate.seconds)
        );
    }

    Ok(estimates)
}
