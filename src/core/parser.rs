use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::error::FileError;
use crate::models::{DefaultsConfig, ExerciseGroup};

/// Minimum number of fields for a row to describe an exercise
const MIN_ROW_FIELDS: usize = 3;

/// Parse exercise rows from CSV text.
///
/// The first row is the header. Rows equal to the header, rows with fewer
/// than three fields, and rows whose trimmed name is empty are skipped.
/// Non-numeric rounds and rest values fall back to `defaults`.
pub fn parse_exercise_group<R: Read>(
    reader: R,
    defaults: &DefaultsConfig,
) -> Result<ExerciseGroup, csv::Error> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let header = csv_reader.headers()?.clone();
    let mut group = ExerciseGroup::new();

    for result in csv_reader.records() {
        let record = result?;
        if record == header || record.len() < MIN_ROW_FIELDS {
            continue;
        }
        if let Some((name, rounds, rest_seconds)) = parse_row(&record, defaults) {
            group.push(name, rounds, rest_seconds);
        }
    }

    Ok(group)
}

/// Read one exercise group file.
///
/// A file that parses but yields no exercises is reported as
/// [`FileError::NoExercises`].
pub fn read_exercise_group(path: &Path, defaults: &DefaultsConfig) -> Result<ExerciseGroup, FileError> {
    let file = File::open(path).map_err(|e| FileError::Csv(path.to_path_buf(), e.into()))?;
    let group =
        parse_exercise_group(file, defaults).map_err(|e| FileError::Csv(path.to_path_buf(), e))?;

    if group.is_empty() {
        return Err(FileError::NoExercises(path.to_path_buf()));
    }

    debug!("Parsed {} exercises from {}", group.len(), path.display());
    Ok(group)
}

fn parse_row<'r>(record: &'r StringRecord, defaults: &DefaultsConfig) -> Option<(&'r str, i64, i64)> {
    let name = record.get(0)?.trim();
    if name.is_empty() {
        return None;
    }
    let rounds = parse_number(record.get(1), defaults.rounds);
    let rest_seconds = parse_number(record.get(2), defaults.rest_seconds);
    Some((name, rounds, rest_seconds))
}

/// Parse an integer field, falling back to `default` when it is missing or
/// not a number. Surrounding whitespace is ignored.
pub fn parse_number(field: Option<&str>, default: i64) -> i64 {
    field
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}
