use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::core::parser::read_exercise_group;
use crate::error::{FileError, Result, TrainJsonError};
use crate::models::{Config, DefaultsConfig, ExerciseGroup, LevelDocument, ProgramDocument};

/// Options controlling a conversion run
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertOptions {
    /// Extension (without the dot) of exercise group files, matched ignoring ASCII case
    pub extension: String,
    /// Visit entries in name order instead of directory listing order
    pub sort_entries: bool,
    /// Fallback values for malformed numeric fields
    pub defaults: DefaultsConfig,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl ConvertOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            extension: config.scan.extension.clone(),
            sort_entries: config.scan.sort_entries,
            defaults: config.defaults.clone(),
        }
    }
}

/// Converts a training program directory into a [`ProgramDocument`].
///
/// Layout: `<root>/<level>/<group>.csv`. Each subdirectory of the root is a
/// level; each CSV file inside it is an exercise group named after the file
/// stem. Only an unreadable root fails the conversion; files that cannot be
/// read or hold no exercises are left out of the document.
#[derive(Debug, Clone, Default)]
pub struct ProgramConverter {
    options: ConvertOptions,
}

impl ProgramConverter {
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    /// Convert the program rooted at `root`
    pub fn convert(&self, root: &Path) -> Result<ProgramDocument> {
        let entries = self
            .list_entries(root)
            .map_err(|source| TrainJsonError::RootUnreadable {
                path: root.to_path_buf(),
                source,
            })?;

        let mut document = ProgramDocument::new();
        for path in entries {
            if !path.is_dir() {
                debug!("Skipping non-directory entry {}", path.display());
                continue;
            }
            let Some(level) = path.file_name().and_then(|n| n.to_str()) else {
                debug!("Skipping level with non UTF-8 name {}", path.display());
                continue;
            };
            let level_document = self.convert_level(&path);
            document.insert(level, level_document);
        }

        info!("Converted {} levels from {}", document.len(), root.display());
        Ok(document)
    }

    /// Convert one level directory. A level that cannot be listed yields an
    /// empty document.
    pub fn convert_level(&self, level_dir: &Path) -> LevelDocument {
        let entries = match self.list_entries(level_dir) {
            Ok(entries) => entries,
            Err(e) => {
                debug!("Cannot list level {}: {}", level_dir.display(), e);
                return LevelDocument::new();
            }
        };

        let level: LevelDocument = entries
            .iter()
            .filter(|path| path.is_file() && self.is_group_file(path))
            .map(|path| self.convert_file(path))
            .filter_map(|result| match result {
                Ok(entry) => Some(entry),
                Err(e) => {
                    debug!("Skipping {}: {}", e.path().display(), e);
                    None
                }
            })
            .collect();

        debug!("Level {} has {} exercise groups", level_dir.display(), level.len());
        level
    }

    /// Convert one exercise group file into its key and group
    pub fn convert_file(&self, path: &Path) -> std::result::Result<(String, ExerciseGroup), FileError> {
        let key = group_key(path)?;
        let group = read_exercise_group(path, &self.options.defaults)?;
        Ok((key, group))
    }

    /// Convert a single exercise group file into a one-entry document.
    ///
    /// Unlike [`ProgramConverter::convert`], file errors are returned.
    pub fn convert_group_file(&self, path: &Path) -> Result<LevelDocument> {
        if !path.is_file() {
            return Err(TrainJsonError::PathNotFound(path.to_path_buf()));
        }
        let (key, group) = self.convert_file(path)?;
        let mut document = LevelDocument::new();
        document.insert(key, group);
        Ok(document)
    }

    /// Whether `path` has the configured exercise group extension
    pub fn is_group_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(&self.options.extension))
    }

    fn list_entries(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        let mut entries = fs::read_dir(dir)?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<io::Result<Vec<_>>>()?;

        if self.options.sort_entries {
            entries.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        }
        Ok(entries)
    }
}

/// Exercise group key: the file name without its extension
pub fn group_key(path: &Path) -> std::result::Result<String, FileError> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::to_string)
        .ok_or_else(|| FileError::InvalidName(path.to_path_buf()))
}

/// Convert the program at `root` with default options
pub fn convert(root: &Path) -> Result<ProgramDocument> {
    ProgramConverter::default().convert(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn test_is_group_file() {
        let converter = ProgramConverter::default();
        assert!(converter.is_group_file(Path::new("Level 1/Legs.csv")));
        assert!(converter.is_group_file(Path::new("Level 1/Legs.CSV")));
        assert!(!converter.is_group_file(Path::new("Level 1/notes.txt")));
        assert!(!converter.is_group_file(Path::new("Level 1/csv")));
    }

    #[test]
    fn test_is_group_file_custom_extension() {
        let options = ConvertOptions {
            extension: "tsv".to_string(),
            ..ConvertOptions::default()
        };
        let converter = ProgramConverter::new(options);
        assert!(converter.is_group_file(Path::new("a.tsv")));
        assert!(!converter.is_group_file(Path::new("a.csv")));
    }

    #[test]
    fn test_group_key_strips_extension() {
        assert_eq!(group_key(Path::new("lvl/Upper Body.csv")).unwrap(), "Upper Body");
        assert_eq!(group_key(Path::new("lvl/day.1.csv")).unwrap(), "day.1");
    }

    #[test]
    fn test_convert_level_skips_bad_files() {
        let temp_dir = TempDir::new().unwrap();
        let level = temp_dir.path();
        write(level, "good.csv", "name,round,rest\nPush-up,3,45\n");
        write(level, "empty.csv", "name,round,rest\n");
        fs::write(level.join("binary.csv"), b"name,round,rest\n\xff,1,1\n").unwrap();
        write(level, "readme.md", "not a program");

        let converter = ProgramConverter::default();
        let document = converter.convert_level(level);

        assert!(document.contains_key("good"));
        assert!(!document.contains_key("empty"));
        assert!(!document.contains_key("binary"));
        assert!(!document.contains_key("readme"));
    }

    #[test]
    fn test_convert_level_missing_dir_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let converter = ProgramConverter::default();
        assert!(converter.convert_level(&temp_dir.path().join("nope")).is_empty());
    }

    #[test]
    fn test_convert_group_file() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "Core.csv", "name,round,rest\nPlank,3,60\n");

        let converter = ProgramConverter::default();
        let document = converter
            .convert_group_file(&temp_dir.path().join("Core.csv"))
            .unwrap();
        assert_eq!(document.keys().collect::<Vec<_>>(), ["Core"]);
        assert_eq!(document.get("Core").unwrap().names(), ["Plank"]);
    }

    #[test]
    fn test_convert_group_file_errors_surface() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "Empty.csv", "name,round,rest\n");
        let converter = ProgramConverter::default();

        let err = converter
            .convert_group_file(&temp_dir.path().join("Empty.csv"))
            .unwrap_err();
        assert!(matches!(err, TrainJsonError::File(FileError::NoExercises(_))));

        let err = converter
            .convert_group_file(&temp_dir.path().join("Missing.csv"))
            .unwrap_err();
        assert!(matches!(err, TrainJsonError::PathNotFound(_)));
    }

    #[test]
    fn test_convert_root_not_a_directory() {
        let temp_dir = TempDir::new().unwrap();
        write(temp_dir.path(), "file.csv", "name,round,rest\n");

        let err = convert(&temp_dir.path().join("file.csv")).unwrap_err();
        assert!(matches!(err, TrainJsonError::RootUnreadable { .. }));
    }
}
