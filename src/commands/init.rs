use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::TrainJsonError;
use crate::models::{Config, CONFIG_FILE_NAME};

/// Write a default trainjson.toml into `dir`.
///
/// An existing config file is left untouched. Returns whether a file was
/// created.
pub fn init_config(dir: &Path) -> Result<bool, TrainJsonError> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
        info!("Created directory: {}", dir.display());
    }

    let contents = Config::default().to_toml_string()?;
    let created = create_file_if_not_exists(&dir.join(CONFIG_FILE_NAME), &contents)?;

    print_next_steps(dir);
    Ok(created)
}

fn create_file_if_not_exists(path: &PathBuf, content: &str) -> Result<bool, TrainJsonError> {
    if path.exists() {
        info!("File already exists: {}", path.display());
        return Ok(false);
    }
    fs::write(path, content)?;
    info!("Created file: {}", path.display());
    Ok(true)
}

fn print_next_steps(dir: &Path) {
    println!("trainjson config initialized at {}", dir.display());
    println!("\nExpected program layout:");
    println!("  <program>/<level>/<exercise group>.csv");
    println!("  with a header row, then rows of: name,round,restSeconds");
    println!("\nNext steps:");
    println!("1. Edit {} to change defaults for missing rounds and rest", CONFIG_FILE_NAME);
    println!("2. Run 'trainjson convert <program>' to build the JSON document");
    println!("3. Run 'trainjson estimate <program>' to see workout durations");
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_config_creates_loadable_file() {
        let temp_dir = TempDir::new().unwrap();

        assert!(init_config(temp_dir.path()).unwrap());

        let config = Config::load_from_dir(temp_dir.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_init_config_keeps_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[defaults]\nrounds = 5\n").unwrap();

        assert!(!init_config(temp_dir.path()).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "[defaults]\nrounds = 5\n");
    }
}
