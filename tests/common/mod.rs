//! Common test utilities

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create an empty program root directory
pub fn create_test_program() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path().join("Training Program");
    fs::create_dir_all(&root).expect("Failed to create program root");
    (temp_dir, root)
}

/// Create a level directory under the program root
pub fn create_level(root: &Path, level: &str) -> PathBuf {
    let level_dir = root.join(level);
    fs::create_dir_all(&level_dir).expect("Failed to create level dir");
    level_dir
}

/// Create an exercise group CSV with the standard header and the given rows
pub fn create_group(root: &Path, level: &str, group: &str, rows: &[&str]) -> PathBuf {
    let level_dir = create_level(root, level);
    let mut content = String::from("name,round,rest\n");
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }

    let path = level_dir.join(format!("{}.csv", group));
    fs::write(&path, content).expect("Failed to write group file");
    path
}

/// Create an arbitrary file inside the program tree
pub fn create_raw_file(root: &Path, relative: &str, content: &[u8]) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent dir");
    }
    fs::write(&path, content).expect("Failed to write file");
    path
}
