use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::{Result, TrainJsonError};
use crate::models::OutputConfig;

/// Serialize a document to JSON.
///
/// The compact form has no whitespace between tokens. Non-ASCII text is
/// written as-is in both forms.
pub fn to_json_string<T: Serialize>(document: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(document)?
    } else {
        serde_json::to_string(document)?
    };
    Ok(json)
}

/// Write a document to `destination`
pub fn write_document<T: Serialize>(
    document: &T,
    destination: &Path,
    output: &OutputConfig,
) -> Result<()> {
    let json = to_json_string(document, output.pretty)?;

    if output.create_output_dirs {
        if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| TrainJsonError::WriteFailed {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    fs::write(destination, json).map_err(|source| TrainJsonError::WriteFailed {
        path: destination.to_path_buf(),
        source,
    })?;

    info!("Wrote {}", destination.display());
    Ok(())
}

/// Default output location for a program root: `<parent>/<root name>.json`
pub fn default_output_path(root: &Path) -> Result<PathBuf> {
    let root = root
        .canonicalize()
        .map_err(|source| TrainJsonError::RootUnreadable {
            path: root.to_path_buf(),
            source,
        })?;

    let name = root
        .file_name()
        .ok_or_else(|| TrainJsonError::PathNotFound(root.clone()))?;
    let mut file_name = name.to_os_string();
    file_name.push(".json");

    let parent = root.parent().unwrap_or(&root);
    Ok(parent.join(file_name))
}
