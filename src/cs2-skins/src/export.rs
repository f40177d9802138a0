//! JSON export
//!
//! Output is pretty-printed with 2-space indentation. Non-ASCII characters
//! and HTML-significant characters (`<`, `>`, `&`) are written literally.

use crate::Result;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Directory used when no output path is given
pub const DEFAULT_EXPORT_DIR: &str = "exported";

/// File stem of the unified skin catalog
pub const DEFAULT_CATALOG_NAME: &str = "skins";

/// Output path, falling back to `exported/<default_name>.json`
pub fn output_path(path: Option<&Path>, default_name: &str) -> PathBuf {
    match path {
        Some(path) if !path.as_os_str().is_empty() => path.to_path_buf(),
        _ => Path::new(DEFAULT_EXPORT_DIR).join(format!("{}.json", default_name)),
    }
}

/// Serialize a value the way it is written to disk
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}

/// Write a value as JSON, creating parent directories
///
/// Serialization happens before the file is touched, so a value that cannot
/// be serialized leaves no partial output. Returns the path written.
pub fn write_json<T: Serialize + ?Sized>(
    value: &T,
    path: Option<&Path>,
    default_name: &str,
) -> Result<PathBuf> {
    let path = output_path(path, default_name);
    let json = to_json(value)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    std::fs::write(&path, json)?;
    Ok(path)
}
