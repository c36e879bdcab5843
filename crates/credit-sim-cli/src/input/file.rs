use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

use super::RequestError;

/// Read a JSON request file and deserialise it into `T`.
pub fn read_json<T: DeserializeOwned>(path: &str) -> Result<T, Box<dyn std::error::Error>> {
    let resolved = resolve_path(path)?;
    let contents = fs::read_to_string(&resolved)
        .map_err(|e| format!("Failed to read '{}': {}", resolved.display(), e))?;
    serde_json::from_str(&contents).map_err(|e| {
        RequestError(format!(
            "Invalid loan request in '{}': {}",
            resolved.display(),
            e
        ))
        .into()
    })
}

/// Absolute path to an existing regular file.
fn resolve_path(path: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let p = Path::new(path);
    let resolved = if p.is_absolute() {
        p.to_path_buf()
    } else {
        std::env::current_dir()?.join(p)
    };

    match fs::metadata(&resolved) {
        Ok(meta) if meta.is_file() => Ok(resolved),
        Ok(_) => Err(RequestError(format!("Not a file: {}", resolved.display())).into()),
        Err(_) => Err(RequestError(format!("File not found: {}", resolved.display())).into()),
    }
}
