use crate::utils::error::{HelperError, Result};
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;

/// Reads and parses a JSON document. The handle is dropped on every return
/// path, including parse failures.
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<Value> {
    let path = path.as_ref();
    let shown = path.display().to_string();

    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => HelperError::FileNotFound {
            path: shown.clone(),
        },
        _ => HelperError::IoError {
            path: shown.clone(),
            source: e,
        },
    })?;

    let document = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        if e.is_io() {
            HelperError::IoError {
                path: shown.clone(),
                source: e.into(),
            }
        } else {
            HelperError::InvalidJson {
                path: shown.clone(),
                source: e,
            }
        }
    })?;

    tracing::debug!("Loaded JSON document from {}", shown);
    Ok(document)
}
