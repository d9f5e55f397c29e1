//! Raw document reads and JSON parsing
//!
//! Knows nothing about game semantics: paths in, typed values or
//! [`DocumentError`] out.

use crate::error::DocumentError;
use log::debug;
use serde::de::DeserializeOwned;
use std::io::ErrorKind;
use std::path::Path;

/// Reads a document as text without blocking the runtime
pub async fn read_document(path: &Path) -> Result<String, DocumentError> {
    debug!("Reading document {}", path.display());
    tokio::fs::read_to_string(path).await.map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            DocumentError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            DocumentError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

pub fn parse_document<T: DeserializeOwned>(path: &Path, text: &str) -> Result<T, DocumentError> {
    serde_json::from_str(text).map_err(|source| DocumentError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

pub async fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T, DocumentError> {
    let text = read_document(path).await?;
    parse_document(path, &text)
}
