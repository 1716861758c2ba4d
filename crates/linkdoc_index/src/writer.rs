//! Reading and writing index documents on disk.

use std::path::{Path, PathBuf};

use crate::error::IndexError;
use crate::model::IndexDocument;

/// Writes `doc` to `path` as pretty-printed JSON.
///
/// Creates the parent directory if it doesn't exist. The JSON goes to a
/// sibling temporary file that is then renamed over `path`, so readers see
/// either the old or the new index, never a partial one.
pub fn write_index(doc: &IndexDocument, path: &Path) -> Result<(), IndexError> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|e| IndexError::Io {
            path: dir.to_path_buf(),
            source: e,
        })?;
    }
    let mut json = serde_json::to_string_pretty(doc).map_err(|e| IndexError::Json {
        path: path.to_path_buf(),
        source: e,
    })?;
    json.push('\n');

    let mut tmp_name = path.as_os_str().to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = PathBuf::from(tmp_name);

    std::fs::write(&tmp_path, json).map_err(|e| IndexError::Io {
        path: tmp_path.clone(),
        source: e,
    })?;
    std::fs::rename(&tmp_path, path).map_err(|e| IndexError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::debug!(
        "wrote index with {} module(s) to {}",
        doc.modules.len(),
        path.display()
    );
    Ok(())
}

/// Loads a document previously written by [`write_index`].
pub fn read_index(path: &Path) -> Result<IndexDocument, IndexError> {
    let content = std::fs::read_to_string(path).map_err(|e| IndexError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_str(&content).map_err(|e| IndexError::Json {
        path: path.to_path_buf(),
        source: e,
    })
}
