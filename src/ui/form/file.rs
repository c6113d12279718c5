//! PDF selection with the upload size guard.

use std::path::Path;

use thiserror::Error;

use crate::api::{PdfFile, MAX_PDF_BYTES};

#[derive(Debug, Error)]
pub enum FileSelectError {
    #[error("Cannot open {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Not a file: {path}")]
    NotAFile { path: String },

    #[error("File too large. Please upload a PDF smaller than 10 MB.")]
    TooLarge { name: String, size: u64 },
}

/// Stat `path` and accept it when it is a regular file within the limit.
pub fn inspect_pdf(path: &Path) -> Result<PdfFile, FileSelectError> {
    let metadata = std::fs::metadata(path).map_err(|source| FileSelectError::Io {
        path: path.display().to_string(),
        source,
    })?;

    if !metadata.is_file() {
        return Err(FileSelectError::NotAFile {
            path: path.display().to_string(),
        });
    }

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let size = metadata.len();

    if size > MAX_PDF_BYTES {
        return Err(FileSelectError::TooLarge { name, size });
    }

    Ok(PdfFile {
        name,
        path: path.to_path_buf(),
        size,
    })
}
