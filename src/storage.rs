//! Capture acquisition and image delivery for the command line tool.
//!
//! Reading the capture and writing the reconstructed image are the only
//! suspending steps around a decode; the scan itself runs synchronously
//! over a buffer that is fully in memory before it starts.

use std::{
    io,
    path::{Path, PathBuf},
};

use thiserror::Error;

/// Errors raised while acquiring a capture or delivering an image.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The trace capture could not be read into memory.
    #[error("failed to read trace capture {}: {source}", path.display())]
    ReadTrace {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The reconstructed image could not be written out.
    #[error("failed to write image {}: {source}", path.display())]
    WriteImage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Read an entire trace capture into memory.
///
/// The decode never starts over a partial buffer, so the whole file is
/// loaded before any scanning happens.
///
/// # Errors
///
/// Returns [`StorageError::ReadTrace`] when the capture cannot be read.
pub async fn read_trace(path: &Path) -> Result<Vec<u8>, StorageError> {
    tokio::fs::read(path)
        .await
        .map_err(|source| StorageError::ReadTrace {
            path: path.to_path_buf(),
            source,
        })
}

/// Write a reconstructed image to `path`.
///
/// # Errors
///
/// Returns [`StorageError::WriteImage`] when the image cannot be written.
pub async fn write_image(path: &Path, image: &[u8]) -> Result<(), StorageError> {
    tokio::fs::write(path, image)
        .await
        .map_err(|source| StorageError::WriteImage {
            path: path.to_path_buf(),
            source,
        })
}
