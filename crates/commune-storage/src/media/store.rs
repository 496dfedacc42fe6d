//! Filesystem-backed media store

use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

/// Media storage errors
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Failed to create media directory {path}: {source}")]
    CreateDir {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to write media file {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to remove media file {path}: {source}")]
    Remove {
        path: String,
        source: std::io::Error,
    },
}

/// File store rooted at the configured media directory
///
/// All operations take paths relative to the root; callers build them with
/// the helpers in [`super::paths`].
#[derive(Debug, Clone)]
pub struct MediaStore {
    root: PathBuf,
}

impl MediaStore {
    /// Create a new MediaStore rooted at the given directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The configured media root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path for a relative media path
    #[must_use]
    pub fn absolute(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// Public URL for a relative media path
    #[must_use]
    pub fn url(&self, relative: &str) -> String {
        format!("/media/{relative}")
    }

    /// Ensure the media root exists
    pub async fn ensure_root(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root)
            .await
            .map_err(|source| StorageError::CreateDir {
                path: self.root.display().to_string(),
                source,
            })
    }

    /// Write a media file, creating parent directories as needed
    pub async fn store(&self, relative: &str, data: &[u8]) -> Result<(), StorageError> {
        let path = self.absolute(relative);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|source| StorageError::CreateDir {
                    path: parent.display().to_string(),
                    source,
                })?;
        }

        let mut file = fs::File::create(&path)
            .await
            .map_err(|source| StorageError::Write {
                path: path.display().to_string(),
                source,
            })?;
        file.write_all(data)
            .await
            .map_err(|source| StorageError::Write {
                path: path.display().to_string(),
                source,
            })?;

        debug!(path = %path.display(), bytes = data.len(), "Stored media file");
        Ok(())
    }

    /// Remove a media file; a missing file is not an error
    pub async fn remove(&self, relative: &str) -> Result<(), StorageError> {
        let path = self.absolute(relative);

        match fs::remove_file(&path).await {
            Ok(()) => {
                debug!(path = %path.display(), "Removed media file");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Remove {
                path: path.display().to_string(),
                source,
            }),
        }
    }

    /// Remove a media file without surfacing failures
    ///
    /// File cleanup is best effort: a failed removal must never roll back
    /// the database write that superseded the file.
    pub async fn remove_best_effort(&self, relative: &str) {
        if let Err(e) = self.remove(relative).await {
            warn!(error = %e, "Orphaned media file left behind");
        }
    }

    /// Check whether a media file exists
    pub async fn exists(&self, relative: &str) -> bool {
        fs::try_exists(self.absolute(relative)).await.unwrap_or(false)
    }
}
