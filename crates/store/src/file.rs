//! File-backed movie store.
//!
//! The catalog lives in one JSON file. Writes go to a temp file in the same
//! directory, are fsynced, then renamed over the target, so a reader never
//! observes a half-written document.

use std::path::{Path, PathBuf};
use std::process;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::error::StoreError;
use crate::movie::{Catalog, CatalogRef, Movie};
use crate::MovieStore;

/// Distinguishes temp files of concurrent writers targeting the same path.
static TMP_SEQ: AtomicU64 = AtomicU64::new(0);

/// Production [`MovieStore`] persisting the catalog to a JSON file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("catalog");
        let seq = TMP_SEQ.fetch_add(1, Ordering::Relaxed);
        self.path
            .with_file_name(format!("{file_name}.{}.{seq}.tmp", process::id()))
    }

    fn io_err(path: &Path, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Write `data` to a sibling temp file, fsync it, then atomically
    /// rename it over the catalog path.
    async fn write_atomic(&self, data: &[u8]) -> Result<(), StoreError> {
        let tmp = self.temp_path();

        let mut file = fs::File::create(&tmp)
            .await
            .map_err(|e| Self::io_err(&tmp, e))?;
        file.write_all(data)
            .await
            .map_err(|e| Self::io_err(&tmp, e))?;
        file.sync_all()
            .await
            .map_err(|e| Self::io_err(&tmp, e))?;
        fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| Self::io_err(&self.path, e))?;
        Ok(())
    }
}

#[async_trait]
impl MovieStore for FileStore {
    async fn ensure_initialized(&self) -> Result<(), StoreError> {
        if fs::try_exists(&self.path)
            .await
            .map_err(|e| Self::io_err(&self.path, e))?
        {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| Self::io_err(parent, e))?;
            }
        }

        let empty = serde_json::to_vec(&Catalog::default()).map_err(StoreError::Encode)?;
        self.write_atomic(&empty).await?;
        tracing::info!(path = %self.path.display(), "Created empty movie catalog");
        Ok(())
    }

    async fn read_all(&self) -> Result<Vec<Movie>, StoreError> {
        let raw = fs::read(&self.path)
            .await
            .map_err(|e| Self::io_err(&self.path, e))?;

        let catalog: Catalog = serde_json::from_slice(&raw).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })?;

        Ok(catalog.movies)
    }

    async fn write_all(&self, movies: &[Movie]) -> Result<(), StoreError> {
        let data = serde_json::to_vec(&CatalogRef { movies }).map_err(StoreError::Encode)?;
        self.write_atomic(&data).await?;
        tracing::debug!(path = %self.path.display(), count = movies.len(), "Persisted movie catalog");
        Ok(())
    }
}
