//! In-memory movie store for tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::movie::Movie;
use crate::MovieStore;

/// Test double implementing [`MovieStore`] over a `Vec` behind a mutex.
/// Infallible; storage-failure paths are exercised against [`crate::FileStore`].
#[derive(Default)]
pub struct MemoryStore {
    movies: Mutex<Vec<Movie>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start pre-seeded, skipping the create-via-HTTP boilerplate.
    pub fn with_movies(movies: Vec<Movie>) -> Self {
        Self {
            movies: Mutex::new(movies),
        }
    }
}

#[async_trait]
impl MovieStore for MemoryStore {
    async fn ensure_initialized(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn read_all(&self) -> Result<Vec<Movie>, StoreError> {
        Ok(self.movies.lock().expect("store mutex poisoned").clone())
    }

    async fn write_all(&self, movies: &[Movie]) -> Result<(), StoreError> {
        *self.movies.lock().expect("store mutex poisoned") = movies.to_vec();
        Ok(())
    }
}
