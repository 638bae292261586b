//! Persistence layer for the movie catalog.
//!
//! The whole collection is persisted as one JSON document, read and written
//! as a unit. Handlers depend on the [`MovieStore`] trait rather than a
//! concrete backend so tests can substitute [`MemoryStore`] for the
//! production [`FileStore`].

pub mod error;
pub mod file;
pub mod memory;
pub mod movie;

pub use error::StoreError;
pub use file::FileStore;
pub use memory::MemoryStore;
pub use movie::Movie;

/// Durable, all-or-nothing persistence of the entire movie collection.
///
/// Every operation treats the collection as a single unit: there are no
/// partial reads or per-record writes. A failed `write_all` must leave the
/// previously persisted collection readable.
#[async_trait::async_trait]
pub trait MovieStore: Send + Sync {
    /// Create the backing resource holding an empty collection if it does
    /// not exist yet. Idempotent; safe to call on every startup.
    async fn ensure_initialized(&self) -> Result<(), StoreError>;

    /// Return the full current collection, in insertion order.
    ///
    /// Missing, unreadable, or unparseable backing data is a hard error --
    /// it is never silently treated as an empty collection.
    async fn read_all(&self) -> Result<Vec<Movie>, StoreError>;

    /// Replace the entire persisted collection with `movies`.
    async fn write_all(&self, movies: &[Movie]) -> Result<(), StoreError>;
}
