use std::path::PathBuf;

/// Failures of the backing catalog file.
///
/// All variants are the "storage unavailable" class: they fail the single
/// request that hit them and leave the previously persisted state intact.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("catalog I/O failed at {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog file exists but does not parse. Corrupt content is a
    /// hard error, never treated as an empty collection.
    #[error("catalog at {path} is not a valid movie document")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode movie catalog")]
    Encode(#[source] serde_json::Error),
}
