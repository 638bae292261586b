/// External record key for a movie. Supplied by clients, never generated.
pub type MovieId = i64;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: MovieId },

    #[error("{entity} with id {id} already exists")]
    AlreadyExists { entity: &'static str, id: MovieId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Page {current_page} not found ({total_pages} pages, {total_items} items)")]
    PageOutOfRange {
        total_pages: u64,
        current_page: u64,
        total_items: u64,
    },
}
