//! Movie entity and the on-disk catalog document.

use chrono::NaiveDate;
use marquee_core::error::{CoreError, MovieId};
use serde::{Deserialize, Serialize};

/// A movie record. The `id` is client-supplied and acts as the primary key;
/// it is never generated by the service.
///
/// `release_date` serializes as an ISO-8601 calendar date (`YYYY-MM-DD`),
/// both on the wire and on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub release_date: NaiveDate,
    pub director: String,
}

impl Movie {
    /// Reject records with blank text fields.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.title.trim().is_empty() {
            return Err(CoreError::Validation("title must not be empty".into()));
        }
        if self.director.trim().is_empty() {
            return Err(CoreError::Validation("director must not be empty".into()));
        }
        Ok(())
    }
}

/// The persisted document: a single object with a `movies` array, insertion
/// order preserved.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub movies: Vec<Movie>,
}

/// Borrowing view of [`Catalog`] so `write_all` can serialize without
/// cloning the collection.
#[derive(Serialize)]
pub(crate) struct CatalogRef<'a> {
    pub movies: &'a [Movie],
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn movie() -> Movie {
        Movie {
            id: 1,
            title: "The Conversation".into(),
            release_date: NaiveDate::from_ymd_opt(1974, 4, 7).unwrap(),
            director: "Francis Ford Coppola".into(),
        }
    }

    #[test]
    fn valid_movie_passes() {
        assert!(movie().validate().is_ok());
    }

    #[test]
    fn blank_title_rejected() {
        let mut m = movie();
        m.title = "   ".into();
        assert_matches!(m.validate(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn blank_director_rejected() {
        let mut m = movie();
        m.director = String::new();
        assert_matches!(m.validate(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn release_date_serializes_as_iso_calendar_string() {
        let json = serde_json::to_value(movie()).unwrap();
        assert_eq!(json["release_date"], "1974-04-07");
    }

    #[test]
    fn movie_round_trips_through_json() {
        let m = movie();
        let json = serde_json::to_string(&m).unwrap();
        let back: Movie = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }
}
