//! Handlers for the `/movies` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use marquee_core::error::{CoreError, MovieId};
use marquee_core::pagination::PageRequest;
use marquee_store::Movie;

use crate::error::AppResult;
use crate::state::AppState;

/// Query parameters for the paginated listing (`?page=&size=`).
///
/// Raw values; defaults and range checks are applied by
/// [`PageRequest::from_query`], which rejects out-of-range values rather
/// than clamping them.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub page: Option<i64>,
    pub size: Option<i64>,
}

/// One page of movies plus the pagination metadata wrapping it.
#[derive(Debug, Serialize)]
pub struct PageEnvelope {
    pub total_items: u64,
    pub total_pages: u64,
    pub current_page: u64,
    pub items_per_page: u64,
    pub movies: Vec<Movie>,
}

/// Confirmation payload for a successful delete.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: &'static str,
}

/// GET /movies
///
/// Paginated listing in insertion order. A page past the end of a
/// non-empty collection is 404 with diagnostics; on an empty collection
/// every page is an empty 200.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<PageEnvelope>> {
    let request = PageRequest::from_query(params.page, params.size)?;

    let movies = state.store.read_all().await?;
    let slice = request.slice(movies.len() as u64)?;

    Ok(Json(PageEnvelope {
        total_items: slice.total_items,
        total_pages: slice.total_pages,
        current_page: request.page,
        items_per_page: request.per_page,
        movies: movies[slice.start..slice.end].to_vec(),
    }))
}

/// GET /movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(movie_id): Path<MovieId>,
) -> AppResult<Json<Movie>> {
    let movies = state.store.read_all().await?;
    let movie = movies
        .into_iter()
        .find(|m| m.id == movie_id)
        .ok_or(CoreError::NotFound {
            entity: "Movie",
            id: movie_id,
        })?;
    Ok(Json(movie))
}

/// POST /movies
///
/// Appends to the end of the collection; the client-supplied id must not
/// collide with an existing record.
pub async fn create(
    State(state): State<AppState>,
    Json(movie): Json<Movie>,
) -> AppResult<(StatusCode, Json<Movie>)> {
    movie.validate()?;

    let _guard = state.write_lock.lock().await;
    let mut movies = state.store.read_all().await?;

    if movies.iter().any(|m| m.id == movie.id) {
        return Err(CoreError::AlreadyExists {
            entity: "Movie",
            id: movie.id,
        }
        .into());
    }

    movies.push(movie.clone());
    state.store.write_all(&movies).await?;

    Ok((StatusCode::CREATED, Json(movie)))
}

/// PUT /movies/{id}
///
/// Wholesale replacement at the record's current position. Overrides
/// `input.id` with the value from the URL path, so a body carrying a
/// different id can neither collide with another record nor retarget the
/// update.
pub async fn update(
    State(state): State<AppState>,
    Path(movie_id): Path<MovieId>,
    Json(mut input): Json<Movie>,
) -> AppResult<Json<Movie>> {
    input.id = movie_id;
    input.validate()?;

    let _guard = state.write_lock.lock().await;
    let mut movies = state.store.read_all().await?;

    let slot = movies
        .iter_mut()
        .find(|m| m.id == movie_id)
        .ok_or(CoreError::NotFound {
            entity: "Movie",
            id: movie_id,
        })?;
    *slot = input.clone();

    state.store.write_all(&movies).await?;

    Ok(Json(input))
}

/// DELETE /movies/{id}
///
/// Returns a confirmation message, not the deleted record.
pub async fn delete(
    State(state): State<AppState>,
    Path(movie_id): Path<MovieId>,
) -> AppResult<Json<DeleteResponse>> {
    let _guard = state.write_lock.lock().await;
    let mut movies = state.store.read_all().await?;

    let idx = movies
        .iter()
        .position(|m| m.id == movie_id)
        .ok_or(CoreError::NotFound {
            entity: "Movie",
            id: movie_id,
        })?;
    movies.remove(idx);

    state.store.write_all(&movies).await?;

    Ok(Json(DeleteResponse {
        message: "Movie deleted",
    }))
}
