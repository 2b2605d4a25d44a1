//! Request handlers for the step API.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use life_grid::Grid;
use tracing::debug;

use crate::error::ApiError;
use crate::router::Limits;

/// `GET /` -- plain status line.
pub async fn index() -> &'static str {
    "life-server: POST a square JSON matrix of booleans to /game\n"
}

/// `POST /game` -- advance the submitted grid by one generation.
///
/// The body is decoded by hand rather than through the `Json` extractor so
/// malformed input gets the same JSON error body as every other failure.
pub async fn step(State(limits): State<Limits>, body: Bytes) -> Result<Json<Grid>, ApiError> {
    let grid: Grid = serde_json::from_slice(&body)?;
    if grid.size() > limits.max_grid_size {
        return Err(ApiError::TooLarge { size: grid.size(), max: limits.max_grid_size });
    }

    let next = grid.next_generation();
    debug!(
        size = grid.size(),
        live_before = grid.live_count(),
        live_after = next.live_count(),
        "stepped grid"
    );
    Ok(Json(next))
}
