//! Axum router construction for the step API.

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::handlers;

/// Request bytes allowed per cell: `false` plus a comma.
const BYTES_PER_CELL: usize = 6;

/// Per-router limits shared with the handlers.
#[derive(Debug, Clone, Copy)]
pub struct Limits {
    pub max_grid_size: usize,
}

impl Limits {
    /// Body size that fits the largest accepted grid, with room for
    /// brackets and whitespace.
    pub fn body_limit(self) -> usize {
        let side = self.max_grid_size.saturating_add(2);
        side.saturating_mul(side).saturating_mul(BYTES_PER_CELL)
    }
}

/// Build the router:
/// - `GET /` -- status text
/// - `POST /game` -- one generation step
pub fn build_router(limits: Limits) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/game", post(handlers::step))
        .layer(DefaultBodyLimit::max(limits.body_limit()))
        .layer(TraceLayer::new_for_http())
        .with_state(limits)
}
