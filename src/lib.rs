use std::sync::Arc;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::TraceLayer;

pub mod blog;
pub mod config;
pub mod error;
pub mod repo;
pub mod routes;
pub mod state;
pub mod view;

/// The whole HTTP surface, ready to serve.
pub fn app(state: Arc<state::State>) -> NormalizePath<axum::Router> {
    NormalizePathLayer::trim_trailing_slash().layer(
        axum::Router::new()
            .merge(routes::route())
            .with_state(state)
            .layer(TraceLayer::new_for_http()),
    )
}
