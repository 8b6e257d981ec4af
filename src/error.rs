use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not encode or decode a stored blog: {0}")]
    Encoding(#[from] serde_json::Error),

    #[error("stored blog at {path:?} is corrupt: {reason}")]
    Corrupt {
        path: std::path::PathBuf,
        reason: String,
    },

    /// The store cannot be reached at all, e.g. its directory cannot be created.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// Every id up to `BlogID::MAX` is taken, so nothing new can be inserted.
    #[error("no blog ids left to assign")]
    IdsExhausted,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value:?}")]
    InvalidAddr { var: &'static str, value: String },

    #[error("{var} must be \"json\" or \"memory\", got {value:?}")]
    InvalidBackend { var: &'static str, value: String },

    #[error("could not open the blog store: {0}")]
    Store(#[from] PersistenceError),
}

/// Anything that can stop a page from being served.
#[derive(Debug, Error)]
pub enum PageError {
    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    #[error("could not render page: {0}")]
    Render(#[from] askama::Error),
}

// Failures are never recovered from; the request ends with a plain 500 page.
impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "could not serve page");

        let status = StatusCode::INTERNAL_SERVER_ERROR;
        let body = crate::view::error_page(status).unwrap_or_else(|err| {
            tracing::error!(error = %err, "could not render error page");
            status.to_string()
        });
        (status, Html(body)).into_response()
    }
}
