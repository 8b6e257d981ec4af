use crate::error::PageError;
use axum::response::Html;

pub(super) async fn get() -> Result<Html<String>, PageError> {
    Ok(Html(crate::view::welcome(crate::blog::BLOGGER)?))
}
