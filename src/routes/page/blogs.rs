use crate::error::PageError;
use crate::state::SharedState;
use axum::extract::{Query, State};
use axum::response::Html;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(super) struct BlogsQuery {
    title: Option<String>,
}

pub(super) async fn get(
    State(state): SharedState,
    Query(query): Query<BlogsQuery>,
) -> Result<Html<String>, PageError> {
    let blogs = match query.title {
        Some(title) => state.blogs.find_by_title(&title).await?,
        None => state.blogs.find_all().await?,
    };

    Ok(Html(crate::view::list_all_blogs(&blogs)?))
}
