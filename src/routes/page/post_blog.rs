use crate::blog::BlogForm;
use crate::error::PageError;
use crate::state::SharedState;
use axum::extract::State;
use axum::response::Html;
use axum::Form;

pub(super) async fn get() -> Result<Html<String>, PageError> {
    Ok(Html(crate::view::post_blog_form()?))
}

pub(super) async fn post(
    State(state): SharedState,
    Form(form): Form<BlogForm>,
) -> Result<Html<String>, PageError> {
    let saved = state.blogs.save(form.into_blog()).await?;
    tracing::info!(id = ?saved.id, title = %saved.title, "saved blog");

    let blogs = state.blogs.find_all().await?;
    Ok(Html(crate::view::list_all_blogs(&blogs)?))
}
