use crate::state::NestedRouter;
use axum::routing::{get, post};

mod blogs;
mod home;
mod post_blog;

pub fn route() -> NestedRouter {
    axum::Router::new()
        .route("/", get(home::get))
        .route("/postBlog", get(post_blog::get))
        .route("/postBlog.do", post(post_blog::post))
        .route("/blogs", get(blogs::get))
}
