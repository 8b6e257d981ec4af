use crate::state::NestedRouter;

pub mod page;

pub fn route() -> NestedRouter {
    axum::Router::new().merge(page::route())
}
