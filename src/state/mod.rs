use crate::repo::BlogRepository;
use std::sync::Arc;

pub type SharedState = axum::extract::State<Arc<State>>;
pub type NestedRouter = axum::Router<Arc<State>>;

#[derive(Debug)]
pub struct State {
    pub blogs: Arc<dyn BlogRepository>,
}

impl State {
    pub fn new(blogs: Arc<dyn BlogRepository>) -> State {
        State { blogs }
    }
}
