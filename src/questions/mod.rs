use axum::{routing::get, Router};

use crate::state::AppState;

pub mod dto;
pub mod handlers;
pub mod repo;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/question",
            get(handlers::list_questions).post(handlers::create_question),
        )
        .route(
            "/question/:id",
            get(handlers::get_question).put(handlers::update_question),
        )
}
