use axum::{routing::get, Router};

use crate::state::AppState;

pub mod dto;
pub mod handlers;
pub mod repo;

// One handler per verb and path. POST interprets the id as a question id;
// GET/PUT/DELETE interpret it as an answer id.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/answers", get(handlers::list_answers))
        .route(
            "/answers/:id",
            get(handlers::get_answer)
                .post(handlers::post_answer)
                .put(handlers::edit_answer)
                .delete(handlers::delete_answer),
        )
}
