use axum::{routing::post, Router};

use crate::state::AppState;

pub mod dto;
pub mod handlers;

pub fn router() -> Router<AppState> {
    Router::new().route("/chat", post(handlers::chat))
}
