pub mod answers;
pub mod app;
pub mod auth;
pub mod chat;
pub mod config;
pub mod error;
pub mod ownership;
pub mod questions;
pub mod session;
pub mod state;

pub use app::{build_app, serve};
pub use error::ApiError;
pub use session::Session;
pub use state::AppState;
