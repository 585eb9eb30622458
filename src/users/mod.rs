use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, Router};

pub mod code;
pub mod dto;
pub mod handlers;
pub mod password;
pub mod repo;
pub mod repo_types;

pub use repo::{MySqlUserStore, StoreError, UserStore};
pub use repo_types::{NewUser, User};

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(handlers::user_routes())
        .layer(DefaultBodyLimit::disable())
}
