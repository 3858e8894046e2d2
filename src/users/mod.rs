use crate::state::AppState;
use axum::Router;

pub mod dto;
mod extractors;
pub mod handlers;
mod memory;
pub mod repo;
mod repo_types;
pub mod services;
mod validate;

pub use memory::InMemoryUserStore;
pub use repo::{PgUserStore, UserStore};
pub use repo_types::{Role, User};
pub use services::AccountService;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::user_routes())
}
