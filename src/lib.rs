//! In-memory blog service: users and posts over a JSON API, plus a few
//! server-rendered pages for reading and writing posts.

pub mod config;
pub mod error;
pub mod handlers;
pub mod html;
pub mod models;
pub mod rest;
pub mod services;
pub mod store;

pub use config::Config;
pub use error::{AppError, ConfigError, Result};
pub use services::{PostService, UserService};

/// Everything the handlers share. Cloning hands out new handles to the same
/// stores.
#[derive(Clone, Default)]
pub struct AppState {
    pub users: UserService,
    pub posts: PostService,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

pub fn app(state: AppState) -> axum::Router {
    rest::router(state)
}
