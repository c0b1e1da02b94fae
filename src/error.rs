use axum::{
    extract::rejection::FormRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("User not found")]
    UserNotFound,

    #[error("Post not found")]
    PostNotFound,

    #[error("Password hashing error: {0}")]
    PasswordHash(#[from] argon2::password_hash::Error),

    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error(transparent)]
    Form(#[from] FormRejection),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::UserNotFound | AppError::PostNotFound => {
                (StatusCode::NOT_FOUND, self.to_string())
            }
            AppError::PasswordHash(ref e) => {
                tracing::error!("Password hashing error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            AppError::Task(ref e) => {
                tracing::error!("Background task failed: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            AppError::Form(rejection) => return rejection.into_response(),
        };

        let body = Json(json!({
            "detail": detail,
        }));

        (status, body).into_response()
    }
}

/// Problems with the process environment found at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid BLOG_PORT {value:?}: {source}")]
    Port {
        value: String,
        source: std::num::ParseIntError,
    },

    #[error("invalid bind address {value:?}: {source}")]
    Address {
        value: String,
        source: std::net::AddrParseError,
    },
}
