/// Server error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use showbill_core::CoreError;
use showbill_storage::StorageError;
use thiserror::Error;

use crate::templates::{NotFoundTemplate, ServerErrorTemplate};

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Storage error: {0}")]
    Storage(#[source] StorageError),

    #[error("Listing error: {0}")]
    Core(#[from] CoreError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<StorageError> for ServerError {
    fn from(err: StorageError) -> Self {
        // Missing rows surface as a page-level 404, everything else is a
        // storage failure.
        match err {
            StorageError::NotFound { entity, id } => {
                ServerError::NotFound(format!("{entity} {id}"))
            }
            other => ServerError::Storage(other),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match self {
            ServerError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                NotFoundTemplate {
                    message: msg,
                },
            )
                .into_response(),
            ServerError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ServerErrorTemplate {
                    message: msg,
                },
            )
                .into_response(),
            ServerError::Storage(ref e) => {
                tracing::error!("Storage error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ServerErrorTemplate {
                        message: "Something went wrong on our end.".to_string(),
                    },
                )
                    .into_response()
            }
            ServerError::Core(ref e) => {
                tracing::error!("Listing error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ServerErrorTemplate {
                        message: "Something went wrong on our end.".to_string(),
                    },
                )
                    .into_response()
            }
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ServerErrorTemplate {
                        message: "Something went wrong on our end.".to_string(),
                    },
                )
                    .into_response()
            }
            ServerError::Io(ref e) => {
                tracing::error!("IO error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ServerErrorTemplate {
                        message: "Something went wrong on our end.".to_string(),
                    },
                )
                    .into_response()
            }
        }
    }
}
