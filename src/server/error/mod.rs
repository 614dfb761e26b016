//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. The `AppError` enum serves as the top-level
//! error type returned by services and controllers, and its `IntoResponse` implementation
//! is the single place where the status vocabulary (400, 403, 404, 500, 503) is decided.

pub mod config;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, validation::ValidationErrors},
};

/// Generic body message for unexpected failures; never carries internal detail.
pub const INTERNAL_SERVER_ERROR_MESSAGE: &str = "Internal Server Error.";

/// Body message for storage faults on otherwise valid requests.
pub const SERVICE_UNAVAILABLE_MESSAGE: &str = "Service unavailable, please try again later.";

/// Top-level application error type.
///
/// Anticipated outcomes (bad input, duplicates, missing records, storage faults on writes)
/// each have a dedicated variant. Everything else converts through `#[from]` and surfaces
/// as a generic 500 response with the detail logged server-side.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database error that was not anticipated by the calling service.
    ///
    /// Lookups (find by id, duplicate checks) propagate their failures through this
    /// variant, resulting in 500 Internal Server Error.
    #[error(transparent)]
    DbErr(#[from] DbErr),

    /// I/O error while binding or serving the HTTP listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// One or more request fields are missing or invalid.
    ///
    /// Results in 400 Bad Request with every offending field itemized.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// A record with the same duplicate key already exists.
    ///
    /// Results in 403 Forbidden with the provided error message.
    #[error("{0}")]
    Duplicate(String),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// The storage layer rejected a write for a request that passed validation.
    ///
    /// Results in 503 Service Unavailable. The underlying error is logged, the client
    /// receives a generic message and may retry.
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(#[source] DbErr),
}

impl AppError {
    /// Classifies an error returned by a create or update write.
    ///
    /// A unique constraint violation means a concurrent writer stored the same duplicate
    /// key after the pre-check passed, so it is reported as the duplicate case. Any other
    /// error is a storage fault.
    ///
    /// # Arguments
    /// - `err` - Error returned by the write
    /// - `duplicate_message` - Message used when the error is a unique violation
    ///
    /// # Returns
    /// - `AppError::Duplicate` - For unique constraint violations
    /// - `AppError::StorageUnavailable` - For every other database error
    pub fn from_write(err: DbErr, duplicate_message: &str) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                Self::Duplicate(duplicate_message.to_string())
            }
            _ => Self::StorageUnavailable(err),
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `Validation` and `BadRequest`
/// - 403 Forbidden - For `Duplicate`
/// - 404 Not Found - For `NotFound`
/// - 503 Service Unavailable - For `StorageUnavailable`
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(errors) => {
                tracing::debug!("Rejected request: {:?}", errors);
                (StatusCode::BAD_REQUEST, Json(errors.into_dto())).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::Duplicate(msg) => {
                (StatusCode::FORBIDDEN, Json(ErrorDto { error: msg })).into_response()
            }
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::StorageUnavailable(err) => {
                tracing::error!("Storage fault: {}", err);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(ErrorDto {
                        error: SERVICE_UNAVAILABLE_MESSAGE.to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client so implementation
/// details never leak.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        internal_server_error()
    }
}

/// Builds the generic 500 response shared by every unexpected failure path.
pub fn internal_server_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorDto {
            error: INTERNAL_SERVER_ERROR_MESSAGE.to_string(),
        }),
    )
        .into_response()
}
