use axum::{
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::warn;

use crate::database::RosterError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Roster(#[from] RosterError),

    #[error("Email is required")]
    MissingEmail,

    #[error("Email is not valid")]
    InvalidEmail,

    // Any activity name that cannot be decoded cannot name a stored activity.
    #[error("Activity not found")]
    InvalidPath(#[from] PathRejection),

    #[error("Exactly one email is required")]
    InvalidQuery(#[from] QueryRejection),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Roster(RosterError::NotFound) => StatusCode::NOT_FOUND,
            AppError::Roster(
                RosterError::AlreadyEnrolled
                | RosterError::CapacityExceeded
                | RosterError::NotEnrolled,
            ) => StatusCode::BAD_REQUEST,
            AppError::Roster(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::MissingEmail | AppError::InvalidEmail => StatusCode::BAD_REQUEST,
            AppError::InvalidPath(_) => StatusCode::NOT_FOUND,
            AppError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::InvalidPath(rejection) => {
                warn!(reason = %rejection.body_text(), "Rejected activity path")
            }
            AppError::InvalidQuery(rejection) => {
                warn!(reason = %rejection.body_text(), "Rejected query string")
            }
            _ => {}
        }

        (self.status(), Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
