//! Error types for frontier-api

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use frontier_core::error::{CoreError, DefaultErrorLogger, ErrorCode, ErrorDetails, ErrorLogger};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Bad request: {message}")]
    BadRequest { message: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Core(e) => match e.code() {
                ErrorCode::ValidationError => StatusCode::UNPROCESSABLE_ENTITY,
                ErrorCode::RuleNotFound | ErrorCode::ReportNotFound | ErrorCode::UnknownTab => {
                    StatusCode::NOT_FOUND
                }
                ErrorCode::ReportUnavailable => StatusCode::CONFLICT,
                ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
            },
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        }
    }

    pub fn to_details(&self) -> ErrorDetails {
        match self {
            ApiError::Core(e) => e.to_details(),
            ApiError::BadRequest { .. } => ErrorDetails::new(ErrorCode::InvalidRequest, self.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Core(ref e) = self {
            DefaultErrorLogger.log_error(e, "http");
        }
        let status = self.status();
        let body = serde_json::to_string(&self.to_details()).unwrap_or_default();
        (status, [("content-type", "application/json")], body).into_response()
    }
}
