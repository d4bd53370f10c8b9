//! HTTP error types

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Error categories exposed to HTTP clients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorType {
    InvalidRequestError,
    NotFoundError,
    ConflictError,
    ServerError,
}

impl std::fmt::Display for ApiErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRequestError => write!(f, "invalid_request_error"),
            Self::NotFoundError => write!(f, "not_found_error"),
            Self::ConflictError => write!(f, "conflict_error"),
            Self::ServerError => write!(f, "server_error"),
        }
    }
}

/// Error response body: `{"error": {"message", "type"}}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: ApiErrorType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub response: ApiErrorResponse,
}

impl ApiError {
    pub fn new(status: StatusCode, error_type: ApiErrorType, message: impl Into<String>) -> Self {
        Self {
            status,
            response: ApiErrorResponse {
                error: ApiErrorDetail {
                    message: message.into(),
                    error_type,
                    param: None,
                },
            },
        }
    }

    /// Add parameter info
    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.response.error.param = Some(param.into());
        self
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, ApiErrorType::InvalidRequestError, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, ApiErrorType::NotFoundError, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, ApiErrorType::ConflictError, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, ApiErrorType::ServerError, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.response)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match &err {
            DomainError::NotFound { message } => Self::not_found(message),
            DomainError::Validation { message } => Self::bad_request(message),
            DomainError::InvalidId { message } => Self::bad_request(message).with_param("id"),
            DomainError::Conflict { message } => Self::conflict(message),
            DomainError::Internal { message } => Self::internal(message),
            DomainError::Storage { message } => Self::internal(message),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}",
            self.response.error.error_type, self.response.error.message
        )
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_error_conversion() {
        let cases = [
            (DomainError::not_found("user not found"), StatusCode::NOT_FOUND),
            (DomainError::validation("name is empty"), StatusCode::BAD_REQUEST),
            (DomainError::invalid_id("bad"), StatusCode::BAD_REQUEST),
            (DomainError::conflict("user already exists"), StatusCode::CONFLICT),
            (DomainError::internal("could not delete user"), StatusCode::INTERNAL_SERVER_ERROR),
            (DomainError::storage("poisoned"), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (domain_err, status) in cases {
            let api_err = ApiError::from(domain_err);
            assert_eq!(api_err.status, status);
        }
    }

    #[test]
    fn test_conflict_keeps_message() {
        let api_err = ApiError::from(DomainError::conflict("user already exists"));

        assert_eq!(api_err.response.error.error_type, ApiErrorType::ConflictError);
        assert_eq!(api_err.response.error.message, "user already exists");
        assert_eq!(api_err.to_string(), "conflict_error: user already exists");
    }

    #[test]
    fn test_error_serialization() {
        let err = ApiError::from(DomainError::invalid_id("bad"));
        let json = serde_json::to_string(&err.response).unwrap();

        assert!(json.contains(r#""type":"invalid_request_error""#));
        assert!(json.contains(r#""param":"id""#));

        let err = ApiError::not_found("circle not found");
        let json = serde_json::to_string(&err.response).unwrap();
        assert!(!json.contains("param"));
    }
}
