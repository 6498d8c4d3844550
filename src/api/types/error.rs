//! HTTP error type rendered as an error page

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::api::views::{ErrorView, Rendered};
use crate::domain::DomainError;

use super::ResponseFormat;

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub format: ResponseFormat,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            format: ResponseFormat::default(),
        }
    }

    /// Render in the given format instead of HTML
    pub fn with_format(mut self, format: ResponseFormat) -> Self {
        self.format = format;
        self
    }

    /// Bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let view = ErrorView::new(self.status, self.message);
        Rendered::new(self.status, self.format, view).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match &err {
            DomainError::NotFound { message } => Self::not_found(message),
            DomainError::Validation(errors) => Self::bad_request(errors.to_string()),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{validate_user, UserForm};

    #[test]
    fn test_api_error_creation() {
        let err = ApiError::bad_request("Search query 'name' is required");
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Search query 'name' is required");
        assert_eq!(err.format, ResponseFormat::Html);
    }

    #[test]
    fn test_domain_not_found_conversion() {
        let api_err: ApiError = DomainError::not_found("User '9' not found").into();

        assert_eq!(api_err.status, StatusCode::NOT_FOUND);
        assert_eq!(api_err.message, "User '9' not found");
    }

    #[test]
    fn test_domain_validation_conversion() {
        let errors = validate_user(&UserForm::default()).unwrap_err();
        let api_err: ApiError = DomainError::validation(errors).into();

        assert_eq!(api_err.status, StatusCode::BAD_REQUEST);
        assert!(api_err.message.contains("Email must be an email"));
    }

    #[test]
    fn test_into_response_keeps_status() {
        let response = ApiError::not_found("gone")
            .with_format(ResponseFormat::Json)
            .into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_all_error_types() {
        assert_eq!(ApiError::bad_request("").status, StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::not_found("").status, StatusCode::NOT_FOUND);
    }
}
