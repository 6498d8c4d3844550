//! Custom form extractor that renders rejections as error pages

use axum::{
    extract::{rejection::FormRejection, FromRequest, Request},
    Form as AxumForm,
};
use serde::de::DeserializeOwned;

use super::{ApiError, ResponseFormat};

/// Custom form extractor that converts all rejection errors to [`ApiError`]
///
/// The rejection is rendered in the format the client asked for, so a
/// browser posting a broken form gets an HTML error page.
#[derive(Debug, Clone, Copy, Default)]
pub struct Form<T>(pub T);

impl<T> Form<T> {
    /// Consume the extractor and return the inner value
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> std::ops::Deref for Form<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S, T> FromRequest<S> for Form<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let format = ResponseFormat::from_headers(req.headers());

        match AxumForm::<T>::from_request(req, state).await {
            Ok(AxumForm(value)) => Ok(Form(value)),
            Err(rejection) => {
                let message = format_rejection_message(&rejection);
                Err(ApiError::new(rejection.status(), message).with_format(format))
            }
        }
    }
}

/// Format the rejection message to be more user-friendly
fn format_rejection_message(rejection: &FormRejection) -> String {
    match rejection {
        FormRejection::InvalidFormContentType(_) => {
            "Missing Content-Type header. Expected 'application/x-www-form-urlencoded'."
                .to_string()
        }
        FormRejection::FailedToDeserializeForm(err) => {
            format!("Invalid form data: {}", err.body_text())
        }
        FormRejection::FailedToDeserializeFormBody(err) => {
            format!("Invalid form data: {}", err.body_text())
        }
        FormRejection::BytesRejection(err) => {
            format!("Failed to read request body: {}", err.body_text())
        }
        _ => "Invalid form submission".to_string(),
    }
}
