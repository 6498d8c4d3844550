//! HTTP edge types: errors, extractors and response negotiation

pub mod error;
pub mod form;
pub mod format;

pub use error::ApiError;
pub use form::Form;
pub use format::ResponseFormat;
