//! View models and their rendering
//!
//! Handlers build a view model and wrap it in [`Rendered`] together with a
//! status code and the negotiated [`ResponseFormat`].

mod html;
mod models;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::api::types::ResponseFormat;

pub use html::escape_html;
pub use models::{ErrorView, UserFormView, UserListView, UserView};

/// A view model that can be rendered as an HTML page
pub trait View: Serialize {
    /// Page title
    fn title(&self) -> &str;

    /// Page body, without the surrounding layout
    fn render_body(&self) -> String;

    /// Full HTML document
    fn render_page(&self) -> String {
        html::layout(self.title(), &self.render_body())
    }
}

/// A view model paired with its response status and format
#[derive(Debug)]
pub struct Rendered<V> {
    pub status: StatusCode,
    pub format: ResponseFormat,
    pub view: V,
}

impl<V: View> Rendered<V> {
    pub fn new(status: StatusCode, format: ResponseFormat, view: V) -> Self {
        Self {
            status,
            format,
            view,
        }
    }

    pub fn ok(format: ResponseFormat, view: V) -> Self {
        Self::new(StatusCode::OK, format, view)
    }
}

impl<V: View> IntoResponse for Rendered<V> {
    fn into_response(self) -> Response {
        match self.format {
            ResponseFormat::Json => (self.status, Json(self.view)).into_response(),
            ResponseFormat::Html => (self.status, Html(self.view.render_page())).into_response(),
        }
    }
}
