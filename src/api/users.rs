//! User form and search endpoints

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Form, ResponseFormat};
use crate::api::views::{Rendered, UserFormView, UserListView, UserView};
use crate::domain::{DomainError, User, UserForm};

/// Query string of the search endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    pub name: Option<String>,
}

fn redirect_to_list() -> Response {
    (StatusCode::FOUND, [(header::LOCATION, "/")]).into_response()
}

fn user_views(users: &[User]) -> Vec<UserView> {
    users.iter().map(UserView::from).collect()
}

/// GET /
pub async fn list_users(
    State(state): State<AppState>,
    format: ResponseFormat,
) -> Result<Response, ApiError> {
    debug!("Listing all users");

    let users = state
        .user_service
        .list()
        .await
        .map_err(|e| ApiError::from(e).with_format(format))?;

    Ok(Rendered::ok(format, UserListView::all(user_views(&users))).into_response())
}

/// GET /create
pub async fn show_create_form(format: ResponseFormat) -> Response {
    Rendered::ok(format, UserFormView::create()).into_response()
}

/// POST /create
pub async fn create_user(
    State(state): State<AppState>,
    format: ResponseFormat,
    Form(form): Form<UserForm>,
) -> Result<Response, ApiError> {
    debug!("Submitting new user");

    match state.user_service.create(&form).await {
        Ok(_) => Ok(redirect_to_list()),
        Err(DomainError::Validation(errors)) => {
            let view = UserFormView::create().with_errors(&errors);
            Ok(Rendered::new(StatusCode::BAD_REQUEST, format, view).into_response())
        }
        Err(e) => Err(ApiError::from(e).with_format(format)),
    }
}

async fn find_user(state: &AppState, id: &str, format: ResponseFormat) -> Result<User, ApiError> {
    state
        .user_service
        .get(id)
        .await
        .map_err(|e| ApiError::from(e).with_format(format))?
        .ok_or_else(|| ApiError::not_found(format!("User '{}' not found", id)).with_format(format))
}

/// GET /{id}/update
pub async fn show_update_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
    format: ResponseFormat,
) -> Result<Response, ApiError> {
    debug!(id = %id, "Showing update form");

    let user = find_user(&state, &id, format).await?;

    Ok(Rendered::ok(format, UserFormView::update(UserView::from(&user))).into_response())
}

/// POST /{id}/update
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    format: ResponseFormat,
    Form(form): Form<UserForm>,
) -> Result<Response, ApiError> {
    debug!(id = %id, "Submitting user update");

    let current = find_user(&state, &id, format).await?;

    match state.user_service.update(&id, &form).await {
        Ok(_) => Ok(redirect_to_list()),
        Err(DomainError::Validation(errors)) => {
            let view = UserFormView::update(UserView::from(&current)).with_errors(&errors);
            Ok(Rendered::new(StatusCode::BAD_REQUEST, format, view).into_response())
        }
        Err(e) => Err(ApiError::from(e).with_format(format)),
    }
}

/// POST /{id}/delete
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    format: ResponseFormat,
) -> Result<Response, ApiError> {
    debug!(id = %id, "Deleting user");

    state
        .user_service
        .delete(&id)
        .await
        .map_err(|e| ApiError::from(e).with_format(format))?;

    Ok(redirect_to_list())
}

/// GET /search?name=
pub async fn search_users(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
    format: ResponseFormat,
) -> Result<Response, ApiError> {
    let Some(name) = params.name else {
        return Err(ApiError::bad_request("Search query 'name' is required").with_format(format));
    };

    debug!(name = %name, "Searching users");

    let matches = state
        .user_service
        .search(&name)
        .await
        .map_err(|e| ApiError::from(e).with_format(format))?;

    let status = if matches.is_empty() {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    };
    let view = UserListView::search(name.trim(), user_views(&matches));

    Ok(Rendered::new(status, format, view).into_response())
}
