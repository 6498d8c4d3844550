//! View models handed to the rendering step

use axum::http::StatusCode;
use serde::Serialize;

use crate::domain::{User, ValidationErrors};

use super::{html, View};

/// A user as shown in lists and forms
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserView {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: Option<u8>,
    pub bio: Option<String>,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().value(),
            first_name: user.first_name().to_string(),
            last_name: user.last_name().to_string(),
            email: user.email().to_string(),
            age: user.age(),
            bio: user.bio().map(String::from),
        }
    }
}

/// The user table, either complete or filtered by a search
#[derive(Debug, Clone, Serialize)]
pub struct UserListView {
    pub title: String,
    pub users: Vec<UserView>,
    pub total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl UserListView {
    pub fn all(users: Vec<UserView>) -> Self {
        Self {
            title: "Users".to_string(),
            total: users.len(),
            users,
            query: None,
            message: None,
        }
    }

    pub fn search(query: impl Into<String>, users: Vec<UserView>) -> Self {
        let query = query.into();
        let message = users
            .is_empty()
            .then(|| format!("No users found matching \"{}\"", query));

        Self {
            title: "Search Results".to_string(),
            total: users.len(),
            users,
            query: Some(query),
            message,
        }
    }
}

impl View for UserListView {
    fn title(&self) -> &str {
        &self.title
    }

    fn render_body(&self) -> String {
        html::user_list(self)
    }
}

/// The create/update form
#[derive(Debug, Clone, Serialize)]
pub struct UserFormView {
    pub title: String,
    pub action: String,
    pub user: Option<UserView>,
    pub errors: Vec<String>,
}

impl UserFormView {
    pub fn create() -> Self {
        Self {
            title: "Create User".to_string(),
            action: "/create".to_string(),
            user: None,
            errors: Vec::new(),
        }
    }

    pub fn update(user: UserView) -> Self {
        Self {
            title: "Update User".to_string(),
            action: format!("/{}/update", user.id),
            user: Some(user),
            errors: Vec::new(),
        }
    }

    pub fn with_errors(mut self, errors: &ValidationErrors) -> Self {
        self.errors = errors.messages().map(String::from).collect();
        self
    }
}

impl View for UserFormView {
    fn title(&self) -> &str {
        &self.title
    }

    fn render_body(&self) -> String {
        html::user_form(self)
    }
}

/// An error page
#[derive(Debug, Clone, Serialize)]
pub struct ErrorView {
    pub title: String,
    pub status: u16,
    pub message: String,
}

impl ErrorView {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            title: status
                .canonical_reason()
                .unwrap_or("Error")
                .to_string(),
            status: status.as_u16(),
            message: message.into(),
        }
    }
}

impl View for ErrorView {
    fn title(&self) -> &str {
        &self.title
    }

    fn render_body(&self) -> String {
        html::error_page(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{validate_user, UserFields, UserForm, UserId};

    fn anna() -> UserView {
        let user = User::new(
            UserId::new(4),
            UserFields::new("Anna", "Smith", "anna@example.com").with_age(31),
        );
        UserView::from(&user)
    }

    #[test]
    fn test_user_view_from_user() {
        let view = anna();

        assert_eq!(view.id, 4);
        assert_eq!(view.first_name, "Anna");
        assert_eq!(view.age, Some(31));
        assert!(view.bio.is_none());
    }

    #[test]
    fn test_search_view_without_matches_has_message() {
        let view = UserListView::search("zz", Vec::new());

        assert_eq!(view.total, 0);
        assert_eq!(view.message.as_deref(), Some("No users found matching \"zz\""));
    }

    #[test]
    fn test_search_view_with_matches_has_no_message() {
        let view = UserListView::search("an", vec![anna()]);

        assert_eq!(view.total, 1);
        assert!(view.message.is_none());
    }

    #[test]
    fn test_update_form_action_uses_id() {
        let view = UserFormView::update(anna());
        assert_eq!(view.action, "/4/update");
    }

    #[test]
    fn test_form_with_errors() {
        let errors = validate_user(&UserForm::default()).unwrap_err();
        let view = UserFormView::create().with_errors(&errors);

        assert_eq!(view.errors.len(), errors.len());
        assert_eq!(view.errors[0], "First name must only contain letters.");
    }

    #[test]
    fn test_error_view_title() {
        let view = ErrorView::new(StatusCode::NOT_FOUND, "missing");

        assert_eq!(view.title, "Not Found");
        assert_eq!(view.status, 404);
    }
}
