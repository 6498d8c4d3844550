//! User service: form validation, id normalization and search

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::user::{validate_user, User, UserFields, UserForm, UserId, UserRepository};
use crate::domain::DomainError;

/// User service for record management
///
/// Ids coming from request paths are plain text; they are parsed here and
/// text that is not a valid id behaves exactly like an unknown id.
#[derive(Debug, Clone)]
pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    /// Create a new user service
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// List all users
    pub async fn list(&self) -> Result<Vec<User>, DomainError> {
        self.repository.list().await
    }

    /// Get a user by path id
    pub async fn get(&self, id: &str) -> Result<Option<User>, DomainError> {
        let Ok(user_id) = id.parse::<UserId>() else {
            debug!(id = %id, "Ignoring malformed user id");
            return Ok(None);
        };

        self.repository.get(user_id).await
    }

    /// Validate a submission and store it as a new user
    pub async fn create(&self, form: &UserForm) -> Result<User, DomainError> {
        let fields = Self::validate(form)?;
        let user = self.repository.create(fields).await?;

        info!(id = %user.id(), "Created user");
        Ok(user)
    }

    /// Validate a submission and replace an existing user with it
    pub async fn update(&self, id: &str, form: &UserForm) -> Result<User, DomainError> {
        let user_id = id
            .parse::<UserId>()
            .map_err(|_| DomainError::not_found(format!("User '{}' not found", id)))?;

        let fields = Self::validate(form)?;
        let user = self.repository.update(User::new(user_id, fields)).await?;

        info!(id = %user_id, "Updated user");
        Ok(user)
    }

    /// Delete a user; unknown ids are a no-op
    pub async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        let Ok(user_id) = id.parse::<UserId>() else {
            debug!(id = %id, "Ignoring delete for malformed user id");
            return Ok(false);
        };

        let deleted = self.repository.delete(user_id).await?;
        info!(id = %user_id, deleted, "Deleted user");

        Ok(deleted)
    }

    /// Case-insensitive substring search over first and last names
    pub async fn search(&self, query: &str) -> Result<Vec<User>, DomainError> {
        let needle = query.trim().to_lowercase();

        let matches: Vec<User> = self
            .repository
            .list()
            .await?
            .into_iter()
            .filter(|user| user.name_contains(&needle))
            .collect();

        debug!(query = %needle, matches = matches.len(), "Searched users");
        Ok(matches)
    }

    /// Count stored users
    pub async fn count(&self) -> Result<usize, DomainError> {
        self.repository.count().await
    }

    fn validate(form: &UserForm) -> Result<UserFields, DomainError> {
        validate_user(form).map_err(|errors| {
            debug!(errors = errors.len(), "Rejected user submission");
            DomainError::validation(errors)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::user::repository::InMemoryUserRepository;

    fn create_service() -> UserService {
        UserService::new(Arc::new(InMemoryUserRepository::new()))
    }

    fn make_form(first: &str, last: &str) -> UserForm {
        UserForm {
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: "someone@example.com".to_string(),
            ..UserForm::default()
        }
    }

    #[tokio::test]
    async fn test_create_user() {
        let service = create_service();

        let user = service.create(&make_form("Anna", "Smith")).await.unwrap();

        assert_eq!(user.first_name(), "Anna");
        assert_eq!(service.list().await.unwrap(), vec![user.clone()]);
        assert_eq!(
            service.get(&user.id().to_string()).await.unwrap(),
            Some(user)
        );
    }

    #[tokio::test]
    async fn test_create_ids_strictly_increase() {
        let service = create_service();
        let mut last = None;

        for (first, last_name) in [("Anna", "Smith"), ("Bob", "Jones"), ("Cara", "Lee")] {
            let user = service.create(&make_form(first, last_name)).await.unwrap();

            if let Some(previous) = last {
                assert!(user.id() > previous);
            }
            last = Some(user.id());
        }
    }

    #[tokio::test]
    async fn test_create_trims_values() {
        let service = create_service();

        let user = service.create(&make_form("  Bob  ", "Jones")).await.unwrap();
        let found = service.get(&user.id().to_string()).await.unwrap().unwrap();

        assert_eq!(found.first_name(), "Bob");
    }

    #[tokio::test]
    async fn test_create_invalid_does_not_touch_store() {
        let service = create_service();

        for first in ["Bob1", "", "abcdefghijk"] {
            let result = service.create(&make_form(first, "Jones")).await;
            assert!(matches!(result, Err(DomainError::Validation(_))));
        }

        assert_eq!(service.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_get_malformed_id_is_none() {
        let service = create_service();
        service.create(&make_form("Anna", "Smith")).await.unwrap();

        assert!(service.get("abc").await.unwrap().is_none());
        assert!(service.get("").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let service = create_service();
        let mut form = make_form("Anna", "Smith");
        form.age = "30".to_string();
        form.bio = "Hello".to_string();
        let user = service.create(&form).await.unwrap();
        let id = user.id().to_string();

        let updated = service.update(&id, &make_form("Bob", "Jones")).await.unwrap();

        let found = service.get(&id).await.unwrap().unwrap();
        assert_eq!(found, updated);
        assert_eq!(found.id(), user.id());
        assert_eq!(
            found.fields(),
            &UserFields::new("Bob", "Jones", "someone@example.com")
        );
    }

    #[tokio::test]
    async fn test_update_invalid_keeps_previous_record() {
        let service = create_service();
        let user = service.create(&make_form("Anna", "Smith")).await.unwrap();
        let id = user.id().to_string();

        let result = service.update(&id, &make_form("Anna2", "Smith")).await;

        assert!(matches!(result, Err(DomainError::Validation(_))));
        assert_eq!(service.get(&id).await.unwrap(), Some(user));
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let service = create_service();

        let result = service.update("42", &make_form("Anna", "Smith")).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));

        let result = service.update("nope", &make_form("Anna", "Smith")).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));

        assert_eq!(service.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_twice_is_idempotent() {
        let service = create_service();
        let user = service.create(&make_form("Anna", "Smith")).await.unwrap();
        let id = user.id().to_string();

        assert!(service.delete(&id).await.unwrap());
        assert!(!service.delete(&id).await.unwrap());
        assert!(service.get(&id).await.unwrap().is_none());
        assert!(!service.delete("garbage").await.unwrap());
    }

    #[tokio::test]
    async fn test_search_substring_case_insensitive() {
        let service = create_service();
        service.create(&make_form("Anna", "Smith")).await.unwrap();
        service.create(&make_form("Bob", "Jones")).await.unwrap();

        let matches = service.search("an").await.unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].first_name(), "Anna");

        let matches = service.search("  JON ").await.unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].last_name(), "Jones");
    }

    #[tokio::test]
    async fn test_search_no_matches() {
        let service = create_service();
        service.create(&make_form("Anna", "Smith")).await.unwrap();

        assert!(service.search("zz").await.unwrap().is_empty());
    }
}
