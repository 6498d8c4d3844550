//! In-memory user repository implementation

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::domain::user::{User, UserFields, UserId, UserRepository};
use crate::domain::DomainError;

#[derive(Debug)]
struct Inner {
    /// Next id to hand out; only ever grows
    next_id: u64,
    users: BTreeMap<UserId, User>,
}

impl Inner {
    fn insert(&mut self, fields: UserFields) -> User {
        let id = UserId::new(self.next_id);
        self.next_id += 1;

        let user = User::new(id, fields);
        self.users.insert(id, user.clone());
        user
    }
}

/// In-memory implementation of UserRepository
///
/// Records live in a `BTreeMap` keyed by id, so listing yields insertion
/// order. Deleted ids are never reused.
#[derive(Debug)]
pub struct InMemoryUserRepository {
    inner: RwLock<Inner>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                next_id: 1,
                users: BTreeMap::new(),
            }),
        }
    }

    /// Create a repository with initial users, assigning ids in order
    pub fn with_users(users: Vec<UserFields>) -> Self {
        let mut inner = Inner {
            next_id: 1,
            users: BTreeMap::new(),
        };

        for fields in users {
            inner.insert(fields);
        }

        Self {
            inner: RwLock::new(inner),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, fields: UserFields) -> Result<User, DomainError> {
        let mut inner = self.inner.write().await;
        Ok(inner.insert(fields))
    }

    async fn get(&self, id: UserId) -> Result<Option<User>, DomainError> {
        let inner = self.inner.read().await;
        Ok(inner.users.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        let inner = self.inner.read().await;
        Ok(inner.users.values().cloned().collect())
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let mut inner = self.inner.write().await;

        match inner.users.get_mut(&user.id()) {
            Some(existing) => {
                *existing = user.clone();
                Ok(user)
            }
            None => Err(DomainError::not_found(format!(
                "User '{}' not found",
                user.id()
            ))),
        }
    }

    async fn delete(&self, id: UserId) -> Result<bool, DomainError> {
        let mut inner = self.inner.write().await;
        Ok(inner.users.remove(&id).is_some())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let inner = self.inner.read().await;
        Ok(inner.users.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(first: &str, last: &str) -> UserFields {
        UserFields::new(first, last, format!("{}@example.com", first.to_lowercase()))
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let repo = InMemoryUserRepository::new();

        let first = repo.create(fields("Anna", "Smith")).await.unwrap();
        let second = repo.create(fields("Bob", "Jones")).await.unwrap();

        assert_eq!(first.id(), UserId::new(1));
        assert!(second.id() > first.id());
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let repo = InMemoryUserRepository::new();

        let first = repo.create(fields("Anna", "Smith")).await.unwrap();
        let second = repo.create(fields("Bob", "Jones")).await.unwrap();
        repo.delete(second.id()).await.unwrap();
        repo.delete(first.id()).await.unwrap();

        let third = repo.create(fields("Cara", "Lee")).await.unwrap();
        assert_eq!(third.id(), UserId::new(3));
    }

    #[tokio::test]
    async fn test_get_missing_is_none() {
        let repo = InMemoryUserRepository::new();
        assert!(repo.get(UserId::new(99)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_in_insertion_order() {
        let repo = InMemoryUserRepository::new();

        repo.create(fields("Anna", "Smith")).await.unwrap();
        repo.create(fields("Bob", "Jones")).await.unwrap();
        repo.create(fields("Cara", "Lee")).await.unwrap();

        let names: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .iter()
            .map(|u| u.first_name().to_string())
            .collect();

        assert_eq!(names, vec!["Anna", "Bob", "Cara"]);
    }

    #[tokio::test]
    async fn test_update_replaces_wholesale() {
        let repo = InMemoryUserRepository::new();
        let user = repo
            .create(fields("Anna", "Smith").with_age(30).with_bio("Hi"))
            .await
            .unwrap();

        let replacement = User::new(user.id(), fields("Bob", "Jones"));
        repo.update(replacement.clone()).await.unwrap();

        let found = repo.get(user.id()).await.unwrap().unwrap();
        assert_eq!(found, replacement);
        assert!(found.age().is_none());
        assert!(found.bio().is_none());
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found_and_writes_nothing() {
        let repo = InMemoryUserRepository::new();

        let result = repo
            .update(User::new(UserId::new(5), fields("Anna", "Smith")))
            .await;

        assert!(matches!(result, Err(DomainError::NotFound { .. })));
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let repo = InMemoryUserRepository::new();
        let user = repo.create(fields("Anna", "Smith")).await.unwrap();

        assert!(repo.delete(user.id()).await.unwrap());
        assert!(!repo.delete(user.id()).await.unwrap());
        assert!(repo.get(user.id()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_with_users_seeds_in_order() {
        let repo = InMemoryUserRepository::with_users(vec![
            fields("Anna", "Smith"),
            fields("Bob", "Jones"),
        ]);

        assert_eq!(repo.count().await.unwrap(), 2);
        assert!(repo.exists(UserId::new(2)).await.unwrap());

        let next = repo.create(fields("Cara", "Lee")).await.unwrap();
        assert_eq!(next.id(), UserId::new(3));
    }
}
