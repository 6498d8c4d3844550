//! User repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{User, UserFields, UserId};
use crate::domain::DomainError;

/// Repository trait for user storage
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// Store a new user under the next free id
    async fn create(&self, fields: UserFields) -> Result<User, DomainError>;

    /// Get a user by their ID
    async fn get(&self, id: UserId) -> Result<Option<User>, DomainError>;

    /// List all users in ascending id order
    async fn list(&self) -> Result<Vec<User>, DomainError>;

    /// Replace an existing user wholesale
    async fn update(&self, user: User) -> Result<User, DomainError>;

    /// Delete a user, returning whether it existed
    async fn delete(&self, id: UserId) -> Result<bool, DomainError>;

    /// Count stored users
    async fn count(&self) -> Result<usize, DomainError>;

    /// Check if a user ID exists
    async fn exists(&self, id: UserId) -> Result<bool, DomainError> {
        Ok(self.get(id).await?.is_some())
    }
}
