//! User entity and related types

use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// User identifier - assigned by the store, starts at 1 and is never reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the inner numeric value
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl FromStr for UserId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(Self)
    }
}

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated field values of a user, without an identity.
///
/// Produced by [`super::validate_user`]; every string is already trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

impl UserFields {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            age: None,
            bio: None,
        }
    }

    pub fn with_age(mut self, age: u8) -> Self {
        self.age = Some(age);
        self
    }

    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }
}

/// A stored user record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    #[serde(flatten)]
    fields: UserFields,
}

impl User {
    pub fn new(id: UserId, fields: UserFields) -> Self {
        Self { id, fields }
    }

    // Getters

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn fields(&self) -> &UserFields {
        &self.fields
    }

    pub fn first_name(&self) -> &str {
        &self.fields.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.fields.last_name
    }

    pub fn email(&self) -> &str {
        &self.fields.email
    }

    pub fn age(&self) -> Option<u8> {
        self.fields.age
    }

    pub fn bio(&self) -> Option<&str> {
        self.fields.bio.as_deref()
    }

    /// Replace every field at once; the id is kept
    pub fn replace_fields(&mut self, fields: UserFields) {
        self.fields = fields;
    }

    /// Case-insensitive substring match against first and last name.
    ///
    /// `needle` must already be lowercased.
    pub fn name_contains(&self, needle: &str) -> bool {
        self.fields.first_name.to_lowercase().contains(needle)
            || self.fields.last_name.to_lowercase().contains(needle)
    }
}
