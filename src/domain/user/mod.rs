//! User domain
//!
//! This module provides the user record, the validation rule table used
//! for form submissions, and the repository trait for user storage.

mod entity;
mod repository;
mod validation;

pub use entity::{User, UserFields, UserId};
pub use repository::UserRepository;
pub use validation::{
    check_rules, validate_user, Field, FieldError, FieldRule, Rule, UserForm, ValidationErrors,
    USER_RULES,
};
