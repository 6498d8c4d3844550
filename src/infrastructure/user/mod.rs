//! User infrastructure module
//!
//! This module provides the in-memory user store and the user service that
//! sits between HTTP handlers and the store.

mod repository;
mod service;

pub use repository::InMemoryUserRepository;
pub use service::UserService;
