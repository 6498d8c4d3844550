//! Infrastructure layer - store implementations, services and logging

pub mod logging;
pub mod user;

pub use user::{InMemoryUserRepository, UserService};
