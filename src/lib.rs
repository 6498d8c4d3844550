//! User Directory
//!
//! A small form-driven web application for managing user records:
//! - Create, list, update and delete users through HTML forms
//! - Case-insensitive name search
//! - Declarative validation rules reported all at once
//! - In-memory store, injected into handlers through `AppState`

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use domain::{UserFields, UserRepository};
use infrastructure::InMemoryUserRepository;
use tracing::info;

/// Create the application state with default configuration
pub fn create_app_state() -> AppState {
    create_app_state_with_config(&AppConfig::default())
}

/// Create the application state with custom configuration
pub fn create_app_state_with_config(config: &AppConfig) -> AppState {
    let repository: Arc<dyn UserRepository> = if config.store.seed_demo_users {
        info!("Seeding in-memory store with demo users");
        Arc::new(InMemoryUserRepository::with_users(default_users()))
    } else {
        Arc::new(InMemoryUserRepository::new())
    };

    AppState::with_repository(repository)
}

fn default_users() -> Vec<UserFields> {
    vec![
        UserFields::new("Ada", "Lovelace", "ada@example.com")
            .with_age(36)
            .with_bio("Wrote the first published algorithm."),
        UserFields::new("Alan", "Turing", "alan@example.com").with_age(41),
        UserFields::new("Grace", "Hopper", "grace@example.com")
            .with_bio("Popularized machine-independent languages."),
    ]
}
