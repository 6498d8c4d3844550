//! Application state for shared services

use std::sync::Arc;

use crate::domain::UserRepository;
use crate::infrastructure::UserService;

/// Application state shared by all handlers
///
/// Built once at startup; the single store instance lives behind the
/// user service and is injected here rather than held in a global.
#[derive(Clone, Debug)]
pub struct AppState {
    pub user_service: Arc<UserService>,
}

impl AppState {
    pub fn new(user_service: UserService) -> Self {
        Self {
            user_service: Arc::new(user_service),
        }
    }

    /// Build state directly on top of a repository
    pub fn with_repository(repository: Arc<dyn UserRepository>) -> Self {
        Self::new(UserService::new(repository))
    }
}
