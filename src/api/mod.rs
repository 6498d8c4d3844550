//! API layer - HTTP endpoints, views and middleware

pub mod health;
pub mod middleware;
pub mod router;
pub mod state;
pub mod types;
pub mod users;
pub mod views;

pub use router::create_router;
pub use state::AppState;
