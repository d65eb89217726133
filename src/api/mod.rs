//! API layer - HTML form, JSON endpoints and middleware

pub mod form;
pub mod health;
pub mod middleware;
pub mod router;
pub mod state;
pub mod types;
pub mod v1;

pub use router::create_router;
pub use state::AppState;
