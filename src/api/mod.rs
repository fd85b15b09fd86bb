//! REST API server for the signage hub
//!
//! Provides the HTTP endpoints for playlist composition, player layouts,
//! and user administration.

pub mod routes;
pub mod server;
pub mod state;
pub mod types;

pub use routes::create_router;
pub use server::run_server;
pub use state::{create_state, AppState, SharedServices};
pub use types::*;
