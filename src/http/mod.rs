//! HTTP surface of the service
//!
//! Three endpoints, all stateless:
//! - GET / - Static landing page
//! - POST /summarize - Summarize a meeting transcript
//! - POST /share - Email a summary to a recipient list

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
