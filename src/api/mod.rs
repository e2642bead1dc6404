//! HTTP API module for the Severance Engine.
//!
//! This module provides the REST API endpoints for calculating severance
//! settlements, rendering printable settlement reports and computing
//! procedural due dates.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{DueDateRequest, SettlementRequest};
pub use response::{ApiError, DueDateResponse, SettlementResponse};
pub use state::AppState;
