//! HTTP API module for the Payroll Computation Engine.
//!
//! This module provides the REST endpoint for computing a month's payroll
//! from a full state snapshot.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::PayrollRequest;
pub use response::{ApiError, PayrollRunResponse};
pub use state::AppState;
