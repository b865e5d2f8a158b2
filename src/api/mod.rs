//! HTTP API module for the Payslip Calculation Engine.
//!
//! This module provides the REST endpoint the form front end drives to
//! calculate a payslip from the raw field values it collected.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::PayslipRequest;
pub use response::ApiError;
pub use state::AppState;
