//! HTTP API for the attendance engine.
//!
//! A thin axum adapter over the upload pipeline, the employee report and the
//! running-average upsert. It carries no authentication.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::AverageRequest;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
