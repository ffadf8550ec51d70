//! HTTP API module for the Cart Totals Engine.
//!
//! This module provides the REST API endpoints for applying discounts,
//! calculating tax and totalling carts.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{DiscountRequest, TaxRequest, TotalsRequest};
pub use response::{ApiError, DiscountResponse, TaxResponse};
pub use state::AppState;
