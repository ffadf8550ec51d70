//! HTTP request handlers for the Cart Totals Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{apply_discount, calculate_tax, calculate_total_with_audit};
use crate::error::EngineError;
use crate::models::{AuditTrace, CalculationResult, CartItem};

use super::request::{DiscountRequest, TaxRequest, TotalsRequest};
use super::response::{ApiError, ApiErrorResponse, DiscountResponse, TaxResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/discount", post(discount_handler))
        .route("/tax", post(tax_handler))
        .route("/totals", post(totals_handler))
        .with_state(state)
}

/// Builds a JSON response with an explicit content type.
fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Converts a JSON extraction failure into a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    json_response(StatusCode::BAD_REQUEST, error)
}

/// Converts an engine error into its mapped HTTP response.
fn error_response(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Calculation failed"
    );
    let api_error: ApiErrorResponse = err.into();
    api_error.into_response()
}

/// Handler for POST /discount endpoint.
async fn discount_handler(payload: Result<Json<DiscountRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing discount request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match apply_discount(request.price, request.discount_percent) {
        Ok(discounted_price) => {
            info!(
                correlation_id = %correlation_id,
                price = %request.price,
                discounted_price = %discounted_price,
                "Discount applied"
            );
            json_response(StatusCode::OK, DiscountResponse { discounted_price })
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /tax endpoint.
///
/// Uses the configured default tax rate when the request omits one.
async fn tax_handler(
    State(state): State<AppState>,
    payload: Result<Json<TaxRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing tax request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let tax_rate = request
        .tax_rate
        .unwrap_or_else(|| state.config().default_tax_rate());

    match calculate_tax(request.price, tax_rate, request.is_tax_exempt) {
        Ok(tax) => {
            info!(
                correlation_id = %correlation_id,
                price = %request.price,
                tax_rate = %tax_rate,
                tax = %tax,
                "Tax calculated"
            );
            json_response(StatusCode::OK, TaxResponse { tax })
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /totals endpoint.
///
/// Accepts a cart and returns the calculated totals with an audit trace.
async fn totals_handler(
    State(state): State<AppState>,
    payload: Result<Json<TotalsRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing totals request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let config = state.config();
    let discount_percent = request
        .discount_percent
        .unwrap_or_else(|| config.default_discount_percent());
    let tax_rate = request
        .tax_rate
        .unwrap_or_else(|| config.default_tax_rate());

    match perform_calculation(&request.items, discount_percent, tax_rate) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                items_count = result.item_count,
                total = %result.totals.total,
                duration_us = result.audit_trace.duration_us,
                "Calculation completed successfully"
            );
            json_response(StatusCode::OK, result)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Performs the totals calculation and wraps it in a [`CalculationResult`].
fn perform_calculation(
    items: &[CartItem],
    discount_percent: Decimal,
    tax_rate: Decimal,
) -> Result<CalculationResult, EngineError> {
    let start_time = Instant::now();

    let calculation = calculate_total_with_audit(items, discount_percent, tax_rate, 1)?;

    let duration_us = start_time.elapsed().as_micros() as u64;

    Ok(CalculationResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        item_count: items.len(),
        discount_percent,
        tax_rate,
        totals: calculation.totals,
        audit_trace: AuditTrace {
            steps: calculation.audit_steps,
            duration_us,
        },
    })
}
