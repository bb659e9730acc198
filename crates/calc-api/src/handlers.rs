//! Request handlers: parse path operands, call the core, render plain text.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use serde::Serialize;

use calc_core::parser;

use crate::AppState;
use crate::error::ApiResult;

/// Greeting route.
pub async fn hello() -> &'static str {
    "Hello from The Calculator!\n"
}

/// Health payload for liveness probes.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub uptime_seconds: i64,
    pub version: &'static str,
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub async fn add(
    State(state): State<Arc<AppState>>,
    Path((a, b)): Path<(String, String)>,
) -> ApiResult<String> {
    let (x, y) = (parser::parse(&a)?, parser::parse(&b)?);
    Ok(state.calculator.add(x, y)?.to_string())
}

pub async fn subtract(
    State(state): State<Arc<AppState>>,
    Path((a, b)): Path<(String, String)>,
) -> ApiResult<String> {
    let (x, y) = (parser::parse(&a)?, parser::parse(&b)?);
    Ok(state.calculator.subtract(x, y)?.to_string())
}

pub async fn multiply(
    State(state): State<Arc<AppState>>,
    Path((a, b)): Path<(String, String)>,
) -> ApiResult<String> {
    let (x, y) = (parser::parse(&a)?, parser::parse(&b)?);
    Ok(state.calculator.multiply(x, y)?.to_string())
}

pub async fn divide(
    State(state): State<Arc<AppState>>,
    Path((a, b)): Path<(String, String)>,
) -> ApiResult<String> {
    let (x, y) = (parser::parse(&a)?, parser::parse(&b)?);
    Ok(state.calculator.divide(x, y)?.to_string())
}

pub async fn power(
    State(state): State<Arc<AppState>>,
    Path((a, b)): Path<(String, String)>,
) -> ApiResult<String> {
    let (x, y) = (parser::parse(&a)?, parser::parse(&b)?);
    Ok(state.calculator.power(x, y)?.to_string())
}

pub async fn sqrt(
    State(state): State<Arc<AppState>>,
    Path(a): Path<String>,
) -> ApiResult<String> {
    let x = parser::parse(&a)?;
    Ok(state.calculator.sqrt(x)?.to_string())
}

pub async fn log10(
    State(state): State<Arc<AppState>>,
    Path(a): Path<String>,
) -> ApiResult<String> {
    let x = parser::parse(&a)?;
    Ok(state.calculator.log10(x)?.to_string())
}
