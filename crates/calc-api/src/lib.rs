#![deny(warnings)]
//! HTTP boundary for the calculator service.
//!
//! Routes textual operands to the validated arithmetic core and renders
//! every result as a `text/plain` body: `8` for exact integer results,
//! `6.0` for float ones. Domain failures from the core map to
//! `400 Bad Request` with the failure message as the body.

pub mod config;
pub mod error;
pub mod handlers;
pub mod permissions;

use std::sync::Arc;

use axum::{Router, routing::get};
use chrono::{DateTime, Utc};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use calc_core::Calculator;

use crate::config::CalcConfig;
use crate::permissions::StaticPermissionChecker;

/// Shared application state: one stateless calculator serves all requests.
pub struct AppState {
    pub start_time: DateTime<Utc>,
    pub calculator: Calculator,
}

impl AppState {
    fn new(calculator: Calculator) -> Self {
        Self { start_time: Utc::now(), calculator }
    }

    /// Seconds since the service started, for the health payload.
    pub fn uptime_seconds(&self) -> i64 {
        (Utc::now() - self.start_time).num_seconds()
    }
}

/// Builds the service router from configuration.
///
/// The permission collaborator is constructed here and injected into the
/// calculator, so tests can exercise denial paths purely through config.
pub fn create_app(config: &CalcConfig) -> Router {
    let checker = StaticPermissionChecker::new(config.permissions.allow_multiply);
    let state = Arc::new(AppState::new(Calculator::new(Arc::new(checker))));

    info!(
        allow_multiply = config.permissions.allow_multiply,
        "Building calculator router"
    );

    Router::new()
        .route("/", get(handlers::hello))
        .route("/health", get(handlers::health))
        .route("/calc/add/{a}/{b}", get(handlers::add))
        .route("/calc/subtract/{a}/{b}", get(handlers::subtract))
        // Legacy route spelling, kept so existing clients keep working.
        .route("/calc/substract/{a}/{b}", get(handlers::subtract))
        .route("/calc/multiply/{a}/{b}", get(handlers::multiply))
        .route("/calc/divide/{a}/{b}", get(handlers::divide))
        .route("/calc/power/{a}/{b}", get(handlers::power))
        .route("/calc/sqrt/{a}", get(handlers::sqrt))
        .route("/calc/log10/{a}", get(handlers::log10))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
