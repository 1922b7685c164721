// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use onboarding_api::{
    ApiError, ValidateRequest, ValidateResponse, resolve_as_of, validate_request, validate_step,
};
use onboarding_domain::{Snapshot, ValidationPolicy};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use time::{Date, OffsetDateTime};
use tracing::{info, warn};

/// Onboarding Server - HTTP server for the onboarding wizard validation engine
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: String,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// Validation is pure, so the only shared state is the read-only policy.
#[derive(Clone)]
struct AppState {
    /// The limits applied to every request.
    policy: Arc<ValidationPolicy>,
}

/// Query parameters for the step endpoint.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StepQuery {
    /// Validation date (ISO 8601). Defaults to today in UTC.
    as_of: Option<String>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct HealthResponse {
    /// Always `ok` while the server is serving.
    status: String,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        warn!(error = %err, "Rejected request");
        match err {
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
        }
    }
}

fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

/// Handler for GET `/health` endpoint.
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: String::from("ok"),
    })
}

/// Handler for POST `/validate` endpoint.
///
/// Validates the sections selected by the request. An invalid snapshot is
/// still a 200 response; only malformed selectors are errors.
async fn handle_validate(
    State(app_state): State<AppState>,
    Json(req): Json<ValidateRequest>,
) -> Result<Json<ValidateResponse>, HttpError> {
    info!(
        sections = ?req.sections,
        step = ?req.step,
        as_of = ?req.as_of,
        "Handling validate request"
    );

    let response: ValidateResponse = validate_request(&req, &app_state.policy, today())?;
    Ok(Json(response))
}

/// Handler for POST `/steps/{step}/validate` endpoint.
///
/// Validates the section owned by one wizard step. The body is the bare
/// snapshot.
async fn handle_validate_step(
    State(app_state): State<AppState>,
    Path(step): Path<u8>,
    Query(query): Query<StepQuery>,
    Json(snapshot): Json<Snapshot>,
) -> Result<Json<ValidateResponse>, HttpError> {
    info!(step, as_of = ?query.as_of, "Handling validate_step request");

    let as_of: Date = resolve_as_of(query.as_of.as_deref(), today())?;
    let response: ValidateResponse = validate_step(&snapshot, step, &app_state.policy, as_of)?;
    Ok(Json(response))
}

fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .route("/validate", post(handle_validate))
        .route("/steps/{step}/validate", post(handle_validate_step))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Onboarding Server");

    let app_state: AppState = AppState {
        policy: Arc::new(ValidationPolicy::default()),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
