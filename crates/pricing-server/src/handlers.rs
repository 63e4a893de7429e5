//! HTTP Handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use pricing_core::{BillingPeriod, ComparisonTable, PlanCardView, PricingError, SectionCopy};

use crate::state::AppState;

// ============================================================================
// Request / Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub plans: usize,
}

/// `?period=` as sent; parsed with `BillingPeriod::from_str` so casing and
/// surrounding whitespace are accepted the same way everywhere
#[derive(Debug, Default, Deserialize)]
pub struct PeriodQuery {
    #[serde(default)]
    pub period: Option<String>,
}

impl PeriodQuery {
    fn period(&self) -> Result<BillingPeriod, ApiError> {
        match self.period.as_deref() {
            None => Ok(BillingPeriod::default()),
            Some(raw) => raw.parse().map_err(|e: PricingError| {
                tracing::debug!(period = %raw, "rejected billing period");
                error_response(StatusCode::BAD_REQUEST, e.user_message(), "UNKNOWN_PERIOD")
            }),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PlansResponse {
    pub period: BillingPeriod,
    pub plans: Vec<PlanCardView>,
}

#[derive(Debug, Serialize)]
pub struct ContentResponse {
    pub copy: SectionCopy,
    pub table: ComparisonTable,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn error_response(status: StatusCode, error: String, code: &str) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error,
            code: code.into(),
        }),
    )
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        plans: state.catalog.len(),
    })
}

/// All plan cards for a billing period (Monthly unless `?period=` says otherwise)
pub async fn list_plans(
    State(state): State<AppState>,
    Query(query): Query<PeriodQuery>,
) -> Result<Json<PlansResponse>, ApiError> {
    let period = query.period()?;
    Ok(Json(PlansResponse {
        period,
        plans: PlanCardView::build_all(&state.catalog, period),
    }))
}

/// A single plan card by name
pub async fn get_plan(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<PeriodQuery>,
) -> Result<Json<PlanCardView>, ApiError> {
    let period = query.period()?;
    match state.catalog.get(&name) {
        Some(plan) => Ok(Json(PlanCardView::project(plan, period))),
        None => {
            tracing::debug!(plan = %name, "plan not found");
            Err(error_response(
                StatusCode::NOT_FOUND,
                format!("No plan named '{}'", name),
                "PLAN_NOT_FOUND",
            ))
        }
    }
}

/// Section copy and comparison table
pub async fn pricing_content() -> Json<ContentResponse> {
    Json(ContentResponse {
        copy: SectionCopy::standard(),
        table: ComparisonTable::standard(),
    })
}
