//! Route table

use std::path::Path;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::handlers::{get_plan, health_check, list_plans, pricing_content};
use crate::state::AppState;

/// Endpoint summary printed at startup
pub const ENDPOINTS: &[(&str, &str)] = &[
    ("GET  /health", "Health check"),
    ("GET  /api/plans", "Plan cards (?period=monthly|annually)"),
    ("GET  /api/plans/{name}", "Single plan card"),
    ("GET  /api/pricing/content", "Section copy and comparison table"),
];

pub fn build_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    // Read-only GET API
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/plans", get(list_plans))
        .route("/api/plans/{name}", get(get_plan))
        .route("/api/pricing/content", get(pricing_content))
        // Static files (WASM frontend)
        .fallback_service(ServeDir::new(static_dir.as_ref()))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use pricing_core::{CallToAction, Plan, PlanCatalog, PlanPrice};
    use serde_json::Value;
    use tower::ServiceExt;

    fn app() -> Router {
        build_router(AppState::new(PlanCatalog::builtin()), "/nonexistent-static")
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    fn visible_prices(body: &Value) -> Vec<String> {
        body["plans"]
            .as_array()
            .unwrap()
            .iter()
            .map(|plan| {
                let price = &plan["price"];
                match price["kind"].as_str().unwrap() {
                    "single" => price["text"].as_str().unwrap().to_string(),
                    _ if price["secondary_visible"].as_bool().unwrap() => {
                        price["secondary"].as_str().unwrap().to_string()
                    }
                    _ => price["primary"].as_str().unwrap().to_string(),
                }
            })
            .collect()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_json(app(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["plans"], 3);
    }

    #[tokio::test]
    async fn test_plans_default_to_monthly() {
        let (status, body) = get_json(app(), "/api/plans").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["period"], "monthly");
        assert_eq!(visible_prices(&body), vec!["$0", "$7", "$199"]);
    }

    #[tokio::test]
    async fn test_plans_annually() {
        let (status, body) = get_json(app(), "/api/plans?period=annually").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["period"], "annually");
        assert_eq!(visible_prices(&body), vec!["$0", "$70", "$1,990"]);
        assert_eq!(body["plans"][0]["price"]["kind"], "single");
        assert_eq!(body["plans"][2]["featured"], true);
    }

    #[tokio::test]
    async fn test_period_is_case_insensitive() {
        for uri in ["/api/plans?period=ANNUALLY", "/api/plans?period=Annually%20"] {
            let (status, body) = get_json(app(), uri).await;
            assert_eq!(status, StatusCode::OK, "{}", uri);
            assert_eq!(body["period"], "annually");
            assert_eq!(visible_prices(&body), vec!["$0", "$70", "$1,990"]);
        }
    }

    #[tokio::test]
    async fn test_unknown_period_rejected() {
        let (status, body) = get_json(app(), "/api/plans?period=weekly").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "UNKNOWN_PERIOD");
        assert!(body["error"].as_str().unwrap().contains("weekly"));

        let (status, body) = get_json(app(), "/api/plans/VIP?period=yearly").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "UNKNOWN_PERIOD");
    }

    #[tokio::test]
    async fn test_single_plan() {
        let (status, body) = get_json(app(), "/api/plans/Investor?period=annually").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["button"]["aria_label"], "Get started with the Investor plan for $70");
        assert_eq!(body["button"]["href"], "/register");

        let (status, body) = get_json(app(), "/api/plans/Enterprise").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "PLAN_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_injected_catalog() {
        let catalog = PlanCatalog::new(vec![Plan::new(
            "Only",
            PlanPrice::new("R$ 10", "R$ 100"),
            "Single tier",
            CallToAction::new("Assinar", "https://example.com/assinar"),
        )]);
        let app = build_router(AppState::new(catalog), "/nonexistent-static");

        let (_, body) = get_json(app, "/api/plans?period=annually").await;
        assert_eq!(visible_prices(&body), vec!["R$ 100"]);
    }

    #[tokio::test]
    async fn test_content() {
        let (status, body) = get_json(app(), "/api/pricing/content").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["copy"]["title"], "Modelo de Negócio");
        assert_eq!(body["table"]["rows"].as_array().unwrap().len(), 2);
        assert_eq!(body["table"]["columns"][0], "Segmento");
    }

    #[tokio::test]
    async fn test_missing_static_file() {
        let (status, _) = get_json(app(), "/nope.js").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
