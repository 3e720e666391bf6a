use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use catiq_core::{
    agents::{AgentStatusReport, HealthReport},
    analysis::DisasterAnalysis,
    engine::PipelineEngine,
    error::PipelineError,
    event::DisasterEvent,
    view::{ClaimsByEventView, RevenueDashboardView, SimulationView},
};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

type SharedEngine = Arc<PipelineEngine>;

/// Build the API router around a shared engine.
pub fn router(engine: SharedEngine) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/agents/status", get(agent_status))
        .route("/api/disasters/active", get(active_disasters))
        .route("/api/disasters/{event_id}/analysis", get(disaster_analysis))
        .route("/api/claims/event/{event_id}", get(event_claims))
        .route("/api/revenue/dashboard", get(revenue_dashboard))
        .route("/api/simulate/new-disaster", post(simulate_new_disaster))
        .layer(CorsLayer::permissive())
        .with_state(engine)
}

/// Engine failure rendered as `{ "error": ... }`.
#[derive(Debug)]
pub struct ApiError(pub PipelineError);

impl From<PipelineError> for ApiError {
    fn from(err: PipelineError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = if self.0.is_invalid_argument() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        log::warn!("Request failed ({status}): {}", self.0);
        let body = serde_json::json!({ "error": self.0.to_string() });
        (status, Json(body)).into_response()
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self(PipelineError::InvalidArgument {
            name: "query",
            reason: rejection.body_text(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct ClaimsQuery {
    count: Option<i64>,
}

async fn health_check(State(engine): State<SharedEngine>) -> Json<HealthReport> {
    Json(engine.health())
}

async fn agent_status(State(engine): State<SharedEngine>) -> Json<AgentStatusReport> {
    Json(engine.agent_status())
}

async fn active_disasters(State(engine): State<SharedEngine>) -> Json<Vec<DisasterEvent>> {
    Json(engine.active_disasters())
}

async fn disaster_analysis(
    State(engine): State<SharedEngine>,
    Path(event_id): Path<String>,
) -> Json<DisasterAnalysis> {
    Json(engine.disaster_analysis(&event_id))
}

async fn event_claims(
    State(engine): State<SharedEngine>,
    Path(event_id): Path<String>,
    query: Result<Query<ClaimsQuery>, QueryRejection>,
) -> Result<Json<ClaimsByEventView>, ApiError> {
    let Query(query) = query?;
    let view = engine.claims_for_event(&event_id, query.count)?;
    log::info!(
        "Claims for {event_id}: {} total, {} auto-approved",
        view.totals.total_claims,
        view.totals.auto_approved
    );
    Ok(Json(view))
}

async fn revenue_dashboard(State(engine): State<SharedEngine>) -> Json<RevenueDashboardView> {
    Json(engine.revenue_dashboard())
}

async fn simulate_new_disaster(
    State(engine): State<SharedEngine>,
) -> Result<Json<SimulationView>, ApiError> {
    Ok(Json(engine.simulate_new_disaster()?))
}
