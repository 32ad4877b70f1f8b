use axum::{extract::State, response::IntoResponse, Json};
use crate::api::AppState;
use crate::error::AppError;
use crate::model::service::{HealthStatus, ServiceInfo};

pub async fn info() -> impl IntoResponse {
    Json(ServiceInfo::current())
}

pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthStatus {
        status: "ok",
        uptime_secs: state.started_at.elapsed().as_secs(),
    })
}

pub async fn not_found() -> AppError {
    AppError::RouteNotFound
}
