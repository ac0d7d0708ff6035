use super::models::AppState;
use crate::models::{HealthResponse, ProvidersResponse};
use axum::{extract::State, response::Json};
use linkdrop_models::ProviderMode;

pub async fn list_providers(State(state): State<AppState>) -> Json<ProvidersResponse> {
    Json(ProvidersResponse {
        modes: ProviderMode::all_names()
            .into_iter()
            .map(str::to_string)
            .collect(),
        auto_order: state
            .uploader
            .auto_order()
            .iter()
            .map(|kind| kind.name().to_string())
            .collect(),
        default_mode: state.default_mode.to_string(),
    })
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
