use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::state::AppState;
use crate::usecase::stats::GetStatsUseCase;

/// Version string reported by `/health`.
pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
    #[serde(serialize_with = "loadout_core::serde::to_rfc3339_ms")]
    pub timestamp: DateTime<Utc>,
    pub version: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_agents: usize,
    pub total_weapons: usize,
    pub total_loadouts: u64,
    pub popular_agent: String,
}

// ── GET /health ──────────────────────────────────────────────────────────────

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        message: "Loadout API is running",
        timestamp: Utc::now(),
        version: API_VERSION,
    })
}

// ── GET /stats ───────────────────────────────────────────────────────────────

pub async fn get_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let usecase = GetStatsUseCase {
        repo: state.loadout_repo(),
        catalog: &state.catalog,
    };
    let stats = usecase.execute().await;
    Json(StatsResponse {
        total_agents: stats.total_agents,
        total_weapons: stats.total_weapons,
        total_loadouts: stats.total_loadouts,
        popular_agent: stats.popular_agent,
    })
}
