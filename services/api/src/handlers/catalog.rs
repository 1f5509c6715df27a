use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Deserializer, Serialize};

use loadout_domain::agent::Agent;
use loadout_domain::weapon::Weapon;

use crate::state::AppState;

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct AgentsResponse {
    pub agents: Vec<Agent>,
    pub total: usize,
}

#[derive(Serialize)]
pub struct WeaponsResponse {
    pub weapons: Vec<Weapon>,
    pub total: usize,
}

// ── Query params ─────────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct AgentListQuery {
    pub role: Option<String>,
    pub search: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct WeaponListQuery {
    #[serde(rename = "type")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub max_cost: Option<i64>,
    pub search: Option<String>,
}

/// `?maxCost=` with no value means "no limit", same as omitting it.
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => v.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

// ── GET /agents ──────────────────────────────────────────────────────────────

pub async fn get_agents(
    State(state): State<AppState>,
    Query(query): Query<AgentListQuery>,
) -> Json<AgentsResponse> {
    let agents: Vec<Agent> = state
        .catalog
        .list_agents(query.role.as_deref(), query.search.as_deref())
        .into_iter()
        .cloned()
        .collect();
    Json(AgentsResponse {
        total: agents.len(),
        agents,
    })
}

// ── GET /weapons ─────────────────────────────────────────────────────────────

pub async fn get_weapons(
    State(state): State<AppState>,
    Query(query): Query<WeaponListQuery>,
) -> Json<WeaponsResponse> {
    let weapons: Vec<Weapon> = state
        .catalog
        .list_weapons(
            query.category.as_deref(),
            query.max_cost,
            query.search.as_deref(),
        )
        .into_iter()
        .cloned()
        .collect();
    Json(WeaponsResponse {
        total: weapons.len(),
        weapons,
    })
}
