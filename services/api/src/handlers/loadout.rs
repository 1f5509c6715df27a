use axum::{Json, extract::State, http::StatusCode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use loadout_auth_types::identity::BearerIdentity;

use crate::domain::types::Loadout;
use crate::error::ApiError;
use crate::state::AppState;
use crate::usecase::loadout::{CreateLoadoutInput, CreateLoadoutUseCase, GetLoadoutsUseCase};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadoutResponse {
    pub id: i32,
    pub user_id: String,
    pub agent: String,
    pub primary: Option<String>,
    pub sidearm: Option<String>,
    #[serde(serialize_with = "loadout_core::serde::to_rfc3339_ms")]
    pub created: DateTime<Utc>,
}

impl From<Loadout> for LoadoutResponse {
    fn from(loadout: Loadout) -> Self {
        Self {
            id: loadout.id,
            user_id: loadout.user_id,
            agent: loadout.agent,
            primary: loadout.primary,
            sidearm: loadout.sidearm,
            created: loadout.created,
        }
    }
}

#[derive(Serialize)]
pub struct LoadoutsResponse {
    pub loadouts: Vec<LoadoutResponse>,
    pub total: usize,
}

#[derive(Serialize)]
pub struct CreateLoadoutResponse {
    pub id: i32,
    pub message: &'static str,
}

// ── POST /loadouts ───────────────────────────────────────────────────────────

/// A missing `agent` is reported by the use case, not by JSON decoding.
#[derive(Deserialize)]
pub struct CreateLoadoutRequest {
    #[serde(default)]
    pub agent: String,
    #[serde(default)]
    pub primary: Option<String>,
    #[serde(default)]
    pub sidearm: Option<String>,
}

pub async fn create_loadout(
    identity: BearerIdentity,
    State(state): State<AppState>,
    Json(body): Json<CreateLoadoutRequest>,
) -> Result<(StatusCode, Json<CreateLoadoutResponse>), ApiError> {
    let usecase = CreateLoadoutUseCase {
        repo: state.loadout_repo(),
    };
    let loadout = usecase
        .execute(
            &identity.user_id,
            CreateLoadoutInput {
                agent: body.agent,
                primary: body.primary,
                sidearm: body.sidearm,
            },
        )
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(CreateLoadoutResponse {
            id: loadout.id,
            message: "Loadout saved successfully",
        }),
    ))
}

// ── GET /loadouts ────────────────────────────────────────────────────────────

pub async fn get_loadouts(
    identity: BearerIdentity,
    State(state): State<AppState>,
) -> Result<Json<LoadoutsResponse>, ApiError> {
    let usecase = GetLoadoutsUseCase {
        repo: state.loadout_repo(),
    };
    let loadouts: Vec<LoadoutResponse> = usecase
        .execute(&identity.user_id)
        .await?
        .into_iter()
        .map(LoadoutResponse::from)
        .collect();
    Ok(Json(LoadoutsResponse {
        total: loadouts.len(),
        loadouts,
    }))
}
