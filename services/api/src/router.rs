use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use loadout_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::{
    catalog::{get_agents, get_weapons},
    loadout::{create_loadout, get_loadouts},
    meta::{get_stats, health},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Meta
        .route("/health", get(health))
        .route("/stats", get(get_stats))
        // Catalog
        .route("/agents", get(get_agents))
        .route("/weapons", get(get_weapons))
        // Loadouts
        .route("/loadouts", post(create_loadout))
        .route("/loadouts", get(get_loadouts))
        .with_state(state)
        .layer(propagate_request_id_layer())
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
}
