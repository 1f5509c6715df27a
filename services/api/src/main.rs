use std::sync::Arc;

use tracing::info;

use loadout_api::config::ApiConfig;
use loadout_api::infra::db::{connect, ensure_schema};
use loadout_api::router::build_router;
use loadout_api::state::AppState;
use loadout_core::tracing::init_tracing;
use loadout_domain::catalog::Catalog;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = ApiConfig::from_env();

    let db = connect(&config.database_url, config.database_max_connections)
        .await
        .expect("failed to connect to database");
    ensure_schema(&db)
        .await
        .expect("failed to prepare database schema");

    let catalog = Catalog::builtin();
    info!(
        agents = catalog.agent_count(),
        weapons = catalog.weapon_count(),
        "catalog loaded"
    );

    let state = AppState {
        db,
        catalog: Arc::new(catalog),
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.api_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("loadout api listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
