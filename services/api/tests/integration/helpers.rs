use std::sync::Arc;

use axum_test::{TestRequest, TestServer};
use sea_orm::{ConnectionTrait, DatabaseConnection};

use loadout_api::infra::db::{DbLoadoutRepository, connect, ensure_schema};
use loadout_api::router::build_router;
use loadout_api::state::AppState;
use loadout_domain::catalog::Catalog;
use loadout_testing::auth::MockAuth;

/// Fresh in-memory SQLite store with the schema applied.
///
/// One pooled connection: every connection to `sqlite::memory:` opens its own
/// empty database.
pub async fn test_db() -> DatabaseConnection {
    let db = connect("sqlite::memory:", 1).await.unwrap();
    ensure_schema(&db).await.unwrap();
    db
}

pub async fn test_repo() -> DbLoadoutRepository {
    DbLoadoutRepository { db: test_db().await }
}

pub fn test_state(db: DatabaseConnection) -> AppState {
    AppState {
        db,
        catalog: Arc::new(Catalog::builtin()),
    }
}

pub fn test_server(db: DatabaseConnection) -> TestServer {
    TestServer::new(build_router(test_state(db))).unwrap()
}

/// Drop the backing table so every loadout query fails.
pub async fn break_store(db: &DatabaseConnection) {
    db.execute_unprepared("DROP TABLE loadouts").await.unwrap();
}

pub fn with_auth(mut request: TestRequest, auth: &MockAuth) -> TestRequest {
    for (name, value) in auth.headers().iter() {
        request = request.add_header(name.clone(), value.clone());
    }
    request
}
