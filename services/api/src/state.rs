use std::sync::Arc;

use sea_orm::DatabaseConnection;

use loadout_domain::catalog::Catalog;

use crate::infra::db::DbLoadoutRepository;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn loadout_repo(&self) -> DbLoadoutRepository {
        DbLoadoutRepository {
            db: self.db.clone(),
        }
    }
}
