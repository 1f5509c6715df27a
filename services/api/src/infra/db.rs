use std::time::Duration;

use anyhow::Context as _;
use chrono::{SubsecRound as _, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectOptions, ConnectionTrait, Database,
    DatabaseConnection, EntityTrait, FromQueryResult, PaginatorTrait, QueryFilter, QueryOrder,
    Schema, Statement, sea_query::Index,
};

use loadout_api_schema::loadouts;

use crate::domain::repository::LoadoutRepository;
use crate::domain::types::{Loadout, NewLoadout};
use crate::error::ApiError;

// ── Connection & schema ──────────────────────────────────────────────────────

/// Open a pooled connection to `url`.
pub async fn connect(url: &str, max_connections: u32) -> anyhow::Result<DatabaseConnection> {
    let mut opts = ConnectOptions::new(url.to_owned());
    opts.max_connections(max_connections)
        .connect_timeout(Duration::from_secs(5))
        .sqlx_logging(false);
    Database::connect(opts)
        .await
        .with_context(|| format!("connect to database (max_connections={max_connections})"))
}

/// Create the `loadouts` table and its listing index when absent.
///
/// Idempotent; runs on every startup.
pub async fn ensure_schema(db: &DatabaseConnection) -> anyhow::Result<()> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut table = schema.create_table_from_entity(loadouts::Entity);
    table.if_not_exists();
    db.execute(backend.build(&table))
        .await
        .context("create loadouts table")?;

    let index = Index::create()
        .if_not_exists()
        .name("idx_loadouts_user_id_created")
        .table(loadouts::Entity)
        .col(loadouts::Column::UserId)
        .col(loadouts::Column::Created)
        .to_owned();
    db.execute(backend.build(&index))
        .await
        .context("create loadouts listing index")?;
    Ok(())
}

// ── Loadout repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbLoadoutRepository {
    pub db: DatabaseConnection,
}

impl LoadoutRepository for DbLoadoutRepository {
    async fn create(&self, loadout: &NewLoadout) -> Result<Loadout, ApiError> {
        // Microsecond precision matches timestamptz, so the value reads back unchanged.
        let created = Utc::now().trunc_subsecs(6);
        let model = loadouts::ActiveModel {
            user_id: Set(loadout.user_id.clone()),
            agent: Set(loadout.agent.clone()),
            primary_weapon: Set(loadout.primary.clone()),
            sidearm: Set(loadout.sidearm.clone()),
            created: Set(created),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create loadout")?;
        Ok(loadout_from_model(model))
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Loadout>, ApiError> {
        let models = loadouts::Entity::find()
            .filter(loadouts::Column::UserId.eq(user_id))
            .order_by_desc(loadouts::Column::Created)
            .order_by_desc(loadouts::Column::Id)
            .all(&self.db)
            .await
            .context("list loadouts by user")?;
        Ok(models.into_iter().map(loadout_from_model).collect())
    }

    async fn count(&self) -> Result<u64, ApiError> {
        let total = loadouts::Entity::find()
            .count(&self.db)
            .await
            .context("count loadouts")?;
        Ok(total)
    }

    async fn most_popular_agent(&self) -> Result<Option<String>, ApiError> {
        #[derive(Debug, FromQueryResult)]
        struct AgentUsageRow {
            agent: String,
        }

        let row = AgentUsageRow::find_by_statement(Statement::from_string(
            self.db.get_database_backend(),
            r#"
            SELECT agent, COUNT(*) AS uses
            FROM loadouts
            GROUP BY agent
            ORDER BY uses DESC, agent ASC
            LIMIT 1
            "#,
        ))
        .one(&self.db)
        .await
        .context("find most popular agent")?;
        Ok(row.map(|r| r.agent))
    }
}

fn loadout_from_model(model: loadouts::Model) -> Loadout {
    Loadout {
        id: model.id,
        user_id: model.user_id,
        agent: model.agent,
        primary: model.primary_weapon,
        sidearm: model.sidearm,
        created: model.created,
    }
}
