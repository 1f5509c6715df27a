use sea_orm::entity::prelude::*;
use sea_orm::sea_query::Expr;

/// A saved agent + weapon selection owned by one user.
///
/// `id` and `created` are assigned on insert; the weapon slots are `NULL`
/// when the user left them empty.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "loadouts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: String,
    pub agent: String,
    pub primary_weapon: Option<String>,
    pub sidearm: Option<String>,
    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub created: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
