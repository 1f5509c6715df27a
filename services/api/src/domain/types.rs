use chrono::{DateTime, Utc};

/// A persisted loadout as returned by the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loadout {
    pub id: i32,
    pub user_id: String,
    pub agent: String,
    /// `None` when no primary weapon was chosen; never `Some("")`.
    pub primary: Option<String>,
    /// `None` when no sidearm was chosen; never `Some("")`.
    pub sidearm: Option<String>,
    pub created: DateTime<Utc>,
}

/// Insert payload for a loadout. The store assigns `id` and `created`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLoadout {
    pub user_id: String,
    pub agent: String,
    pub primary: Option<String>,
    pub sidearm: Option<String>,
}

/// Map an optional weapon slot from the wire: empty or blank means "not chosen".
pub fn weapon_slot(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
