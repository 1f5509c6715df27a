#![allow(async_fn_in_trait)]

use crate::domain::types::{Loadout, NewLoadout};
use crate::error::ApiError;

/// Repository for user-owned loadouts.
pub trait LoadoutRepository: Send + Sync {
    /// Insert a loadout and return it with the store-assigned id and timestamp.
    async fn create(&self, loadout: &NewLoadout) -> Result<Loadout, ApiError>;

    /// All loadouts owned by `user_id`, newest first, ties by id descending.
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Loadout>, ApiError>;

    /// Total number of stored loadouts across all users.
    async fn count(&self) -> Result<u64, ApiError>;

    /// Agent id chosen by the most loadouts, ties by agent id ascending.
    async fn most_popular_agent(&self) -> Result<Option<String>, ApiError>;
}
