use crate::domain::repository::LoadoutRepository;
use crate::domain::types::{Loadout, NewLoadout, weapon_slot};
use crate::error::ApiError;

// ── CreateLoadout ────────────────────────────────────────────────────────────

pub struct CreateLoadoutInput {
    pub agent: String,
    pub primary: Option<String>,
    pub sidearm: Option<String>,
}

pub struct CreateLoadoutUseCase<R: LoadoutRepository> {
    pub repo: R,
}

impl<R: LoadoutRepository> CreateLoadoutUseCase<R> {
    pub async fn execute(
        &self,
        user_id: &str,
        input: CreateLoadoutInput,
    ) -> Result<Loadout, ApiError> {
        let agent = input.agent.trim();
        if agent.is_empty() {
            return Err(ApiError::MissingAgent);
        }
        let loadout = NewLoadout {
            user_id: user_id.to_owned(),
            agent: agent.to_owned(),
            primary: weapon_slot(input.primary),
            sidearm: weapon_slot(input.sidearm),
        };
        let created = self.repo.create(&loadout).await?;
        tracing::info!(user_id, loadout_id = created.id, "loadout created");
        Ok(created)
    }
}

// ── GetLoadouts ──────────────────────────────────────────────────────────────

pub struct GetLoadoutsUseCase<R: LoadoutRepository> {
    pub repo: R,
}

impl<R: LoadoutRepository> GetLoadoutsUseCase<R> {
    pub async fn execute(&self, user_id: &str) -> Result<Vec<Loadout>, ApiError> {
        self.repo.list_by_user(user_id).await
    }
}
