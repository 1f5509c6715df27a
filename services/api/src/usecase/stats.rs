use loadout_domain::catalog::Catalog;

use crate::domain::repository::LoadoutRepository;

/// Aggregate counters for the `/stats` endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stats {
    pub total_agents: usize,
    pub total_weapons: usize,
    pub total_loadouts: u64,
    /// Display name of the agent picked most often.
    pub popular_agent: String,
}

// ── GetStats ─────────────────────────────────────────────────────────────────

/// Never fails: store errors degrade to a zero loadout count and the
/// featured (first) catalog agent, with a warning logged.
pub struct GetStatsUseCase<'a, R: LoadoutRepository> {
    pub repo: R,
    pub catalog: &'a Catalog,
}

impl<R: LoadoutRepository> GetStatsUseCase<'_, R> {
    pub async fn execute(&self) -> Stats {
        let total_loadouts = match self.repo.count().await {
            Ok(total) => total,
            Err(e) => {
                tracing::warn!(error = ?e, "loadout count unavailable, reporting 0");
                0
            }
        };

        let popular_agent = match self.repo.most_popular_agent().await {
            Ok(Some(agent_id)) => self
                .catalog
                .find_agent(&agent_id)
                .map(|a| a.name.clone())
                .unwrap_or(agent_id),
            Ok(None) => self.featured_agent(),
            Err(e) => {
                tracing::warn!(error = ?e, "popular agent unavailable");
                self.featured_agent()
            }
        };

        Stats {
            total_agents: self.catalog.agent_count(),
            total_weapons: self.catalog.weapon_count(),
            total_loadouts,
            popular_agent,
        }
    }

    fn featured_agent(&self) -> String {
        self.catalog
            .agents()
            .first()
            .map(|a| a.name.clone())
            .unwrap_or_default()
    }
}
