//! Agent domain types.

use serde::{Deserialize, Serialize};

/// Number of abilities every agent carries.
pub const ABILITY_COUNT: usize = 4;

/// Tactical role of an agent.
///
/// Wire format: the capitalized role name (`"Duelist"`, `"Initiator"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentRole {
    Duelist,
    Initiator,
    Sentinel,
    Controller,
}

impl AgentRole {
    /// Wire name of the role. Role filters compare against this exactly.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Duelist => "Duelist",
            Self::Initiator => "Initiator",
            Self::Sentinel => "Sentinel",
            Self::Controller => "Controller",
        }
    }
}

/// A playable agent from the reference catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub id: String,
    pub name: String,
    pub role: AgentRole,
    pub description: String,
    /// Ability names in cast order.
    pub abilities: [String; ABILITY_COUNT],
    pub image_url: String,
}

impl Agent {
    /// Case-insensitive substring match on name or description.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches_search(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}
