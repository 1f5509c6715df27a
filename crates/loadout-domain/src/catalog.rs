//! Fixed reference catalog of agents and weapons.
//!
//! Built once at startup and shared read-only afterwards. Every filter treats
//! an empty string the same as an absent one, and results always keep
//! declaration order.

use crate::agent::{Agent, AgentRole};
use crate::weapon::{Weapon, WeaponCategory};

/// Immutable agent and weapon tables with filtered lookups.
#[derive(Debug, Clone)]
pub struct Catalog {
    agents: Vec<Agent>,
    weapons: Vec<Weapon>,
}

impl Catalog {
    pub fn new(agents: Vec<Agent>, weapons: Vec<Weapon>) -> Self {
        Self { agents, weapons }
    }

    /// The seeded demo catalog served by the API.
    pub fn builtin() -> Self {
        Self::new(builtin_agents(), builtin_weapons())
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn weapons(&self) -> &[Weapon] {
        &self.weapons
    }

    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }

    pub fn weapon_count(&self) -> usize {
        self.weapons.len()
    }

    pub fn find_agent(&self, id: &str) -> Option<&Agent> {
        self.agents.iter().find(|a| a.id == id)
    }

    /// Agents whose role equals `role` exactly and whose name or description
    /// contains `search`, ignoring case.
    pub fn list_agents(&self, role: Option<&str>, search: Option<&str>) -> Vec<&Agent> {
        let role = non_empty(role);
        let needle = non_empty(search).map(str::to_lowercase);

        self.agents
            .iter()
            .filter(|a| role.is_none_or(|r| a.role.as_str() == r))
            .filter(|a| needle.as_deref().is_none_or(|q| a.matches_search(q)))
            .collect()
    }

    /// Weapons matching `category` exactly, costing at most `max_cost`, and
    /// whose name contains `search`, ignoring case.
    ///
    /// A `max_cost` of zero or below places no limit.
    pub fn list_weapons(
        &self,
        category: Option<&str>,
        max_cost: Option<i64>,
        search: Option<&str>,
    ) -> Vec<&Weapon> {
        let category = non_empty(category);
        let max_cost = max_cost.filter(|c| *c > 0);
        let needle = non_empty(search).map(str::to_lowercase);

        self.weapons
            .iter()
            .filter(|w| category.is_none_or(|c| w.category.as_str() == c))
            .filter(|w| max_cost.is_none_or(|max| i64::from(w.cost) <= max))
            .filter(|w| {
                needle
                    .as_deref()
                    .is_none_or(|q| w.name.to_lowercase().contains(q))
            })
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

// ── Seed data ────────────────────────────────────────────────────────────────

const AGENT_IMAGE_BASE: &str = "https://images.contentstack.io/v3/assets/bltb6530b271fddd0b1";

fn agent(
    id: &str,
    name: &str,
    role: AgentRole,
    description: &str,
    abilities: [&str; 4],
    image_path: &str,
) -> Agent {
    Agent {
        id: id.to_owned(),
        name: name.to_owned(),
        role,
        description: description.to_owned(),
        abilities: abilities.map(str::to_owned),
        image_url: format!("{AGENT_IMAGE_BASE}/{image_path}"),
    }
}

fn builtin_agents() -> Vec<Agent> {
    vec![
        agent(
            "jett",
            "Jett",
            AgentRole::Duelist,
            "Jett's agile and evasive fighting style lets her take risks no one else can.",
            ["Updraft", "Tailwind", "Cloudburst", "Blade Storm"],
            "blt5ebf40a2dfaffb4e/5f21297f5f0cb0629a5bfcb9/V_AGENTS_587x900_Jett.png",
        ),
        agent(
            "sova",
            "Sova",
            AgentRole::Initiator,
            "Sova tracks, finds, and eliminates enemies with ruthless efficiency.",
            ["Owl Drone", "Shock Bolt", "Recon Bolt", "Hunter's Fury"],
            "blt181ad63adc9976a4/5f2129b2e0999b628bc8eb4e/V_AGENTS_587x900_Sova.png",
        ),
        agent(
            "sage",
            "Sage",
            AgentRole::Sentinel,
            "Sage creates safety for herself and her team wherever she goes.",
            ["Barrier Orb", "Slow Orb", "Healing Orb", "Resurrection"],
            "blt2a1c7b18aa5b1a6b/5f21297f078a8b626859f4a8/V_AGENTS_587x900_Sage.png",
        ),
        agent(
            "omen",
            "Omen",
            AgentRole::Controller,
            "Omen hunts in the shadows. He renders enemies blind, teleports across the field.",
            ["Shrouded Step", "Paranoia", "Dark Cover", "From the Shadows"],
            "blt94dd043bce7fc9f2/5f21297f2ef66062fb6aa96c/V_AGENTS_587x900_Omen.png",
        ),
    ]
}

fn weapon(
    id: &str,
    name: &str,
    category: WeaponCategory,
    cost: u32,
    damage: u32,
    accuracy: u8,
) -> Weapon {
    Weapon {
        id: id.to_owned(),
        name: name.to_owned(),
        category,
        cost,
        damage,
        accuracy,
        image_url: String::new(),
    }
}

fn builtin_weapons() -> Vec<Weapon> {
    use WeaponCategory::{Primary, Sidearm};

    vec![
        weapon("classic", "Classic", Sidearm, 0, 78, 85),
        weapon("sheriff", "Sheriff", Sidearm, 800, 159, 79),
        weapon("spectre", "Spectre", Primary, 1600, 78, 74),
        weapon("vandal", "Vandal", Primary, 2900, 160, 73),
        weapon("phantom", "Phantom", Primary, 2900, 156, 79),
        weapon("operator", "Operator", Primary, 4700, 255, 76),
    ]
}
