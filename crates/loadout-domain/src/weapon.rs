//! Weapon domain types.

use serde::{Deserialize, Serialize};

/// Buy-menu slot a weapon occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponCategory {
    Primary,
    Sidearm,
}

impl WeaponCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "Primary",
            Self::Sidearm => "Sidearm",
        }
    }
}

/// A purchasable weapon from the reference catalog.
///
/// `category` is exposed as `type` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Weapon {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub category: WeaponCategory,
    /// Price in credits, never negative.
    pub cost: u32,
    pub damage: u32,
    /// Accuracy percentage, 0–100.
    pub accuracy: u8,
    pub image_url: String,
}
