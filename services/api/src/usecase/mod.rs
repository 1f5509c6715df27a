pub mod loadout;
pub mod stats;
