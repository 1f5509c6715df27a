pub mod catalog;
pub mod loadout;
pub mod meta;
