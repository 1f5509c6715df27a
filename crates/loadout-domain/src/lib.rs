//! Domain types shared across loadout services.
//!
//! This crate contains only pure types with no framework dependencies.
//! Import in `usecase/` and `domain/` layers; never in `infra/`.

pub mod agent;
pub mod catalog;
pub mod weapon;
