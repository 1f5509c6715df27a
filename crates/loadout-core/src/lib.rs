//! Service plumbing shared by loadout HTTP services.

pub mod middleware;
pub mod serde;
pub mod tracing;
