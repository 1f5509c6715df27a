//! Auth types shared across loadout services.
//!
//! Provides the development credential resolver and the `BearerIdentity` extractor.

pub mod identity;
