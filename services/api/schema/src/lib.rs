pub mod loadouts;
