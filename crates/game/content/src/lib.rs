//! Data-driven content for the spell rules.
//!
//! Loaders read RON/TOML files from a data directory:
//! - Tunable rule parameters (TOML, [`hourglass_core::GameConfig`])
//! - Level layouts (RON, [`hourglass_core::GridMap`])
//! - Scenarios placing the player, monsters, and remains (RON)
//!
//! Content only seeds the initial state and the static oracles; nothing here is
//! consulted once spells start resolving.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, LoadResult, MapLoader, MonsterSpec, PlayerSpec, RemainsSpec,
    Scenario, ScenarioLoader,
};
