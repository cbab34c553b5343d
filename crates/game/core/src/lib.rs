//! Deterministic spell-effect rules for a turn-based dungeon crawler.
//!
//! `hourglass-core` owns the player's self-enchantment handlers, the job
//! roster, and the momentum replay engine that releases damage stored on
//! monsters while time is stopped. Every operation takes the mutable
//! [`state::GameState`] plus a borrowed [`env::SpellEnv`] bundling the
//! read-only oracles and side-effecting collaborators, so nothing reaches for a
//! process-wide player singleton.
pub mod config;
pub mod env;
pub mod error;
pub mod job;
pub mod spells;
pub mod stasis;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;

pub use config::GameConfig;
pub use env::{
    BresenhamRay, CollisionResolver, DeathAttribution, Dice, DirectShapeshifter, GridMap,
    LineOfSight, LocationEffects, MapDimensions, MapOracle, NoCollision, NoLocationEffects,
    PcgRng, RayOracle, RayWalk, RngOracle, Shapeshifter, SpellEnv, StaticTile, TerrainKind,
    VisionOracle, compute_seed,
};
pub use error::{ErrorContext, ErrorSeverity, GameError};
pub use job::Job;
pub use spells::{
    AmnesiaOutcome, CastContext, CastOutcome, SelfEnchantment, SpellError,
    cast_selective_amnesia, cast_self_enchantment,
};
pub use stasis::{
    FreezeState, StasisLedger, StasisRecord, Velocity, accumulate, advance_freeze, begin_freeze,
    end_freeze, leave_level, resolve,
};
pub use state::{
    AttributeKind, Attributes, DurationKind, Durations, EntitiesState, EntityId, FloorItem,
    FloorItemKind, GameState, Genus, God, Habitat, Message, MessageChannel, MessageLog,
    MonsterFlags, MonsterState, PlayerState, Position, SpellId, StateError, Tick,
    Transformation,
};
