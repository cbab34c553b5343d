//! Traits describing the world outside the mutable game state.
//!
//! Oracles expose static map geometry, ray casting, sight lines, and
//! randomness. Collaborators apply side effects whose rules live elsewhere
//! (collisions, arrival effects, transformations). The [`SpellEnv`] aggregate
//! bundles them so spell handlers and the momentum replay engine can reach
//! everything they need without hard coupling to concrete implementations.
mod hooks;
mod map;
mod ray;
mod rng;
mod vision;

pub use hooks::{
    CollisionResolver, DeathAttribution, DirectShapeshifter, LocationEffects, NoCollision,
    NoLocationEffects, Shapeshifter,
};
pub use map::{GridMap, MapDimensions, MapOracle, StaticTile, TerrainKind};
pub use ray::{BresenhamRay, RayOracle, RayWalk};
pub use rng::{Dice, PcgRng, RngOracle, compute_seed};
pub use vision::{LineOfSight, VisionOracle};

use crate::config::GameConfig;

/// Aggregates the oracles and collaborators required by spell effects.
///
/// The ray service and the side-effecting collaborators default to
/// [`BresenhamRay`] and inert implementations; override them with the
/// `with_*` builders.
#[derive(Clone, Copy)]
pub struct SpellEnv<'a> {
    config: &'a GameConfig,
    map: &'a dyn MapOracle,
    ray: &'a dyn RayOracle,
    vision: &'a dyn VisionOracle,
    rng: &'a dyn RngOracle,
    collision: &'a dyn CollisionResolver,
    location: &'a dyn LocationEffects,
    shapeshifter: &'a dyn Shapeshifter,
}

impl<'a> SpellEnv<'a> {
    pub fn new(
        config: &'a GameConfig,
        map: &'a dyn MapOracle,
        vision: &'a dyn VisionOracle,
        rng: &'a dyn RngOracle,
    ) -> Self {
        Self {
            config,
            map,
            ray: &BresenhamRay,
            vision,
            rng,
            collision: &NoCollision,
            location: &NoLocationEffects,
            shapeshifter: &DirectShapeshifter,
        }
    }

    pub fn with_ray(mut self, ray: &'a dyn RayOracle) -> Self {
        self.ray = ray;
        self
    }

    pub fn with_collision(mut self, collision: &'a dyn CollisionResolver) -> Self {
        self.collision = collision;
        self
    }

    pub fn with_location_effects(mut self, location: &'a dyn LocationEffects) -> Self {
        self.location = location;
        self
    }

    pub fn with_shapeshifter(mut self, shapeshifter: &'a dyn Shapeshifter) -> Self {
        self.shapeshifter = shapeshifter;
        self
    }

    pub fn config(&self) -> &'a GameConfig {
        self.config
    }

    pub fn map(&self) -> &'a dyn MapOracle {
        self.map
    }

    pub fn ray(&self) -> &'a dyn RayOracle {
        self.ray
    }

    pub fn vision(&self) -> &'a dyn VisionOracle {
        self.vision
    }

    pub fn rng(&self) -> &'a dyn RngOracle {
        self.rng
    }

    pub fn collision(&self) -> &'a dyn CollisionResolver {
        self.collision
    }

    pub fn location_effects(&self) -> &'a dyn LocationEffects {
        self.location
    }

    pub fn shapeshifter(&self) -> &'a dyn Shapeshifter {
        self.shapeshifter
    }

    /// Dice seeded for one action by `actor` at `nonce`.
    pub fn dice(&self, game_seed: u64, nonce: u64, actor: u32) -> Dice<'a> {
        Dice::new(self.rng, game_seed, nonce, actor)
    }
}

impl core::fmt::Debug for SpellEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SpellEnv")
            .field("config", self.config)
            .field("map", &self.map.dimensions())
            .finish_non_exhaustive()
    }
}
