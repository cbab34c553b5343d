//! Side-effecting collaborators invoked by spell effects.
//!
//! Unlike the read-only oracles, these mutate the game state: a knocked-back
//! monster slams into whatever stopped it, lands in lava, or the player's body
//! is reshaped. The rules themselves live outside this crate; the inert
//! implementations here do nothing (or refuse) so that callers only wire up
//! what they need.

use crate::state::{EntityId, GameState, Position, Transformation};

/// Who is credited if a displaced creature dies from the consequences.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeathAttribution {
    pub killer: EntityId,
}

impl DeathAttribution {
    pub const fn new(killer: EntityId) -> Self {
        Self { killer }
    }

    /// Credit goes to the player.
    pub const fn player() -> Self {
        Self::new(EntityId::PLAYER)
    }
}

/// Resolves an entity slamming into an obstacle.
pub trait CollisionResolver: Send + Sync {
    /// `obstacle` is the cell the entity failed to enter.
    fn collide(
        &self,
        state: &mut GameState,
        entity: EntityId,
        obstacle: Position,
        attribution: DeathAttribution,
        impact: i32,
    );
}

/// Applies whatever happens to a creature arriving on a new cell (falling
/// into water, triggering traps, ...).
pub trait LocationEffects: Send + Sync {
    fn apply(
        &self,
        state: &mut GameState,
        entity: EntityId,
        old_position: Position,
        attribution: DeathAttribution,
    );
}

/// Performs player transformations.
pub trait Shapeshifter: Send + Sync {
    /// Dry run: returns true if `form` could be taken right now.
    fn can_transform(&self, state: &GameState, power: i32, form: Transformation) -> bool;

    /// Returns true if taking `form` would not drop a stat to zero.
    fn stat_safe(&self, state: &GameState, form: Transformation) -> bool;

    fn transform(&self, state: &mut GameState, power: i32, form: Transformation);
}

/// Collision resolver that does nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoCollision;

impl CollisionResolver for NoCollision {
    fn collide(&self, _: &mut GameState, _: EntityId, _: Position, _: DeathAttribution, _: i32) {}
}

/// Location effects that do nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoLocationEffects;

impl LocationEffects for NoLocationEffects {
    fn apply(&self, _: &mut GameState, _: EntityId, _: Position, _: DeathAttribution) {}
}

/// Shapeshifter that swaps the player's form unconditionally, refusing only a
/// request for the form already held.
#[derive(Clone, Copy, Debug, Default)]
pub struct DirectShapeshifter;

impl Shapeshifter for DirectShapeshifter {
    fn can_transform(&self, state: &GameState, _power: i32, form: Transformation) -> bool {
        state.player.form != form
    }

    fn stat_safe(&self, _state: &GameState, _form: Transformation) -> bool {
        true
    }

    fn transform(&self, state: &mut GameState, _power: i32, form: Transformation) {
        state.player.form = form;
        state.player.redraw_armour_class = true;
    }
}
