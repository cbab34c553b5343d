//! Authoritative game state representation.
//!
//! This module owns the data structures that describe the player, the monster
//! registry, floor items, and the message log. Spell handlers and the momentum
//! replay engine mutate it through `&mut GameState`; everything static (map
//! layout, sight lines, randomness) arrives separately through
//! [`crate::env::SpellEnv`].
mod error;
pub mod types;

pub use bounded_vector::BoundedVec;
pub use error::StateError;
pub use types::{
    AttributeKind, Attributes, DurationKind, Durations, EntitiesState, EntityId, FloorItem,
    FloorItemKind, Genus, God, Habitat, Message, MessageChannel, MessageLog, MonsterFlags,
    MonsterState, PlayerState, Position, SpellId, Tick, Transformation,
};

use crate::stasis::StasisLedger;

/// Canonical snapshot of the deterministic game state.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// RNG seed for deterministic random generation.
    ///
    /// Set once at game initialization and never modified.
    /// Combined with `nonce` to generate unique seeds for each random event.
    pub game_seed: u64,

    /// Sequence number advanced by every cast.
    pub nonce: u64,

    /// Player turn counter; stamps log messages.
    pub turn: Tick,

    pub player: PlayerState,
    pub entities: EntitiesState,

    /// Momentum stored on monsters while time is stopped.
    pub stasis: StasisLedger,

    pub messages: MessageLog,
}

impl GameState {
    pub fn new(player: PlayerState, entities: EntitiesState) -> Self {
        Self {
            player,
            entities,
            ..Self::default()
        }
    }

    /// Creates a fresh state with a specific game seed.
    pub fn with_seed(game_seed: u64, player: PlayerState, entities: EntitiesState) -> Self {
        Self {
            game_seed,
            ..Self::new(player, entities)
        }
    }

    /// Returns the actor standing on `position`: the player or a living monster.
    pub fn actor_at(&self, position: Position) -> Option<EntityId> {
        if self.player.position == position {
            return Some(self.player.id);
        }
        self.entities.monster_at(position).map(|monster| monster.id)
    }

    /// Returns the current position of an actor.
    pub fn actor_position(&self, id: EntityId) -> Option<Position> {
        if id == self.player.id {
            return Some(self.player.position);
        }
        self.entities.monster(id).map(|monster| monster.position)
    }

    /// Returns the current nonce and advances it.
    pub fn bump_nonce(&mut self) -> u64 {
        let nonce = self.nonce;
        self.nonce = self.nonce.wrapping_add(1);
        nonce
    }

    /// Prints a plain message.
    pub fn message(&mut self, text: impl Into<String>) {
        self.message_on(MessageChannel::Plain, text);
    }

    pub fn message_on(&mut self, channel: MessageChannel, text: impl Into<String>) {
        self.messages.push(channel, text, self.turn);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::job::Job;

    #[test]
    fn actor_at_sees_player_and_living_monsters() {
        let player = PlayerState::new(Job::Wizard, Position::new(1, 1), 20);
        let mut state = GameState::new(player, EntitiesState::empty());
        state
            .entities
            .add_monster(MonsterState::new(EntityId(7), "rat", Position::new(2, 1), 3))
            .unwrap();
        let mut dead = MonsterState::new(EntityId(8), "rat", Position::new(3, 1), 3);
        dead.hp = 0;
        state.entities.add_monster(dead).unwrap();

        assert_eq!(state.actor_at(Position::new(1, 1)), Some(EntityId::PLAYER));
        assert_eq!(state.actor_at(Position::new(2, 1)), Some(EntityId(7)));
        assert_eq!(state.actor_at(Position::new(3, 1)), None);
    }

    #[test]
    fn bump_nonce_returns_previous_value() {
        let mut state = GameState::default();
        assert_eq!(state.bump_nonce(), 0);
        assert_eq!(state.bump_nonce(), 1);
        assert_eq!(state.nonce, 2);
    }
}
