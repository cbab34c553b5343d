//! State management errors.
//!
//! Errors related to populating a level: capacity limits and occupancy.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{EntityId, Position};

/// Errors raised while adding entities to the game state.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StateError {
    /// Monster list is full (max capacity reached).
    #[error("Monster list is full (max: {max})")]
    MonsterListFull {
        /// Maximum capacity.
        max: usize,
    },

    /// Floor item list is full (max capacity reached).
    #[error("Floor item list is full (max: {max})")]
    ItemListFull {
        /// Maximum capacity.
        max: usize,
    },

    /// An entity with this id is already tracked.
    #[error("Entity {id} already exists")]
    DuplicateEntity { id: EntityId },

    /// Position is already occupied by another actor.
    #[error("Position {position} is already occupied by entity {occupant}")]
    PositionOccupied {
        /// The position that is occupied.
        position: Position,
        /// The actor currently occupying the position.
        occupant: EntityId,
    },
}

impl GameError for StateError {
    fn severity(&self) -> ErrorSeverity {
        use StateError::*;
        match self {
            MonsterListFull { .. } | ItemListFull { .. } => ErrorSeverity::Validation,
            DuplicateEntity { .. } | PositionOccupied { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use StateError::*;
        match self {
            MonsterListFull { .. } => "STATE_MONSTER_LIST_FULL",
            ItemListFull { .. } => "STATE_ITEM_LIST_FULL",
            DuplicateEntity { .. } => "STATE_DUPLICATE_ENTITY",
            PositionOccupied { .. } => "STATE_POSITION_OCCUPIED",
        }
    }
}
