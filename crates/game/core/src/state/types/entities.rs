use bounded_vector::BoundedVec;

use super::{EntityId, FloorItem, MonsterState, Position};
use crate::config::GameConfig;
use crate::state::StateError;

/// Aggregate state for every non-player entity on the level.
///
/// `monsters` is the entity registry: its order is the stable iteration order
/// used whenever effects are applied to several monsters in turn.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntitiesState {
    pub monsters: BoundedVec<MonsterState, 0, { GameConfig::MAX_MONSTERS }>,
    pub items: BoundedVec<FloorItem, 0, { GameConfig::MAX_FLOOR_ITEMS }>,
}

impl EntitiesState {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Appends a monster to the registry.
    pub fn add_monster(&mut self, monster: MonsterState) -> Result<(), StateError> {
        if self.monster(monster.id).is_some() {
            return Err(StateError::DuplicateEntity { id: monster.id });
        }
        if let Some(occupant) = self.monster_at(monster.position) {
            return Err(StateError::PositionOccupied {
                position: monster.position,
                occupant: occupant.id,
            });
        }
        self.monsters
            .push(monster)
            .map_err(|_| StateError::MonsterListFull {
                max: GameConfig::MAX_MONSTERS,
            })
    }

    pub fn add_item(&mut self, item: FloorItem) -> Result<(), StateError> {
        self.items.push(item).map_err(|_| StateError::ItemListFull {
            max: GameConfig::MAX_FLOOR_ITEMS,
        })
    }

    pub fn monster(&self, id: EntityId) -> Option<&MonsterState> {
        self.monsters.iter().find(|monster| monster.id == id)
    }

    pub fn monster_mut(&mut self, id: EntityId) -> Option<&mut MonsterState> {
        self.monsters.iter_mut().find(|monster| monster.id == id)
    }

    /// Returns the living monster standing on `position`, if any.
    pub fn monster_at(&self, position: Position) -> Option<&MonsterState> {
        self.monsters
            .iter()
            .find(|monster| monster.is_alive() && monster.position == position)
    }

    /// Ids of living monsters that can be displaced, in registry order.
    ///
    /// Collected up front so callers may mutate the registry while walking it.
    pub fn mobile_ids(&self) -> Vec<EntityId> {
        self.monsters
            .iter()
            .filter(|monster| monster.is_alive() && !monster.is_stationary())
            .map(|monster| monster.id)
            .collect()
    }

    /// Relocates a monster. Returns false if the id is unknown.
    pub fn move_to_pos(&mut self, id: EntityId, position: Position) -> bool {
        match self.monster_mut(id) {
            Some(monster) => {
                monster.position = position;
                true
            }
            None => false,
        }
    }

    /// Removes the floor items with the given ids; unknown ids are ignored.
    pub fn remove_items(&mut self, ids: &[EntityId]) {
        let doomed: Vec<usize> = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| ids.contains(&item.id))
            .map(|(index, _)| index)
            .collect();
        for index in doomed.into_iter().rev() {
            // Indices come from this list and the lower bound is zero, so removal cannot fail.
            self.items.remove(index).ok();
        }
    }
}
