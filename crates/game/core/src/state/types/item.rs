//! Items lying on the level floor.

use super::{EntityId, Genus, Position};

/// What kind of object a floor item is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FloorItemKind {
    /// Remains of a slain creature of the given genus.
    Corpse(Genus),
    /// Bones left after a corpse rots.
    Skeleton(Genus),
    /// Anything else; opaque to spell effects.
    Other,
}

/// Item that exists on the ground (not inside an inventory).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloorItem {
    pub id: EntityId,
    pub position: Position,
    pub kind: FloorItemKind,
}

impl FloorItem {
    pub fn new(id: EntityId, position: Position, kind: FloorItemKind) -> Self {
        Self { id, position, kind }
    }

    pub fn corpse(id: EntityId, position: Position, genus: Genus) -> Self {
        Self::new(id, position, FloorItemKind::Corpse(genus))
    }

    /// Genus of the remains, or `None` if this is neither corpse nor skeleton.
    pub fn remains_genus(&self) -> Option<Genus> {
        match self.kind {
            FloorItemKind::Corpse(genus) | FloorItemKind::Skeleton(genus) => Some(genus),
            FloorItemKind::Other => None,
        }
    }
}
