use bitflags::bitflags;

use super::{EntityId, Position};
use crate::env::{MapOracle, TerrainKind};

bitflags! {
    /// Innate capabilities and classifications of a monster.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct MonsterFlags: u8 {
        /// Rooted in place (plants, fungi, statues); never displaced.
        const STATIONARY   = 1 << 0;
        /// Flies over liquids.
        const FLIES        = 1 << 1;
        /// Burrows through rock walls.
        const PASSES_WALLS = 1 << 2;
        const INVISIBLE    = 1 << 3;
        /// Named individual; referred to without an article.
        const UNIQUE       = 1 << 4;
    }
}

/// Terrain a monster can survive on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Habitat {
    #[default]
    Land,
    /// Land and any depth of water.
    Amphibious,
    Water,
    Lava,
}

/// Broad species family; used for religious restrictions on remains.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Genus {
    #[default]
    Beast,
    Human,
    Elf,
    Orc,
    Goblin,
    Kobold,
    Dragon,
    Undead,
    Plant,
}

/// A monster on the current level.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterState {
    pub id: EntityId,
    pub name: String,
    pub position: Position,
    pub hp: i32,
    pub genus: Genus,
    pub habitat: Habitat,
    pub flags: MonsterFlags,
}

impl MonsterState {
    pub fn new(id: EntityId, name: impl Into<String>, position: Position, hp: i32) -> Self {
        Self {
            id,
            name: name.into(),
            position,
            hp,
            genus: Genus::default(),
            habitat: Habitat::default(),
            flags: MonsterFlags::empty(),
        }
    }

    pub fn with_genus(mut self, genus: Genus) -> Self {
        self.genus = genus;
        self
    }

    pub fn with_habitat(mut self, habitat: Habitat) -> Self {
        self.habitat = habitat;
        self
    }

    pub fn with_flags(mut self, flags: MonsterFlags) -> Self {
        self.flags |= flags;
        self
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    #[inline]
    pub fn is_stationary(&self) -> bool {
        self.flags.contains(MonsterFlags::STATIONARY)
    }

    /// Returns true if the monster's body can occupy `cell` at all: open
    /// terrain, or rock for wall-burrowers.
    pub fn can_pass_through<M>(&self, map: &M, cell: Position) -> bool
    where
        M: MapOracle + ?Sized,
    {
        match map.terrain(cell) {
            None => false,
            Some(TerrainKind::Wall) => self.flags.contains(MonsterFlags::PASSES_WALLS),
            Some(terrain) => !terrain.is_solid(),
        }
    }

    /// Returns true if the monster can survive on `cell`.
    pub fn is_habitable<M>(&self, map: &M, cell: Position) -> bool
    where
        M: MapOracle + ?Sized,
    {
        let Some(terrain) = map.terrain(cell) else {
            return false;
        };
        if terrain == TerrainKind::Wall && self.flags.contains(MonsterFlags::PASSES_WALLS) {
            return true;
        }
        if terrain.is_solid() {
            return false;
        }
        if self.flags.contains(MonsterFlags::FLIES) {
            return true;
        }
        match self.habitat {
            Habitat::Land => matches!(terrain, TerrainKind::Floor | TerrainKind::ShallowWater),
            Habitat::Amphibious => terrain != TerrainKind::Lava,
            Habitat::Water => terrain.is_water(),
            Habitat::Lava => matches!(terrain, TerrainKind::Lava | TerrainKind::Floor),
        }
    }

    /// Definite description used at the start of a sentence.
    pub fn the_name(&self) -> String {
        if self.flags.contains(MonsterFlags::UNIQUE) {
            return self.name.clone();
        }
        format!("The {}", self.name)
    }
}
