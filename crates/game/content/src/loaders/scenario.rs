//! Scenario loader.
//!
//! A scenario places the player, monsters, and floor remains on a named map
//! and fixes the game seed, so a replay starts from an identical state.

use std::path::Path;

use hourglass_core::{
    EntitiesState, EntityId, FloorItem, FloorItemKind, GameConfig, GameState, Genus, GridMap, God,
    Habitat, Job, MapOracle, MonsterFlags, MonsterState, PlayerState, Position, SpellId,
    Transformation,
};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Scenario file contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub seed: u64,
    /// Map name under `maps/`, without the `.ron` extension.
    pub map: String,
    pub player: PlayerSpec,
    #[serde(default)]
    pub monsters: Vec<MonsterSpec>,
    #[serde(default)]
    pub remains: Vec<RemainsSpec>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSpec {
    pub job: Job,
    pub position: (i32, i32),
    pub hp_max: i32,
    #[serde(default)]
    pub god: God,
    #[serde(default)]
    pub form: Transformation,
    #[serde(default)]
    pub flying: bool,
    /// Memorised spell ids, in slot order.
    #[serde(default)]
    pub spells: Vec<u16>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonsterSpec {
    pub id: u32,
    pub name: String,
    pub position: (i32, i32),
    pub hp: i32,
    #[serde(default)]
    pub genus: Genus,
    #[serde(default)]
    pub habitat: Habitat,
    #[serde(default)]
    pub flags: MonsterFlags,
}

/// A corpse, or a skeleton if `skeleton` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemainsSpec {
    pub id: u32,
    pub position: (i32, i32),
    pub genus: Genus,
    #[serde(default)]
    pub skeleton: bool,
}

impl PlayerSpec {
    fn build(&self) -> LoadResult<PlayerState> {
        let (x, y) = self.position;
        let mut player = PlayerState::new(self.job, Position::new(x, y), self.hp_max)
            .with_god(self.god)
            .with_form(self.form);
        player.flying = self.flying;
        for &spell in &self.spells {
            player.spells.try_push(SpellId(spell)).map_err(|_| {
                anyhow::anyhow!(
                    "Player knows more than {} spells",
                    GameConfig::MAX_MEMORISED_SPELLS
                )
            })?;
        }
        Ok(player)
    }
}

impl MonsterSpec {
    fn build(&self) -> MonsterState {
        let (x, y) = self.position;
        MonsterState::new(EntityId(self.id), self.name.clone(), Position::new(x, y), self.hp)
            .with_genus(self.genus)
            .with_habitat(self.habitat)
            .with_flags(self.flags)
    }
}

impl RemainsSpec {
    fn build(&self) -> FloorItem {
        let (x, y) = self.position;
        let kind = if self.skeleton {
            FloorItemKind::Skeleton(self.genus)
        } else {
            FloorItemKind::Corpse(self.genus)
        };
        FloorItem::new(EntityId(self.id), Position::new(x, y), kind)
    }
}

impl Scenario {
    /// Builds the initial [`GameState`].
    ///
    /// Fails on duplicate ids, shared cells, or a full registry.
    pub fn build_state(&self) -> LoadResult<GameState> {
        let player = self.player.build()?;
        let mut entities = EntitiesState::empty();

        for spec in &self.monsters {
            if EntityId(spec.id) == player.id {
                return Err(anyhow::anyhow!("Monster '{}' reuses the player id", spec.name));
            }
            if player.position == Position::new(spec.position.0, spec.position.1) {
                return Err(anyhow::anyhow!("Monster '{}' stands on the player", spec.name));
            }
            entities
                .add_monster(spec.build())
                .map_err(|e| anyhow::anyhow!("Failed to place monster '{}': {}", spec.name, e))?;
        }
        for spec in &self.remains {
            entities
                .add_item(spec.build())
                .map_err(|e| anyhow::anyhow!("Failed to place remains {}: {}", spec.id, e))?;
        }

        tracing::debug!(
            seed = self.seed,
            monsters = self.monsters.len(),
            remains = self.remains.len(),
            "scenario built"
        );
        Ok(GameState::with_seed(self.seed, player, entities))
    }

    /// Checks that every placement lies on `map` and on terrain its occupant
    /// can stand in.
    pub fn check_against(&self, map: &GridMap) -> LoadResult<()> {
        let (x, y) = self.player.position;
        let at = Position::new(x, y);
        if map.cell_is_solid(at) {
            return Err(anyhow::anyhow!("Player starts inside solid terrain at ({x}, {y})"));
        }

        for spec in &self.monsters {
            let monster = spec.build();
            if !monster.can_pass_through(map, monster.position) {
                let Position { x, y } = monster.position;
                return Err(anyhow::anyhow!(
                    "Monster '{}' cannot stand at ({x}, {y})",
                    spec.name
                ));
            }
        }
        for spec in &self.remains {
            let (x, y) = spec.position;
            if !map.contains(Position::new(x, y)) {
                return Err(anyhow::anyhow!("Remains {} lie off the map at ({x}, {y})", spec.id));
            }
        }
        Ok(())
    }
}

/// Loader for scenarios from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    pub fn load(path: &Path) -> LoadResult<Scenario> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Scenario> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))
    }
}
