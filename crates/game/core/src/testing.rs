//! Shared fixtures for unit tests.

use std::sync::Mutex;

use crate::config::GameConfig;
use crate::env::{
    CollisionResolver, DeathAttribution, GridMap, LocationEffects, PcgRng, SpellEnv,
    VisionOracle,
};
use crate::job::Job;
use crate::state::{EntitiesState, EntityId, GameState, MonsterState, PlayerState, Position};

/// Vision that answers every query the same way.
pub(crate) struct FixedVision(pub bool);

impl VisionOracle for FixedVision {
    fn can_see(&self, _viewer: Position, _target: Position) -> bool {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct CollisionCall {
    pub entity: EntityId,
    pub obstacle: Position,
    pub attribution: DeathAttribution,
    pub impact: i32,
    /// Where the entity stood when the collision was resolved.
    pub position: Option<Position>,
    /// Messages already in the log at call time.
    pub messages_before: usize,
}

#[derive(Default)]
pub(crate) struct RecordingCollisions {
    pub calls: Mutex<Vec<CollisionCall>>,
}

impl RecordingCollisions {
    pub fn calls(&self) -> Vec<CollisionCall> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }
}

impl CollisionResolver for RecordingCollisions {
    fn collide(
        &self,
        state: &mut GameState,
        entity: EntityId,
        obstacle: Position,
        attribution: DeathAttribution,
        impact: i32,
    ) {
        let call = CollisionCall {
            entity,
            obstacle,
            attribution,
            impact,
            position: state.actor_position(entity),
            messages_before: state.messages.len(),
        };
        self.calls.lock().unwrap().push(call);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ArrivalCall {
    pub entity: EntityId,
    pub old_position: Position,
    pub new_position: Option<Position>,
    pub attribution: DeathAttribution,
}

#[derive(Default)]
pub(crate) struct RecordingArrivals {
    pub calls: Mutex<Vec<ArrivalCall>>,
}

impl RecordingArrivals {
    pub fn calls(&self) -> Vec<ArrivalCall> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }
}

impl LocationEffects for RecordingArrivals {
    fn apply(
        &self,
        state: &mut GameState,
        entity: EntityId,
        old_position: Position,
        attribution: DeathAttribution,
    ) {
        let call = ArrivalCall {
            entity,
            old_position,
            new_position: state.actor_position(entity),
            attribution,
        };
        self.calls.lock().unwrap().push(call);
    }
}

/// Map, config, and recording collaborators for one test.
pub(crate) struct Harness {
    pub config: GameConfig,
    pub map: GridMap,
    pub vision: FixedVision,
    pub collisions: RecordingCollisions,
    pub arrivals: RecordingArrivals,
}

impl Harness {
    pub fn new(map: GridMap) -> Self {
        Self {
            config: GameConfig::default(),
            map,
            vision: FixedVision(true),
            collisions: RecordingCollisions::default(),
            arrivals: RecordingArrivals::default(),
        }
    }

    /// Open floor large enough for every test layout.
    pub fn open() -> Self {
        Self::new(GridMap::open(32, 32))
    }

    pub fn blind(mut self) -> Self {
        self.vision = FixedVision(false);
        self
    }

    pub fn env(&self) -> SpellEnv<'_> {
        SpellEnv::new(&self.config, &self.map, &self.vision, &PcgRng)
            .with_collision(&self.collisions)
            .with_location_effects(&self.arrivals)
    }
}

/// State with the player at `player` and the given monsters, in order.
pub(crate) fn state_with(player: Position, monsters: Vec<MonsterState>) -> GameState {
    let mut entities = EntitiesState::empty();
    for monster in monsters {
        entities.add_monster(monster).unwrap();
    }
    let player = PlayerState::new(Job::Wizard, player, 40);
    GameState::with_seed(0x5EED, player, entities)
}

pub(crate) fn monster(id: u32, name: &str, position: Position) -> MonsterState {
    MonsterState::new(EntityId(id), name, position, 20)
}
