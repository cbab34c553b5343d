use super::*;
use crate::env::{GridMap, RayOracle, TerrainKind};
use crate::state::{MonsterFlags, Position};
use crate::testing::{Harness, monster, state_with};

const UNLEASHED: &str = "The stored up momentum is unleashed!";
const RESUMED: &str = "Time begins to flow once more.";

fn goblin_at(x: i32, y: i32) -> crate::state::MonsterState {
    monster(1, "goblin", Position::new(x, y))
}

#[test]
fn begin_freeze_scales_with_power() {
    let harness = Harness::open();
    let mut state = state_with(Position::ORIGIN, vec![]);
    begin_freeze(&mut state, &harness.env(), 54);
    assert_eq!(state.player.freeze.remaining_ticks, 30);
    assert!(state.player.is_frozen());
    assert!(state.messages.contains("You bring the flow of time to a stop."));

    begin_freeze(&mut state, &harness.env(), 0);
    assert_eq!(state.player.freeze.remaining_ticks, 20);
}

#[test]
fn begin_freeze_leaves_stored_momentum_alone() {
    let harness = Harness::open();
    let mut state = state_with(Position::ORIGIN, vec![goblin_at(5, 5)]);
    accumulate(&mut state, EntityId(1), 3.0, Velocity::new(0.5, 0.0));
    begin_freeze(&mut state, &harness.env(), 10);
    assert_eq!(state.stasis.get(EntityId(1)).stored_damage, 3.0);
}

#[test]
fn accumulate_is_unbounded_and_componentwise() {
    let mut state = state_with(Position::ORIGIN, vec![goblin_at(5, 5)]);
    for _ in 0..1000 {
        accumulate(&mut state, EntityId(1), 1000.0, Velocity::new(1.0, -2.0));
    }
    let record = state.stasis.get(EntityId(1));
    assert_eq!(record.stored_damage, 1_000_000.0);
    assert_eq!(record.velocity, Velocity::new(1000.0, -2000.0));
}

#[test]
fn huge_stored_momentum_stays_on_the_grid() {
    let harness = Harness::open();
    let ogre = monster(2, "ogre", Position::new(5, 10));
    let mut state = state_with(Position::ORIGIN, vec![goblin_at(5, 5), ogre]);
    accumulate(&mut state, EntityId(1), 6.25, Velocity::new(2.0e8, 0.0));
    accumulate(&mut state, EntityId(2), f32::MAX, Velocity::new(1.0e12, 1.0e12));

    end_freeze(&mut state, &harness.env(), false);

    // Direction survives the shrink: east for the goblin, diagonal for the ogre.
    assert_eq!(state.actor_position(EntityId(1)), Some(Position::new(7, 5)));
    assert_eq!(state.actor_position(EntityId(2)), Some(Position::new(26, 31)));
    let calls = harness.collisions.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].entity, EntityId(2));
    assert_eq!(calls[0].obstacle, Position::new(27, 32));
    assert!(state.stasis.is_empty());
}

#[test]
fn interrupted_end_without_freeze_is_a_no_op() {
    let harness = Harness::open();
    let mut state = state_with(Position::ORIGIN, vec![goblin_at(5, 5)]);
    accumulate(&mut state, EntityId(1), 50.0, Velocity::new(1.0, 0.0));
    let before = state.clone();

    end_freeze(&mut state, &harness.env(), true);

    assert_eq!(state, before);
    assert!(harness.collisions.calls().is_empty());
    assert!(harness.arrivals.calls().is_empty());
}

#[test]
fn interrupted_end_while_frozen_warns_then_resumes() {
    let harness = Harness::open();
    let mut state = state_with(Position::ORIGIN, vec![]);
    begin_freeze(&mut state, &harness.env(), 0);
    state.messages.clear();

    end_freeze(&mut state, &harness.env(), true);

    let texts: Vec<_> = state.messages.texts().collect();
    assert_eq!(
        texts,
        vec![
            "Being yanked through space has disrupted your control over time.",
            RESUMED,
        ]
    );
    assert!(!state.player.is_frozen());
}

#[test]
fn end_freeze_exhausts_the_caster() {
    let harness = Harness::open();
    let mut state = state_with(Position::ORIGIN, vec![]);
    begin_freeze(&mut state, &harness.env(), 0);
    end_freeze(&mut state, &harness.env(), false);

    let turns = state.player.durations.turns(DurationKind::Exhausted);
    assert!((12..=16).contains(&turns), "exhausted for {turns} turns");
    assert!(state.messages.contains(RESUMED));
}

#[test]
fn end_freeze_zeroes_every_record() {
    let harness = Harness::open();
    let mut sleeper = monster(2, "plant", Position::new(9, 9));
    sleeper.flags |= MonsterFlags::STATIONARY;
    let mut state = state_with(Position::ORIGIN, vec![goblin_at(5, 5), sleeper]);
    accumulate(&mut state, EntityId(1), 0.5, Velocity::new(1.0, 1.0));
    accumulate(&mut state, EntityId(2), 40.0, Velocity::new(-1.0, 0.0));
    accumulate(&mut state, EntityId(77), 9.0, Velocity::new(0.0, 1.0));

    end_freeze(&mut state, &harness.env(), false);

    for id in [EntityId(1), EntityId(2), EntityId(77)] {
        assert!(state.stasis.get(id).is_zero());
    }
    assert!(state.stasis.is_empty());
}

#[test]
fn weak_hits_and_stationary_monsters_are_not_launched() {
    let harness = Harness::open();
    let mut plant = monster(2, "plant", Position::new(9, 9));
    plant.flags |= MonsterFlags::STATIONARY;
    let mut state = state_with(Position::ORIGIN, vec![goblin_at(5, 5), plant]);
    accumulate(&mut state, EntityId(1), 0.99, Velocity::new(1.0, 0.0));
    accumulate(&mut state, EntityId(2), 40.0, Velocity::new(-1.0, 0.0));

    end_freeze(&mut state, &harness.env(), false);

    assert!(!state.messages.contains(UNLEASHED));
    assert_eq!(state.actor_position(EntityId(1)), Some(Position::new(5, 5)));
    assert_eq!(state.actor_position(EntityId(2)), Some(Position::new(9, 9)));
}

#[test]
fn unleashed_message_is_printed_once_before_the_first_launch() {
    let harness = Harness::open();
    let mut state = state_with(
        Position::new(0, 20),
        vec![
            monster(1, "goblin", Position::new(2, 2)),
            monster(2, "kobold", Position::new(2, 8)),
        ],
    );
    accumulate(&mut state, EntityId(1), 6.25, Velocity::new(1.0, 0.0));
    accumulate(&mut state, EntityId(2), 6.25, Velocity::new(1.0, 0.0));

    end_freeze(&mut state, &harness.env(), false);

    let texts: Vec<_> = state.messages.texts().collect();
    assert_eq!(
        texts,
        vec![
            RESUMED,
            UNLEASHED,
            "The goblin is knocked back by the momentum.",
            "The kobold is knocked back by the momentum.",
        ]
    );
}

#[test]
fn launches_see_earlier_landings() {
    let harness = Harness::open();
    // The kobold lands on (4, 0); the goblin behind it is then stopped short.
    let mut state = state_with(
        Position::new(0, 20),
        vec![
            monster(2, "kobold", Position::new(2, 0)),
            monster(1, "goblin", Position::new(1, 0)),
        ],
    );
    accumulate(&mut state, EntityId(2), 6.25, Velocity::new(1.0, 0.0));
    accumulate(&mut state, EntityId(1), 100.0, Velocity::new(1.0, 0.0));

    end_freeze(&mut state, &harness.env(), false);

    assert_eq!(state.actor_position(EntityId(2)), Some(Position::new(4, 0)));
    assert_eq!(state.actor_position(EntityId(1)), Some(Position::new(3, 0)));
    let calls = harness.collisions.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].entity, EntityId(1));
    assert_eq!(calls[0].obstacle, Position::new(4, 0));
}

#[test]
fn unobstructed_launch_moves_exactly_two_cells() {
    let harness = Harness::open();
    let mut state = state_with(Position::new(0, 20), vec![goblin_at(5, 5)]);
    accumulate(&mut state, EntityId(1), 6.25, Velocity::new(1.0, 0.0));

    end_freeze(&mut state, &harness.env(), false);

    assert_eq!(state.actor_position(EntityId(1)), Some(Position::new(7, 5)));
    assert!(harness.collisions.calls().is_empty());
    let knocked = state
        .messages
        .texts()
        .filter(|text| text.ends_with("knocked back by the momentum."))
        .count();
    assert_eq!(knocked, 1);

    let arrivals = harness.arrivals.calls();
    assert_eq!(arrivals.len(), 1);
    assert_eq!(arrivals[0].old_position, Position::new(5, 5));
    assert_eq!(arrivals[0].new_position, Some(Position::new(7, 5)));
    assert_eq!(arrivals[0].attribution, DeathAttribution::player());
}

#[test]
fn wall_at_first_step_stops_the_launch_and_collides() {
    let map = GridMap::open(16, 16).with(Position::new(5, 6), TerrainKind::Wall);
    let harness = Harness::new(map);
    let mut state = state_with(Position::new(0, 0), vec![goblin_at(5, 5)]);
    accumulate(&mut state, EntityId(1), 100.0, Velocity::new(0.0, 1.0));

    end_freeze(&mut state, &harness.env(), false);

    assert_eq!(state.actor_position(EntityId(1)), Some(Position::new(5, 5)));
    let calls = harness.collisions.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].obstacle, Position::new(5, 6));
    assert_eq!(calls[0].impact, 17);
    assert_eq!(calls[0].attribution, DeathAttribution::player());
    // Collision follows the knock-back message.
    assert!(state.messages.contains("The goblin is knocked back by the momentum."));
    assert_eq!(calls[0].messages_before, state.messages.len());
    assert_eq!(harness.arrivals.calls().len(), 1);
}

#[test]
fn wall_midway_stops_on_the_cell_before_it() {
    let map = GridMap::open(16, 16).with(Position::new(5, 8), TerrainKind::Wall);
    let harness = Harness::new(map);
    let mut state = state_with(Position::new(0, 0), vec![goblin_at(5, 5)]);
    accumulate(&mut state, EntityId(1), 100.0, Velocity::new(0.0, 1.0));

    end_freeze(&mut state, &harness.env(), false);

    assert_eq!(state.actor_position(EntityId(1)), Some(Position::new(5, 7)));
    let calls = harness.collisions.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].position, Some(Position::new(5, 7)));
    assert_eq!(calls[0].obstacle, Position::new(5, 8));
}

#[test]
fn the_player_blocks_a_launch() {
    let harness = Harness::open();
    let mut state = state_with(Position::new(8, 5), vec![goblin_at(5, 5)]);
    accumulate(&mut state, EntityId(1), 100.0, Velocity::new(1.0, 0.0));

    end_freeze(&mut state, &harness.env(), false);

    assert_eq!(state.actor_position(EntityId(1)), Some(Position::new(7, 5)));
    assert_eq!(harness.collisions.calls()[0].obstacle, Position::new(8, 5));
}

#[test]
fn uninhabitable_terrain_stops_a_land_monster() {
    let map = GridMap::open(16, 16).with(Position::new(7, 5), TerrainKind::DeepWater);
    let harness = Harness::new(map);
    let mut state = state_with(Position::new(0, 0), vec![goblin_at(5, 5)]);
    accumulate(&mut state, EntityId(1), 100.0, Velocity::new(1.0, 0.0));

    end_freeze(&mut state, &harness.env(), false);

    assert_eq!(state.actor_position(EntityId(1)), Some(Position::new(6, 5)));
}

#[test]
fn zero_velocity_is_a_silent_no_op() {
    let harness = Harness::open();
    let mut state = state_with(Position::ORIGIN, vec![goblin_at(5, 5)]);
    // Rounds to zero offset: 0.05 * 8 = 0.4.
    accumulate(&mut state, EntityId(1), 100.0, Velocity::new(0.05, -0.05));
    let log_len = state.messages.len();

    resolve(&mut state, &harness.env(), EntityId(1));

    assert_eq!(state.actor_position(EntityId(1)), Some(Position::new(5, 5)));
    assert_eq!(state.messages.len(), log_len);
    assert!(harness.collisions.calls().is_empty());
    assert!(harness.arrivals.calls().is_empty());
}

#[test]
fn resolve_ignores_damage_below_one() {
    let harness = Harness::open();
    for damage in [0.0, 0.5, 0.999] {
        let mut state = state_with(Position::ORIGIN, vec![goblin_at(5, 5)]);
        accumulate(&mut state, EntityId(1), damage, Velocity::new(1.0, 0.0));
        resolve(&mut state, &harness.env(), EntityId(1));
        assert_eq!(state.actor_position(EntityId(1)), Some(Position::new(5, 5)));
    }
    assert!(harness.arrivals.calls().is_empty());
}

#[test]
fn unseen_launches_are_silent() {
    let harness = Harness::open().blind();
    let mut state = state_with(Position::ORIGIN, vec![goblin_at(5, 5)]);
    accumulate(&mut state, EntityId(1), 6.25, Velocity::new(1.0, 0.0));

    end_freeze(&mut state, &harness.env(), false);

    assert_eq!(state.actor_position(EntityId(1)), Some(Position::new(7, 5)));
    assert!(state.messages.contains(UNLEASHED));
    assert!(!state.messages.contains("The goblin is knocked back by the momentum."));
}

#[test]
fn the_freeze_runs_out_after_its_ticks() {
    let harness = Harness::open();
    let mut state = state_with(Position::new(0, 20), vec![goblin_at(5, 5)]);
    begin_freeze(&mut state, &harness.env(), 0);
    accumulate(&mut state, EntityId(1), 6.25, Velocity::new(0.0, -1.0));

    for _ in 0..19 {
        advance_freeze(&mut state, &harness.env());
    }
    assert!(state.player.is_frozen());
    assert_eq!(state.actor_position(EntityId(1)), Some(Position::new(5, 5)));

    advance_freeze(&mut state, &harness.env());
    assert!(!state.player.is_frozen());
    assert_eq!(state.actor_position(EntityId(1)), Some(Position::new(5, 3)));

    // Further ticks after expiry do nothing.
    let snapshot = state.clone();
    advance_freeze(&mut state, &harness.env());
    assert_eq!(state, snapshot);
}

#[test]
fn leaving_the_level_unleashes_momentum() {
    let harness = Harness::open();
    let mut state = state_with(Position::new(0, 20), vec![goblin_at(5, 5)]);
    begin_freeze(&mut state, &harness.env(), 30);
    accumulate(&mut state, EntityId(1), 6.25, Velocity::new(-1.0, 0.0));

    leave_level(&mut state, &harness.env());

    assert!(!state.player.is_frozen());
    assert_eq!(state.actor_position(EntityId(1)), Some(Position::new(3, 5)));
    assert!(state.stasis.is_empty());
}

#[test]
fn rays_continue_past_a_near_target() {
    // Velocity (0.25, 0) aims only two cells out; 100 damage still travels five.
    let harness = Harness::open();
    let env = harness.env();
    assert!(env.ray().cast(Position::new(5, 5), Position::new(7, 5)).is_some());
    let mut state = state_with(Position::new(0, 20), vec![goblin_at(5, 5)]);
    accumulate(&mut state, EntityId(1), 100.0, Velocity::new(0.25, 0.0));

    resolve(&mut state, &env, EntityId(1));

    assert_eq!(state.actor_position(EntityId(1)), Some(Position::new(10, 5)));
}
