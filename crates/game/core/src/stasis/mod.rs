//! Momentum replay: stopped time and the release of stored momentum.
//!
//! While the player holds time still, monsters that take hits do not react.
//! The damage and push they receive accumulate in the [`StasisLedger`]. When
//! time resumes, every mobile monster with at least one point of stored damage
//! is launched along its stored velocity, travelling `floor(log_2.5(damage))`
//! cells or until something stops it.
//!
//! None of these operations fail; every edge case degrades to a no-op.
mod knockback;
mod record;

pub use knockback::{KnockbackPath, knockback_distance, launch_target, walk_path};
pub use record::{FreezeState, StasisLedger, StasisRecord, Velocity};

use crate::env::{DeathAttribution, SpellEnv};
use crate::state::{DurationKind, EntityId, GameState, MonsterFlags};

/// Stops time for `20 + power / 5` ticks.
///
/// Stored momentum from an earlier freeze is left untouched.
pub fn begin_freeze(state: &mut GameState, env: &SpellEnv<'_>, power: i32) {
    let config = env.config();
    let bonus = match config.time_stop_power_divisor {
        0 => 0,
        divisor => power.max(0) as u32 / divisor,
    };
    let ticks = config.time_stop_base_ticks + bonus;
    state.message("You bring the flow of time to a stop.");
    state.player.freeze.start(ticks);
    tracing::debug!(power, ticks, "time stopped");
}

/// Records a hit taken while frozen.
pub fn accumulate(state: &mut GameState, entity: EntityId, damage: f32, impulse: Velocity) {
    state.stasis.add(entity, damage, impulse);
    tracing::trace!(%entity, damage, ?impulse, "momentum stored");
}

/// Restarts time and releases all stored momentum.
///
/// With `interrupted` set (the player was teleported or left the level) the
/// call does nothing unless time is actually stopped.
pub fn end_freeze(state: &mut GameState, env: &SpellEnv<'_>, interrupted: bool) {
    if interrupted {
        if !state.player.freeze.is_active() {
            return;
        }
        state.message("Being yanked through space has disrupted your control over time.");
    }

    state.player.freeze.stop();

    let config = env.config();
    let nonce = state.bump_nonce();
    let mut dice = env.dice(state.game_seed, nonce, state.player.id.0);
    let exhaustion = config.exhaustion_base_turns + dice.random2(config.exhaustion_variance);
    state
        .player
        .durations
        .increase(DurationKind::Exhausted, exhaustion, 0);
    state.message("Time begins to flow once more.");

    let mut launched = 0usize;
    for id in state.entities.mobile_ids() {
        // An earlier launch may have killed this one.
        let alive = state
            .entities
            .monster(id)
            .is_some_and(|monster| monster.is_alive());
        if !alive || state.stasis.get(id).stored_damage < 1.0 {
            continue;
        }
        if launched == 0 {
            state.message("The stored up momentum is unleashed!");
        }
        launched += 1;
        resolve(state, env, id);
    }

    state.stasis.clear();
    tracing::debug!(interrupted, exhaustion, launched, "time resumed");
}

/// Launches one monster according to its stored momentum.
pub fn resolve(state: &mut GameState, env: &SpellEnv<'_>, entity: EntityId) {
    let config = env.config();
    let map = env.map();
    let record = state.stasis.get(entity);

    let Some(monster) = state.entities.monster(entity) else {
        return;
    };
    let origin = monster.position;
    let distance = knockback_distance(record.stored_damage, config.knockback_log_base);
    let target = launch_target(origin, record.velocity, config.velocity_scale);

    let Some(ray) = env.ray().cast(origin, target) else {
        return;
    };
    if distance == 0 {
        return;
    }

    let path = walk_path(origin, ray.take(distance as usize), |cell| {
        !map.cell_is_solid(cell)
            && state.actor_at(cell).is_none()
            && monster.can_pass_through(map, cell)
            && monster.is_habitable(map, cell)
    });
    if !path.moved_from(origin) {
        return;
    }

    let name = monster.the_name();
    let hidden = monster.flags.contains(MonsterFlags::INVISIBLE);
    state.entities.move_to_pos(entity, path.landing);
    tracing::debug!(
        %entity,
        damage = record.stored_damage,
        distance,
        %target,
        landing = %path.landing,
        "momentum launch"
    );

    if !hidden && env.vision().can_see(state.player.position, path.landing) {
        state.message(format!("{name} is knocked back by the momentum."));
    }

    if let Some(obstacle) = path.obstacle {
        env.collision().collide(
            state,
            entity,
            obstacle,
            DeathAttribution::player(),
            config.collision_impact,
        );
    }

    env.location_effects()
        .apply(state, entity, origin, DeathAttribution::player());
}

/// Counts frozen time down by one tick, resuming time when it runs out.
pub fn advance_freeze(state: &mut GameState, env: &SpellEnv<'_>) {
    if state.player.freeze.tick() {
        end_freeze(state, env, false);
    }
}

/// Releases stored momentum before the player departs the level.
pub fn leave_level(state: &mut GameState, env: &SpellEnv<'_>) {
    end_freeze(state, env, true);
}

#[cfg(test)]
mod tests;
