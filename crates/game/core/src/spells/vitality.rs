//! Spells that bend the caster's hit points and healing.

use crate::config::GameConfig;
use crate::state::{DurationKind, MessageChannel};

use super::{CastContext, CastOutcome};

/// Hit points the player is left with under Death's Door.
pub fn allowed_deaths_door_hp(power: i32) -> i32 {
    (power / 10).max(1)
}

pub fn cast_deaths_door(ctx: &mut CastContext<'_, '_>, power: i32, fail: bool) -> CastOutcome {
    if fail {
        return CastOutcome::Fail;
    }
    ctx.message("You stand defiantly in death's doorway!");
    ctx.message_on(
        MessageChannel::Sound,
        "You seem to hear sand running through an hourglass...",
    );

    let player = ctx.player_mut();
    player.set_hp(allowed_deaths_door_hp(power));
    let hp_max = player.hp_max;
    player.deflate_hp(hp_max);

    let dice = ctx.dice();
    let turns = 10 + dice.random2avg(13, 3) + dice.random2(power) / 10;
    ctx.set_duration(DurationKind::DeathsDoor, turns, 0, None);

    if ctx.player().durations.get(DurationKind::DeathsDoor) > 25 * GameConfig::BASELINE_DELAY {
        let turns = 23 + ctx.dice().random2(5);
        ctx.player_mut()
            .durations
            .set_raw(DurationKind::DeathsDoor, turns * GameConfig::BASELINE_DELAY);
    }
    CastOutcome::Success
}

pub fn cast_regen(ctx: &mut CastContext<'_, '_>, power: i32, fail: bool) -> CastOutcome {
    if fail {
        return CastOutcome::Fail;
    }
    let turns = 5 + ctx.dice().roll_dice(2, power / 3 + 1);
    ctx.increase_duration(
        DurationKind::Regeneration,
        turns,
        100,
        Some("Your skin crawls."),
    );
    CastOutcome::Success
}

/// Heals fully at the price of some maximum hit points; higher power loses
/// less. Cancels Death's Door, paralysing the caster.
pub fn cast_revivification(ctx: &mut CastContext<'_, '_>, power: i32, fail: bool) -> CastOutcome {
    if fail {
        return CastOutcome::Fail;
    }
    ctx.message("Your body is healed in an amazingly painful way.");

    let loss = 6 + ctx.dice().binomial(9, 8, power);
    let player = ctx.player_mut();
    let drained = loss * player.hp_max / 100;
    player.dec_max_hp(drained);
    let hp_max = player.hp_max;
    player.set_hp(hp_max);

    if ctx.has_duration(DurationKind::DeathsDoor) {
        ctx.message_on(
            MessageChannel::Duration,
            "Your life is in your own hands once again.",
        );
        let already = ctx.player().durations.turns(DurationKind::Paralysis);
        let turns = 2 + ctx.dice().random2(6 + already);
        ctx.message("You suddenly lose the ability to move!");
        ctx.player_mut().paralyse(turns, "Death's Door abortion");
        ctx.player_mut().durations.clear(DurationKind::DeathsDoor);
    }
    CastOutcome::Success
}
