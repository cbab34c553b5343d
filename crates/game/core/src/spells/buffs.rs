//! Timed buffs that only adjust a duration and a few player props.

use crate::state::{AttributeKind, DurationKind};

use super::{CastContext, CastOutcome};

pub fn cast_swiftness(ctx: &mut CastContext<'_, '_>, power: i32, fail: bool) -> CastOutcome {
    if fail {
        return CastOutcome::Fail;
    }

    // Standing in liquid cancels the speed until the player leaves it.
    if let Some(liquid) = ctx.liquid_underfoot() {
        ctx.message(format!("The {liquid} foams!"));
    }

    let turns = 12 + ctx.dice().random2(power) / 2;
    ctx.set_duration(DurationKind::Swiftness, turns, 30, Some("You feel quick."));
    let remaining = ctx.player().durations.get(DurationKind::Swiftness);
    ctx.player_mut()
        .attributes
        .set(AttributeKind::Swiftness, remaining);
    CastOutcome::Success
}

pub fn cast_infusion(ctx: &mut CastContext<'_, '_>, power: i32, fail: bool) -> CastOutcome {
    if fail {
        return CastOutcome::Fail;
    }
    if ctx.has_duration(DurationKind::Infusion) {
        ctx.message("You extend your infusion's duration.");
    } else {
        ctx.message("You begin infusing your attacks with magical energy.");
    }

    let turns = 8 + ctx.dice().roll_dice(2, power);
    ctx.increase_duration(DurationKind::Infusion, turns, 100, None);
    ctx.player_mut().infusion_power = power;
    CastOutcome::Success
}

pub fn cast_song_of_slaying(ctx: &mut CastContext<'_, '_>, power: i32, fail: bool) -> CastOutcome {
    if fail {
        return CastOutcome::Fail;
    }
    if ctx.has_duration(DurationKind::SongOfSlaying) {
        ctx.message("You start a new song!");
    } else {
        ctx.message("You start singing a song of slaying.");
    }

    let turns = 20 + ctx.dice().random2avg(power, 2);
    ctx.set_duration(DurationKind::SongOfSlaying, turns, 0, None);
    ctx.player_mut().song_of_slaying_bonus = 0;
    CastOutcome::Success
}

/// Silence also breaks any entrancement, since beholders need to be heard.
pub fn cast_silence(ctx: &mut CastContext<'_, '_>, power: i32, fail: bool) -> CastOutcome {
    if fail {
        return CastOutcome::Fail;
    }
    ctx.message("A profound silence engulfs you.");

    let dice = ctx.dice();
    let turns = 20 + power / 4 + dice.random2avg(power / 2, 2);
    ctx.increase_duration(DurationKind::Silence, turns, 100, None);

    if ctx.player().beheld() {
        ctx.player_mut().beholders.clear();
        ctx.message("You are no longer entranced.");
    }
    CastOutcome::Success
}

pub fn cast_liquefaction(ctx: &mut CastContext<'_, '_>, power: i32, fail: bool) -> CastOutcome {
    if fail {
        return CastOutcome::Fail;
    }
    ctx.message("The ground around you becomes liquefied!");

    let turns = 10 + ctx.dice().random2avg(power, 2);
    ctx.increase_duration(DurationKind::Liquefying, turns, 100, None);
    CastOutcome::Success
}

pub fn cast_shroud_of_golubria(
    ctx: &mut CastContext<'_, '_>,
    power: i32,
    fail: bool,
) -> CastOutcome {
    if fail {
        return CastOutcome::Fail;
    }
    if ctx.has_duration(DurationKind::ShroudOfGolubria) {
        ctx.message("You renew your shroud.");
    } else {
        ctx.message("Space distorts slightly along a thin shroud covering your body.");
    }

    let turns = 7 + ctx.dice().roll_dice(2, power);
    ctx.increase_duration(DurationKind::ShroudOfGolubria, turns, 50, None);
    CastOutcome::Success
}

pub fn cast_blade_of_disaster(ctx: &mut CastContext<'_, '_>, _power: i32, fail: bool) -> CastOutcome {
    if fail {
        return CastOutcome::Fail;
    }
    ctx.message("You call disaster forth from your blade!");
    ctx.set_duration(DurationKind::BladeOfDisaster, 5, 0, None);
    CastOutcome::Success
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{GridMap, TerrainKind};
    use crate::state::{EntityId, Position};
    use crate::testing::{Harness, state_with};

    #[test]
    fn swiftness_mirrors_duration_into_attribute() {
        let harness = Harness::open();
        let mut state = state_with(Position::new(3, 3), vec![]);
        let mut ctx = CastContext::new(&mut state, harness.env());
        cast_swiftness(&mut ctx, 100, false);

        let units = state.player.durations.get(DurationKind::Swiftness);
        assert!((120..=300).contains(&units));
        assert_eq!(state.player.attributes.get(AttributeKind::Swiftness), units);
        let texts: Vec<_> = state.messages.texts().collect();
        assert_eq!(texts, vec!["You feel quick."]);
    }

    #[test]
    fn swiftness_hints_at_liquid_underfoot() {
        let map = GridMap::open(8, 8)
            .with(Position::new(1, 1), TerrainKind::ShallowWater)
            .with(Position::new(2, 2), TerrainKind::Lava);
        let harness = Harness::new(map);
        let cases = [
            (Position::new(1, 1), false, Some("The water foams!")),
            (Position::new(2, 2), false, Some("The lava foams!")),
            (Position::new(1, 1), true, None),
            (Position::new(4, 4), false, None),
        ];
        for (position, flying, expected) in cases {
            let mut state = state_with(position, vec![]);
            state.player.flying = flying;
            let mut ctx = CastContext::new(&mut state, harness.env());
            cast_swiftness(&mut ctx, 10, false);
            let first = state.messages.texts().next();
            assert_eq!(first, Some(expected.unwrap_or("You feel quick.")));
        }
    }

    #[test]
    fn swiftness_on_liquefied_ground() {
        let harness = Harness::open();
        let mut state = state_with(Position::new(3, 3), vec![]);
        state.player.durations.set(DurationKind::Liquefying, 10, 0);
        let mut ctx = CastContext::new(&mut state, harness.env());
        cast_swiftness(&mut ctx, 10, false);
        assert!(state.messages.contains("The liquid ground foams!"));
    }

    #[test]
    fn infusion_begins_then_extends() {
        let harness = Harness::open();
        let mut state = state_with(Position::ORIGIN, vec![]);
        let mut ctx = CastContext::new(&mut state, harness.env());
        cast_infusion(&mut ctx, 12, false);
        let first = state.player.durations.turns(DurationKind::Infusion);
        assert!((10..=32).contains(&first));

        let mut ctx = CastContext::new(&mut state, harness.env());
        cast_infusion(&mut ctx, 20, false);
        assert!(state.player.durations.turns(DurationKind::Infusion) > first);
        assert_eq!(state.player.infusion_power, 20);
        let texts: Vec<_> = state.messages.texts().collect();
        assert_eq!(
            texts,
            vec![
                "You begin infusing your attacks with magical energy.",
                "You extend your infusion's duration.",
            ]
        );
    }

    #[test]
    fn song_of_slaying_restarts_and_resets_bonus() {
        let harness = Harness::open();
        let mut state = state_with(Position::ORIGIN, vec![]);
        state.player.durations.set(DurationKind::SongOfSlaying, 90, 0);
        state.player.song_of_slaying_bonus = 6;
        let mut ctx = CastContext::new(&mut state, harness.env());
        cast_song_of_slaying(&mut ctx, 10, false);

        let turns = state.player.durations.turns(DurationKind::SongOfSlaying);
        assert!((20..=29).contains(&turns));
        assert_eq!(state.player.song_of_slaying_bonus, 0);
        assert!(state.messages.contains("You start a new song!"));
    }

    #[test]
    fn silence_breaks_entrancement() {
        let harness = Harness::open();
        let mut state = state_with(Position::ORIGIN, vec![]);
        state.player.beholders.push(EntityId(5));
        let mut ctx = CastContext::new(&mut state, harness.env());
        cast_silence(&mut ctx, 40, false);

        let turns = state.player.durations.turns(DurationKind::Silence);
        assert!((30..=50).contains(&turns));
        assert!(!state.player.beheld());
        let texts: Vec<_> = state.messages.texts().collect();
        assert_eq!(
            texts,
            vec!["A profound silence engulfs you.", "You are no longer entranced."]
        );
    }

    #[test]
    fn liquefaction_and_shroud_respect_caps() {
        let harness = Harness::open();
        let mut state = state_with(Position::ORIGIN, vec![]);
        for _ in 0..10 {
            let mut ctx = CastContext::new(&mut state, harness.env());
            cast_liquefaction(&mut ctx, 50, false);
            let mut ctx = CastContext::new(&mut state, harness.env());
            cast_shroud_of_golubria(&mut ctx, 50, false);
        }
        assert_eq!(state.player.durations.turns(DurationKind::Liquefying), 100);
        assert_eq!(state.player.durations.turns(DurationKind::ShroudOfGolubria), 50);
        assert!(state.messages.contains("You renew your shroud."));
        assert!(
            state
                .messages
                .contains("Space distorts slightly along a thin shroud covering your body.")
        );
    }

    #[test]
    fn blade_of_disaster_lasts_five_turns() {
        let harness = Harness::open();
        let mut state = state_with(Position::ORIGIN, vec![]);
        state.player.durations.set(DurationKind::BladeOfDisaster, 2, 0);
        let mut ctx = CastContext::new(&mut state, harness.env());
        cast_blade_of_disaster(&mut ctx, 80, false);
        assert_eq!(state.player.durations.turns(DurationKind::BladeOfDisaster), 5);
    }

    #[test]
    fn failed_buffs_leave_durations_alone() {
        let harness = Harness::open();
        let mut state = state_with(Position::ORIGIN, vec![]);
        let mut ctx = CastContext::new(&mut state, harness.env());
        assert_eq!(cast_swiftness(&mut ctx, 50, true), CastOutcome::Fail);
        assert_eq!(cast_silence(&mut ctx, 50, true), CastOutcome::Fail);
        assert_eq!(cast_infusion(&mut ctx, 50, true), CastOutcome::Fail);
        assert!(!state.player.durations.is_active(DurationKind::Swiftness));
        assert!(state.messages.is_empty());
    }
}
