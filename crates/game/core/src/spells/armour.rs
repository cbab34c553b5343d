//! Armour-granting enchantments: ice, bone, and missile deflection.

use crate::state::{
    AttributeKind, DurationKind, EntityId, Genus, God, MessageChannel, Position, Transformation,
};

use super::{CastContext, CastOutcome};

/// Ozocubu's Armour.
pub fn ice_armour(ctx: &mut CastContext<'_, '_>, power: i32, fail: bool) -> CastOutcome {
    if fail {
        return CastOutcome::Fail;
    }

    if ctx.has_duration(DurationKind::IcyArmour) {
        ctx.message("Your icy armour thickens.");
    } else if ctx.player().form == Transformation::IceBeast {
        ctx.message("Your icy body feels more resilient.");
    } else {
        ctx.message("A film of ice covers your body!");
    }

    if ctx.player().attributes.get(AttributeKind::BoneArmour) > 0 {
        ctx.player_mut().attributes.set(AttributeKind::BoneArmour, 0);
        ctx.message("Your corpse armour falls away.");
    }

    let turns = ctx.dice().random_range(40, 50);
    ctx.increase_duration(DurationKind::IcyArmour, turns, 50, None);
    let player = ctx.player_mut();
    player.icy_armour_power = power;
    player.redraw_armour_class = true;
    CastOutcome::Success
}

pub fn remove_ice_armour(ctx: &mut CastContext<'_, '_>) {
    ctx.message_on(MessageChannel::Duration, "Your icy armour melts away.");
    let player = ctx.player_mut();
    player.redraw_armour_class = true;
    player.durations.clear(DurationKind::IcyArmour);
}

/// Counts the remains `harvester` can see and, unless `dry_run`, destroys them.
///
/// Followers of Beogh leave orc remains alone unless `defy_god` is set.
pub fn harvest_corpses(
    ctx: &mut CastContext<'_, '_>,
    harvester: Position,
    dry_run: bool,
    defy_god: bool,
) -> usize {
    let vision = ctx.env.vision();
    let spare_orcs = ctx.player().god == God::Beogh && !defy_god;

    let harvested: Vec<EntityId> = ctx
        .state
        .entities
        .items
        .iter()
        .filter(|item| {
            let Some(genus) = item.remains_genus() else {
                return false;
            };
            if spare_orcs && genus == Genus::Orc {
                return false;
            }
            vision.can_see(harvester, item.position)
        })
        .map(|item| item.id)
        .collect();

    if !dry_run {
        ctx.state.entities.remove_items(&harvested);
    }
    harvested.len()
}

/// Cigotuvi's Embrace: pulls every visible corpse in as a shell of bone.
pub fn corpse_armour(ctx: &mut CastContext<'_, '_>, _power: i32, fail: bool) -> CastOutcome {
    if fail {
        return CastOutcome::Fail;
    }

    let here = ctx.player().position;
    let harvested = harvest_corpses(ctx, here, false, false);
    tracing::debug!(harvested, "corpses harvested");

    if harvested == 0 {
        if harvest_corpses(ctx, here, true, true) > 0 {
            ctx.message("It would be a sin to defile those corpses!");
        } else {
            ctx.message("Nothing appears to happen.");
        }
        // The turn is still spent.
        return CastOutcome::Success;
    }

    let bone = ctx.player().attributes.get(AttributeKind::BoneArmour);
    if bone <= 0 {
        ctx.message("The bodies of the dead rush to embrace you!");
    } else {
        ctx.message("Your shell of carrion and bone grows thicker.");
    }

    if ctx.has_duration(DurationKind::IcyArmour) {
        remove_ice_armour(ctx);
    }

    // sqrt(bone^2 + 9n), rounded randomly.
    let squared = bone * bone + 9 * harvested as i32;
    let thickness = (f64::from(squared).sqrt() + ctx.dice().random_real()) as i32;
    let player = ctx.player_mut();
    player.attributes.set(AttributeKind::BoneArmour, thickness);
    player.redraw_armour_class = true;
    CastOutcome::Success
}

/// Repel Missiles.
pub fn deflection(ctx: &mut CastContext<'_, '_>, _power: i32, fail: bool) -> CastOutcome {
    if fail {
        return CastOutcome::Fail;
    }
    ctx.player_mut()
        .attributes
        .set(AttributeKind::DeflectMissiles, 1);
    ctx.message("You feel very safe from missiles.");
    CastOutcome::Success
}
