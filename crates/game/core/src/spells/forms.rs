//! Transformations and Time Stop.

use crate::stasis;
use crate::state::Transformation;

use super::{CastContext, CastOutcome};

/// Reshapes the player through the environment's [`crate::env::Shapeshifter`].
///
/// Aborts without spending a turn if the form cannot be taken right now or
/// would leave a stat at zero; both checks run before the success roll.
pub fn cast_transform(
    ctx: &mut CastContext<'_, '_>,
    power: i32,
    form: Transformation,
    fail: bool,
) -> CastOutcome {
    let shapeshifter = ctx.env.shapeshifter();
    if !shapeshifter.can_transform(ctx.state, power, form)
        || !shapeshifter.stat_safe(ctx.state, form)
    {
        return CastOutcome::Abort;
    }
    if fail {
        return CastOutcome::Fail;
    }
    shapeshifter.transform(ctx.state, power, form);
    CastOutcome::Success
}

/// Stops time; see [`crate::stasis`].
pub fn cast_time_stop(ctx: &mut CastContext<'_, '_>, power: i32, fail: bool) -> CastOutcome {
    if fail {
        return CastOutcome::Fail;
    }
    let env = ctx.env;
    stasis::begin_freeze(ctx.state, &env, power);
    CastOutcome::Success
}
