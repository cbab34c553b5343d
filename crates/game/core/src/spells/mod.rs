//! Self-enchantment spells.
//!
//! Each handler takes the spell power and whether the cast failed its
//! success roll. A failed cast returns [`CastOutcome::Fail`] before touching
//! anything; transformations check their preconditions first and may
//! [`CastOutcome::Abort`] without costing a turn.
mod armour;
mod buffs;
mod context;
mod forms;
mod memory;
mod vitality;

pub use armour::{corpse_armour, deflection, harvest_corpses, ice_armour, remove_ice_armour};
pub use buffs::{
    cast_blade_of_disaster, cast_infusion, cast_liquefaction, cast_shroud_of_golubria,
    cast_silence, cast_song_of_slaying, cast_swiftness,
};
pub use context::{CastContext, Liquid};
pub use forms::{cast_time_stop, cast_transform};
pub use memory::{AmnesiaOutcome, cast_selective_amnesia};
pub use vitality::{allowed_deaths_door_hp, cast_deaths_door, cast_regen, cast_revivification};

use crate::error::{ErrorContext, ErrorSeverity, GameError};
use crate::state::{SpellId, Transformation};

/// Result of a cast that reached its handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum CastOutcome {
    /// The spell took effect (or fizzled harmlessly); the turn is spent.
    Success,
    /// The success roll failed; the turn is spent but nothing happened.
    Fail,
    /// The spell could not be cast at all; no turn is spent.
    Abort,
}

/// Spells that only affect the caster, keyed by their [`SpellId`].
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::FromRepr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "title_case")]
#[repr(u16)]
pub enum SelfEnchantment {
    DeathsDoor = 1,
    OzocubusArmour,
    CigotuvisEmbrace,
    RepelMissiles,
    Regeneration,
    Revivification,
    Swiftness,
    Infusion,
    SongOfSlaying,
    Silence,
    Liquefaction,
    ShroudOfGolubria,
    SpiderForm,
    BladeHands,
    StatueForm,
    IceForm,
    DragonForm,
    Necromutation,
    HydraForm,
    BladeOfDisaster,
    TimeStop,
}

impl SelfEnchantment {
    pub fn from_spell(spell: SpellId) -> Option<Self> {
        Self::from_repr(spell.0)
    }

    pub fn spell_id(self) -> SpellId {
        SpellId(self as u16)
    }

    /// Form taken by a transformation spell.
    pub fn form(self) -> Option<Transformation> {
        let form = match self {
            Self::SpiderForm => Transformation::Spider,
            Self::BladeHands => Transformation::Blade,
            Self::StatueForm => Transformation::Statue,
            Self::IceForm => Transformation::IceBeast,
            Self::DragonForm => Transformation::Dragon,
            Self::Necromutation => Transformation::Lich,
            Self::HydraForm => Transformation::Hydra,
            _ => return None,
        };
        Some(form)
    }
}

/// Errors raised by the self-enchantment dispatcher.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SpellError {
    #[error("{spell} is not a self-enchantment")]
    NotSelfEnchantment {
        spell: SpellId,
        context: ErrorContext,
    },
}

impl GameError for SpellError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotSelfEnchantment { .. } => ErrorSeverity::Validation,
        }
    }

    fn context(&self) -> Option<&ErrorContext> {
        match self {
            Self::NotSelfEnchantment { context, .. } => Some(context),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotSelfEnchantment { .. } => "SPELL_NOT_SELF_ENCHANTMENT",
        }
    }
}

/// Casts `spell` at `power` on the player.
///
/// # Errors
///
/// Returns [`SpellError::NotSelfEnchantment`] if `spell` is not one of the
/// spells handled here. No handler runs, so nothing but the nonce taken by
/// the context has changed.
pub fn cast_self_enchantment(
    ctx: &mut CastContext<'_, '_>,
    spell: SpellId,
    power: i32,
    fail: bool,
) -> Result<CastOutcome, SpellError> {
    let Some(enchantment) = SelfEnchantment::from_spell(spell) else {
        return Err(SpellError::NotSelfEnchantment {
            spell,
            context: ErrorContext::new(ctx.state.nonce)
                .with_actor(ctx.state.player.id)
                .with_position(ctx.state.player.position),
        });
    };
    tracing::debug!(spell = %enchantment, power, fail, "self-enchantment");

    let outcome = match enchantment {
        SelfEnchantment::DeathsDoor => cast_deaths_door(ctx, power, fail),
        SelfEnchantment::OzocubusArmour => ice_armour(ctx, power, fail),
        SelfEnchantment::CigotuvisEmbrace => corpse_armour(ctx, power, fail),
        SelfEnchantment::RepelMissiles => deflection(ctx, power, fail),
        SelfEnchantment::Regeneration => cast_regen(ctx, power, fail),
        SelfEnchantment::Revivification => cast_revivification(ctx, power, fail),
        SelfEnchantment::Swiftness => cast_swiftness(ctx, power, fail),
        SelfEnchantment::Infusion => cast_infusion(ctx, power, fail),
        SelfEnchantment::SongOfSlaying => cast_song_of_slaying(ctx, power, fail),
        SelfEnchantment::Silence => cast_silence(ctx, power, fail),
        SelfEnchantment::Liquefaction => cast_liquefaction(ctx, power, fail),
        SelfEnchantment::ShroudOfGolubria => cast_shroud_of_golubria(ctx, power, fail),
        SelfEnchantment::BladeOfDisaster => cast_blade_of_disaster(ctx, power, fail),
        SelfEnchantment::TimeStop => cast_time_stop(ctx, power, fail),
        SelfEnchantment::SpiderForm
        | SelfEnchantment::BladeHands
        | SelfEnchantment::StatueForm
        | SelfEnchantment::IceForm
        | SelfEnchantment::DragonForm
        | SelfEnchantment::Necromutation
        | SelfEnchantment::HydraForm => match enchantment.form() {
            Some(form) => cast_transform(ctx, power, form, fail),
            None => CastOutcome::Abort,
        },
    };
    Ok(outcome)
}
