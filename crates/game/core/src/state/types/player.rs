//! The acting player: hit points, timed effects, and spell-specific props.

use arrayvec::ArrayVec;

use super::{Attributes, DurationKind, Durations, EntityId, Position, SpellId};
use crate::config::GameConfig;
use crate::job::Job;
use crate::stasis::FreezeState;

/// Shape the player has magically taken.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Transformation {
    #[default]
    None,
    Spider,
    Blade,
    Statue,
    IceBeast,
    Dragon,
    Lich,
    Bat,
    Pig,
    Appendage,
    Tree,
    Porcupine,
    Wisp,
    Jelly,
    Fungus,
    Shadow,
    Hydra,
}

/// Deity the player worships.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum God {
    #[default]
    NoGod,
    Zin,
    TheShiningOne,
    Kikubaaqudgha,
    Yredelemnul,
    Xom,
    Vehumet,
    Okawaru,
    Makhleb,
    SifMuna,
    Trog,
    Nemelex,
    Elyvilon,
    Lugonu,
    /// Orc god; forbids desecrating orc remains.
    Beogh,
    Jiyva,
    Fedhas,
    Cheibriados,
    Ashenzari,
    Dithmenos,
    Gozag,
    Qazlal,
    Ru,
}

/// Player state read and written by self-enchantments.
///
/// Per-spell data that used to live in loosely typed property storage is
/// kept in explicit fields (`icy_armour_power`, `infusion_power`,
/// `song_of_slaying_bonus`).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerState {
    pub id: EntityId,
    pub job: Job,
    pub position: Position,
    pub hp: i32,
    pub hp_max: i32,
    pub form: Transformation,
    pub god: God,
    pub flying: bool,

    pub durations: Durations,
    pub attributes: Attributes,

    /// Frozen-time state; see [`crate::stasis`].
    pub freeze: FreezeState,

    /// Spell power Ozocubu's Armour was last cast at.
    pub icy_armour_power: i32,
    /// Spell power Infusion was last cast at.
    pub infusion_power: i32,
    /// Slaying bonus accumulated by the current Song of Slaying.
    pub song_of_slaying_bonus: i32,

    /// Memorised spells; the slot index maps to the selection letter.
    pub spells: ArrayVec<SpellId, { GameConfig::MAX_MEMORISED_SPELLS }>,

    /// Monsters currently holding the player entranced.
    pub beholders: Vec<EntityId>,

    /// What most recently paralysed the player.
    pub paralysis_cause: Option<String>,

    /// Set when armour class must be recomputed and redrawn.
    pub redraw_armour_class: bool,
}

impl PlayerState {
    pub fn new(job: Job, position: Position, hp_max: i32) -> Self {
        let hp_max = hp_max.max(1);
        Self {
            id: EntityId::PLAYER,
            job,
            position,
            hp: hp_max,
            hp_max,
            form: Transformation::None,
            god: God::NoGod,
            flying: false,
            durations: Durations::new(),
            attributes: Attributes::new(),
            freeze: FreezeState::default(),
            icy_armour_power: 0,
            infusion_power: 0,
            song_of_slaying_bonus: 0,
            spells: ArrayVec::new(),
            beholders: Vec::new(),
            paralysis_cause: None,
            redraw_armour_class: false,
        }
    }

    pub fn with_god(mut self, god: God) -> Self {
        self.god = god;
        self
    }

    pub fn with_form(mut self, form: Transformation) -> Self {
        self.form = form;
        self
    }

    /// Sets current hit points, never above the maximum.
    pub fn set_hp(&mut self, hp: i32) {
        self.hp = hp.min(self.hp_max);
    }

    /// Permanently lowers maximum hit points, keeping at least one.
    pub fn dec_max_hp(&mut self, amount: i32) {
        self.hp_max = (self.hp_max - amount.max(0)).max(1);
        self.hp = self.hp.min(self.hp_max);
    }

    /// Brings current hit points down to `level` if they exceed it.
    pub fn deflate_hp(&mut self, level: i32) {
        if self.hp > level {
            self.hp = level;
        }
    }

    /// Paralyses the player for `turns` more turns and records the cause.
    pub fn paralyse(&mut self, turns: i32, cause: impl Into<String>) {
        self.durations.increase(DurationKind::Paralysis, turns, 0);
        self.paralysis_cause = Some(cause.into());
    }

    /// Returns true while frozen time is in effect.
    #[inline]
    pub fn is_frozen(&self) -> bool {
        self.freeze.is_active()
    }

    #[inline]
    pub fn beheld(&self) -> bool {
        !self.beholders.is_empty()
    }

    /// Returns the memorised spell at `slot`, if any.
    pub fn spell_in_slot(&self, slot: usize) -> Option<SpellId> {
        self.spells.get(slot).copied()
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new(Job::Wanderer, Position::ORIGIN, 10)
    }
}
