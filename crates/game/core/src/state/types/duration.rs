//! Timed player effects and persistent numeric attributes.
//!
//! # Time Units
//!
//! Durations are stored in time units, with [`GameConfig::BASELINE_DELAY`]
//! units per normal-speed turn. Spell handlers speak in turns and the store
//! converts, so a 5-turn effect is stored as 50.

use strum::EnumCount;

use crate::config::GameConfig;

/// Timed effects the player can be under.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumCount,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum DurationKind {
    DeathsDoor,
    IcyArmour,
    Regeneration,
    Swiftness,
    Infusion,
    SongOfSlaying,
    Silence,
    Liquefying,
    ShroudOfGolubria,
    BladeOfDisaster,
    /// Debuff left behind when frozen time resumes.
    Exhausted,
    Paralysis,
}

impl DurationKind {
    #[inline]
    const fn as_index(self) -> usize {
        self as usize
    }
}

/// Remaining time of every [`DurationKind`], in time units.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Durations {
    remaining: [i32; DurationKind::COUNT],
}

impl Durations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remaining time units, zero when inactive.
    #[inline]
    pub fn get(&self, kind: DurationKind) -> i32 {
        self.remaining[kind.as_index()]
    }

    /// Remaining whole turns.
    pub fn turns(&self, kind: DurationKind) -> i32 {
        self.get(kind) / GameConfig::BASELINE_DELAY
    }

    #[inline]
    pub fn is_active(&self, kind: DurationKind) -> bool {
        self.get(kind) > 0
    }

    /// Overwrites the raw time-unit value.
    pub fn set_raw(&mut self, kind: DurationKind, units: i32) {
        self.remaining[kind.as_index()] = units.max(0);
    }

    pub fn clear(&mut self, kind: DurationKind) {
        self.set_raw(kind, 0);
    }

    /// Replaces the duration with `turns`, clamped to `cap` turns when `cap > 0`.
    pub fn set(&mut self, kind: DurationKind, turns: i32, cap: i32) {
        self.clear(kind);
        self.increase(kind, turns, cap);
    }

    /// Extends the duration by `turns`, clamped to `cap` turns when `cap > 0`.
    ///
    /// The cap bounds the total, not the increment, so recasting an effect that
    /// is already at its cap leaves it unchanged.
    pub fn increase(&mut self, kind: DurationKind, turns: i32, cap: i32) {
        let cap = cap * GameConfig::BASELINE_DELAY;
        let slot = &mut self.remaining[kind.as_index()];
        *slot = slot.saturating_add(turns * GameConfig::BASELINE_DELAY);
        if cap > 0 && *slot > cap {
            *slot = cap;
        }
    }

    /// Counts every active duration down by `units`, stopping at zero.
    pub fn decay(&mut self, units: i32) {
        for slot in self.remaining.iter_mut() {
            *slot = (*slot - units).max(0);
        }
    }
}

/// Persistent numeric attributes that are not timed.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumCount,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum AttributeKind {
    /// Layers of corpse armour.
    BoneArmour,
    /// Non-zero while missiles are being deflected.
    DeflectMissiles,
    /// Swiftness duration at cast time, used to scale the slowdown afterwards.
    Swiftness,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attributes {
    values: [i32; AttributeKind::COUNT],
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, kind: AttributeKind) -> i32 {
        self.values[kind as usize]
    }

    pub fn set(&mut self, kind: AttributeKind, value: i32) {
        self.values[kind as usize] = value;
    }
}
