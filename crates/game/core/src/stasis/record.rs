use std::collections::BTreeMap;
use std::ops::{Add, AddAssign};

use crate::state::EntityId;

/// Frozen-time counter carried by the player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FreezeState {
    pub remaining_ticks: u32,
}

impl FreezeState {
    #[inline]
    pub fn is_active(&self) -> bool {
        self.remaining_ticks > 0
    }

    pub fn start(&mut self, ticks: u32) {
        self.remaining_ticks = ticks;
    }

    pub fn stop(&mut self) {
        self.remaining_ticks = 0;
    }

    /// Counts one tick down. Returns true if this tick used up the freeze.
    pub fn tick(&mut self) -> bool {
        if self.remaining_ticks == 0 {
            return false;
        }
        self.remaining_ticks -= 1;
        self.remaining_ticks == 0
    }
}

/// Directional impulse in grid units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Velocity {
    pub x: f32,
    pub y: f32,
}

impl Velocity {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Longest per-axis offset [`Velocity::scaled_offset`] returns. Any aim
    /// this far out already lies beyond every map.
    pub const MAX_OFFSET: f32 = (1 << 16) as f32;

    /// Scales both components and rounds half away from zero.
    ///
    /// Vectors longer than [`Velocity::MAX_OFFSET`] on either axis are shrunk
    /// toward zero with their slope kept, so any stored velocity yields an
    /// offset that fits on the grid. Non-finite components are treated as the
    /// dominant direction.
    pub fn scaled_offset(self, scale: f32) -> (i32, i32) {
        let mut x = self.x * scale;
        let mut y = self.y * scale;
        if x.is_nan() {
            x = 0.0;
        }
        if y.is_nan() {
            y = 0.0;
        }
        if x.is_infinite() || y.is_infinite() {
            x = if x.is_infinite() { x.signum() } else { 0.0 };
            y = if y.is_infinite() { y.signum() } else { 0.0 };
        }

        let longest = x.abs().max(y.abs());
        if longest > Self::MAX_OFFSET {
            let shrink = Self::MAX_OFFSET / longest;
            x *= shrink;
            y *= shrink;
        }
        (x.round() as i32, y.round() as i32)
    }
}

impl Add for Velocity {
    type Output = Velocity;
    fn add(self, rhs: Velocity) -> Velocity {
        Velocity::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Velocity {
    fn add_assign(&mut self, rhs: Velocity) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

/// Damage and impulse an entity absorbed while time was stopped.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StasisRecord {
    pub stored_damage: f32,
    pub velocity: Velocity,
}

impl StasisRecord {
    pub fn is_zero(&self) -> bool {
        self.stored_damage == 0.0 && self.velocity == Velocity::ZERO
    }
}

/// Per-entity stasis records for the current freeze.
///
/// Entities without an entry hold an implicit zero record.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StasisLedger {
    records: BTreeMap<EntityId, StasisRecord>,
}

impl StasisLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: EntityId) -> StasisRecord {
        self.records.get(&id).copied().unwrap_or_default()
    }

    pub fn add(&mut self, id: EntityId, damage: f32, impulse: Velocity) {
        let record = self.records.entry(id).or_default();
        record.stored_damage += damage;
        record.velocity += impulse;
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &StasisRecord)> {
        self.records.iter().map(|(id, record)| (*id, record))
    }

    /// Returns true if no entity holds a non-zero record.
    pub fn is_empty(&self) -> bool {
        self.records.values().all(StasisRecord::is_zero)
    }

    /// Zeroes every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}
