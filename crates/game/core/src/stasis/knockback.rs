//! Pure geometry of a momentum launch.

use crate::state::Position;

use super::Velocity;

/// Number of cells stored damage throws a creature: `floor(log_base(damage))`,
/// never negative.
///
/// Computed by repeated multiplication so exact powers of the base land on
/// the right side of the floor.
pub fn knockback_distance(damage: f32, base: f64) -> u32 {
    if damage.is_nan() || base <= 1.0 {
        return 0;
    }
    let damage = f64::from(damage.min(f32::MAX));
    let mut distance = 0;
    let mut threshold = base;
    while damage >= threshold {
        distance += 1;
        threshold *= base;
    }
    distance
}

/// Cell the launch is aimed at: the origin displaced by the scaled velocity.
pub fn launch_target(origin: Position, velocity: Velocity, scale: f32) -> Position {
    let (dx, dy) = velocity.scaled_offset(scale);
    origin.offset(dx, dy)
}

/// Outcome of walking a launch path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KnockbackPath {
    /// Last cell entered; the origin if nothing was entered.
    pub landing: Position,
    /// Last cell examined, whether entered or not.
    pub probed: Position,
    /// Cell that stopped the walk early.
    pub obstacle: Option<Position>,
}

impl KnockbackPath {
    /// Returns true if the walk examined any cell at all.
    pub fn moved_from(&self, origin: Position) -> bool {
        self.probed != origin
    }
}

/// Walks `steps` from `origin`, entering each cell `accepts` allows and
/// stopping at the first it rejects.
pub fn walk_path<I, F>(origin: Position, steps: I, mut accepts: F) -> KnockbackPath
where
    I: IntoIterator<Item = Position>,
    F: FnMut(Position) -> bool,
{
    let mut path = KnockbackPath {
        landing: origin,
        probed: origin,
        obstacle: None,
    };
    for cell in steps {
        path.probed = cell;
        if cell == path.landing || !accepts(cell) {
            path.obstacle = Some(cell);
            break;
        }
        path.landing = cell;
    }
    path
}
