//! Straight lines of travel across the grid.

use crate::state::Position;

/// Line-of-travel service used for launches and sight lines.
pub trait RayOracle: Send + Sync {
    /// Cells visited when travelling from `source` toward `target`, excluding
    /// `source` itself. The sequence continues past `target` without end;
    /// callers bound it with [`Iterator::take`].
    ///
    /// Returns `None` when the ray has no direction (`source == target`).
    fn cast(
        &self,
        source: Position,
        target: Position,
    ) -> Option<Box<dyn Iterator<Item = Position>>>;
}

/// Reference [`RayOracle`] stepping along Bresenham lines.
#[derive(Clone, Copy, Debug, Default)]
pub struct BresenhamRay;

impl RayOracle for BresenhamRay {
    fn cast(
        &self,
        source: Position,
        target: Position,
    ) -> Option<Box<dyn Iterator<Item = Position>>> {
        RayWalk::new(source, target).map(|walk| Box::new(walk) as Box<dyn Iterator<Item = Position>>)
    }
}

/// Unbounded Bresenham walk; the error term repeats with period equal to the
/// source-target span, so the line extends past the target with the same slope.
///
/// The error term is kept in `i64` so any pair of grid positions is walkable;
/// cells saturate at the `i32` bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RayWalk {
    current: Position,
    dx: i64,
    dy: i64,
    step_x: i32,
    step_y: i32,
    err: i64,
}

impl RayWalk {
    pub fn new(source: Position, target: Position) -> Option<Self> {
        if source == target {
            return None;
        }
        let dx = i64::from(source.x.abs_diff(target.x));
        let dy = -i64::from(source.y.abs_diff(target.y));
        Some(Self {
            current: source,
            dx,
            dy,
            step_x: if source.x < target.x { 1 } else { -1 },
            step_y: if source.y < target.y { 1 } else { -1 },
            err: dx + dy,
        })
    }
}

impl Iterator for RayWalk {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        let e2 = 2 * self.err;
        let mut step_x = 0;
        let mut step_y = 0;
        if e2 >= self.dy {
            self.err += self.dy;
            step_x = self.step_x;
        }
        if e2 <= self.dx {
            self.err += self.dx;
            step_y = self.step_y;
        }
        self.current = self.current.offset(step_x, step_y);
        Some(self.current)
    }
}
