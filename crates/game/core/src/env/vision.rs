//! Visibility queries.

use crate::state::Position;

use super::{MapOracle, RayWalk};

/// Answers whether an observer at one cell can see another cell.
pub trait VisionOracle: Send + Sync {
    fn can_see(&self, viewer: Position, target: Position) -> bool;
}

/// Reference [`VisionOracle`]: a square sight radius with sight lines that
/// stop at solid terrain. The blocking cell itself is visible.
pub struct LineOfSight<'a, M: MapOracle + ?Sized> {
    map: &'a M,
    radius: u32,
}

impl<'a, M: MapOracle + ?Sized> LineOfSight<'a, M> {
    pub fn new(map: &'a M, radius: u32) -> Self {
        Self { map, radius }
    }
}

impl<M: MapOracle + ?Sized> VisionOracle for LineOfSight<'_, M> {
    fn can_see(&self, viewer: Position, target: Position) -> bool {
        if viewer.chebyshev_distance(target) > self.radius {
            return false;
        }
        let Some(walk) = RayWalk::new(viewer, target) else {
            return true;
        };
        for cell in walk {
            if cell == target {
                return true;
            }
            if self.map.cell_is_solid(cell) {
                return false;
            }
        }
        false
    }
}
