//! Map data loader.
//!
//! Loads pure terrain data from map RON files. Actor and remains placement is
//! handled separately via scenario files.

use std::path::Path;

use hourglass_core::{GridMap, MapDimensions, Position, TerrainKind};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Map data structure for RON files (terrain only).
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MapDataRon {
    dimensions: (u32, u32),
    /// Terrain for every cell not listed in `tiles`.
    #[serde(default = "default_fill")]
    fill: TerrainKind,
    #[serde(default)]
    tiles: Vec<(i32, i32, TerrainKind)>, // (x, y, terrain)
}

fn default_fill() -> TerrainKind {
    TerrainKind::Floor
}

/// Loader for map data from RON files.
pub struct MapLoader;

impl MapLoader {
    /// Load a map from a RON file.
    pub fn load(path: &Path) -> LoadResult<GridMap> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse map RON into a [`GridMap`].
    ///
    /// Tiles outside the declared dimensions are rejected rather than dropped.
    pub fn parse(content: &str) -> LoadResult<GridMap> {
        let data: MapDataRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse map RON: {}", e))?;

        let (width, height) = data.dimensions;
        if width == 0 || height == 0 {
            return Err(anyhow::anyhow!("Map dimensions must be non-zero, got {width}x{height}"));
        }
        let dimensions = MapDimensions::new(width, height);

        let mut map = GridMap::filled(dimensions, data.fill);
        for (x, y, terrain) in data.tiles {
            let position = Position::new(x, y);
            if !dimensions.contains(position) {
                return Err(anyhow::anyhow!(
                    "Tile ({x}, {y}) lies outside the {width}x{height} map"
                ));
            }
            map.set(position, terrain);
        }

        tracing::debug!(width, height, "map loaded");
        Ok(map)
    }
}
