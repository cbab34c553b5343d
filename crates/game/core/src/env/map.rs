use crate::state::Position;

/// Static map oracle exposing immutable level layout.
pub trait MapOracle: Send + Sync {
    fn dimensions(&self) -> MapDimensions;
    fn tile(&self, position: Position) -> Option<StaticTile>;

    fn contains(&self, position: Position) -> bool {
        self.dimensions().contains(position)
    }

    /// Returns true if the cell blocks movement. Cells off the map are solid.
    fn cell_is_solid(&self, position: Position) -> bool {
        self.tile(position).is_none_or(|tile| tile.terrain().is_solid())
    }

    fn terrain(&self, position: Position) -> Option<TerrainKind> {
        self.tile(position).map(StaticTile::terrain)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
}

impl MapDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }
}

/// Immutable descriptor for a tile in the static layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StaticTile {
    terrain: TerrainKind,
}

impl StaticTile {
    pub const fn new(terrain: TerrainKind) -> Self {
        Self { terrain }
    }

    pub fn terrain(self) -> TerrainKind {
        self.terrain
    }
}

/// Canonical terrain classes for static map tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TerrainKind {
    Floor,
    Wall,
    Void,
    Tree,
    ShallowWater,
    DeepWater,
    Lava,
}

impl TerrainKind {
    pub fn is_solid(self) -> bool {
        matches!(self, TerrainKind::Wall | TerrainKind::Void | TerrainKind::Tree)
    }

    pub fn is_water(self) -> bool {
        matches!(self, TerrainKind::ShallowWater | TerrainKind::DeepWater)
    }

    pub fn is_liquid(self) -> bool {
        self.is_water() || self == TerrainKind::Lava
    }
}

/// Owned row-major grid; the reference [`MapOracle`] implementation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridMap {
    dimensions: MapDimensions,
    tiles: Vec<StaticTile>,
}

impl GridMap {
    /// Creates a map filled with `fill`.
    pub fn filled(dimensions: MapDimensions, fill: TerrainKind) -> Self {
        let len = dimensions.width as usize * dimensions.height as usize;
        Self {
            dimensions,
            tiles: vec![StaticTile::new(fill); len],
        }
    }

    /// Creates an all-floor map.
    pub fn open(width: u32, height: u32) -> Self {
        Self::filled(MapDimensions::new(width, height), TerrainKind::Floor)
    }

    /// Overwrites the terrain at `position`; positions off the map are ignored.
    pub fn set(&mut self, position: Position, terrain: TerrainKind) {
        if let Some(index) = self.index(position) {
            self.tiles[index] = StaticTile::new(terrain);
        }
    }

    /// Builder form of [`GridMap::set`].
    pub fn with(mut self, position: Position, terrain: TerrainKind) -> Self {
        self.set(position, terrain);
        self
    }

    fn index(&self, position: Position) -> Option<usize> {
        if !self.dimensions.contains(position) {
            return None;
        }
        Some(position.y as usize * self.dimensions.width as usize + position.x as usize)
    }
}

impl MapOracle for GridMap {
    fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    fn tile(&self, position: Position) -> Option<StaticTile> {
        self.index(position).map(|index| self.tiles[index])
    }
}
