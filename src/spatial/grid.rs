//! Dense per-tile storage for terrain, mods, blend flags and object ids
//!
//! Each concern lives in its own array so that render passes reading one
//! layer do not drag the others through the cache. The grid never resizes.

use bitvec::prelude::*;
use ndarray::Array2;

use crate::io::configuration::{GENERATION_OVERDRAW, MAX_GRID_DIMENSION};
use crate::io::error::{Result, invalid_parameter};
use crate::math::random::RandomSelector;
use crate::objects::kinds::ObjectId;
use crate::terrain::mods::{EMPTY_SLOTS, ModSlots, TerrainMod};
use crate::terrain::types::TerrainType;

/// Inclusive rectangle of tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileRegion {
    /// First row (inclusive)
    pub min_row: usize,
    /// First column (inclusive)
    pub min_col: usize,
    /// Last row (inclusive)
    pub max_row: usize,
    /// Last column (inclusive)
    pub max_col: usize,
}

impl TileRegion {
    /// Region spanning two corners given in any order
    pub fn spanning(first: (usize, usize), second: (usize, usize)) -> Self {
        Self {
            min_row: first.0.min(second.0),
            min_col: first.1.min(second.1),
            max_row: first.0.max(second.0),
            max_col: first.1.max(second.1),
        }
    }

    /// Check if a tile is within the region
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row >= self.min_row && row <= self.max_row && col >= self.min_col && col <= self.max_col
    }

    /// Grow the region by one tile on every side, clamped to a grid
    #[must_use]
    pub fn with_halo(&self, rows: usize, cols: usize) -> Self {
        Self {
            min_row: self.min_row.saturating_sub(1),
            min_col: self.min_col.saturating_sub(1),
            max_row: (self.max_row + 1).min(rows.saturating_sub(1)),
            max_col: (self.max_col + 1).min(cols.saturating_sub(1)),
        }
    }

    /// Iterate tiles row by row
    pub fn tiles(&self) -> impl Iterator<Item = (usize, usize)> + use<> {
        let (min_col, max_col) = (self.min_col, self.max_col);
        (self.min_row..=self.max_row).flat_map(move |row| (min_col..=max_col).map(move |col| (row, col)))
    }
}

/// How the terrain layer is filled at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TerrainFill {
    /// Randomised, vertically streaked field
    #[default]
    Generated,
    /// Every tile set to one terrain type
    Uniform(TerrainType),
}

/// Authoritative tile state for a fixed-size grid
///
/// Accessors taking `row`/`col` are unchecked: coordinates outside the grid
/// panic. The `*_at` lookups used by neighbourhood scans are checked.
#[derive(Debug, Clone)]
pub struct GridStore {
    terrain: Array2<TerrainType>,
    mods: Array2<ModSlots>,
    blend: BitVec,
    objects: Array2<Option<ObjectId>>,
    dimensions: (usize, usize),
}

impl GridStore {
    /// Allocate a grid and fill its terrain layer
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or exceeds
    /// [`MAX_GRID_DIMENSION`]
    pub fn new(
        height: usize,
        width: usize,
        fill: TerrainFill,
        selector: &mut RandomSelector,
    ) -> Result<Self> {
        validate_dimension("height", height)?;
        validate_dimension("width", width)?;

        let terrain = match fill {
            TerrainFill::Generated => generate_terrain(height, width, selector),
            TerrainFill::Uniform(terrain) => Array2::from_elem((height, width), terrain),
        };

        Ok(Self {
            terrain,
            mods: Array2::from_elem((height, width), EMPTY_SLOTS),
            blend: bitvec![1; height * width],
            objects: Array2::from_elem((height, width), None),
            dimensions: (height, width),
        })
    }

    /// Get the number of rows in the grid
    pub const fn rows(&self) -> usize {
        self.dimensions.0
    }

    /// Get the number of columns in the grid
    pub const fn cols(&self) -> usize {
        self.dimensions.1
    }

    /// Check if a tile lies inside the grid
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row < self.dimensions.0 && col < self.dimensions.1
    }

    /// Terrain of a tile
    ///
    /// # Panics
    ///
    /// Panics if the tile lies outside the grid
    #[allow(clippy::indexing_slicing)]
    pub fn terrain(&self, row: usize, col: usize) -> TerrainType {
        self.terrain[[row, col]]
    }

    /// Mod slots of a tile
    ///
    /// # Panics
    ///
    /// Panics if the tile lies outside the grid
    #[allow(clippy::indexing_slicing)]
    pub fn mods(&self, row: usize, col: usize) -> &ModSlots {
        &self.mods[[row, col]]
    }

    /// Object occupying a tile
    ///
    /// # Panics
    ///
    /// Panics if the tile lies outside the grid
    #[allow(clippy::indexing_slicing)]
    pub fn object_id(&self, row: usize, col: usize) -> Option<ObjectId> {
        self.objects[[row, col]]
    }

    /// Whether corner blending is enabled for a tile
    ///
    /// Returns false for tiles outside the grid.
    pub fn blend_enabled(&self, row: usize, col: usize) -> bool {
        self.contains(row, col)
            && self.blend.get(row * self.cols() + col).as_deref() == Some(&true)
    }

    /// Checked terrain lookup using signed offsets from a tile
    pub fn terrain_at(&self, row: usize, col: usize, offset: [isize; 2]) -> Option<TerrainType> {
        let r = row.checked_add_signed(offset[0])?;
        let c = col.checked_add_signed(offset[1])?;
        self.terrain.get([r, c]).copied()
    }

    /// Overwrite terrain and blend flag of a tile
    ///
    /// Writes outside the grid are ignored.
    pub fn set_terrain(&mut self, row: usize, col: usize, terrain: TerrainType, blend: bool) {
        if let Some(cell) = self.terrain.get_mut([row, col]) {
            *cell = terrain;
            let index = row * self.dimensions.1 + col;
            self.blend.set(index, blend);
        }
    }

    /// Store a single mod value, ignoring writes outside the grid
    pub fn set_mod(&mut self, row: usize, col: usize, slot: usize, value: Option<TerrainMod>) {
        if let Some(cell) = self
            .mods
            .get_mut([row, col])
            .and_then(|slots| slots.get_mut(slot))
        {
            *cell = value;
        }
    }

    /// Replace every mod slot of a tile
    pub fn set_mods(&mut self, row: usize, col: usize, slots: ModSlots) {
        if let Some(cell) = self.mods.get_mut([row, col]) {
            *cell = slots;
        }
    }

    /// Mark a tile as occupied by an object
    pub fn set_object_id(&mut self, row: usize, col: usize, id: ObjectId) {
        if let Some(cell) = self.objects.get_mut([row, col]) {
            *cell = Some(id);
        }
    }

    /// Whether any tile of a region holds an object
    pub fn region_occupied(&self, region: &TileRegion) -> bool {
        region
            .tiles()
            .any(|(row, col)| self.objects.get([row, col]).is_some_and(Option::is_some))
    }

    /// Whole grid as a region
    pub const fn bounds(&self) -> TileRegion {
        TileRegion {
            min_row: 0,
            min_col: 0,
            max_row: self.dimensions.0 - 1,
            max_col: self.dimensions.1 - 1,
        }
    }
}

fn validate_dimension(parameter: &'static str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(invalid_parameter(parameter, &value, &"must be at least 1"));
    }
    if value > MAX_GRID_DIMENSION {
        return Err(invalid_parameter(
            parameter,
            &value,
            &format!("must not exceed {MAX_GRID_DIMENSION}"),
        ));
    }
    Ok(())
}

/// Cheap streaked noise: out-of-range draws copy the tile above
fn generate_terrain(
    height: usize,
    width: usize,
    selector: &mut RandomSelector,
) -> Array2<TerrainType> {
    let mut terrain = Array2::from_elem((height, width), TerrainType::default());

    for row in 0..height {
        for col in 0..width {
            let candidate = selector.index_below(TerrainType::COUNT + GENERATION_OVERDRAW);
            let picked = match TerrainType::from_index(candidate) {
                Some(valid) => valid,
                None if row == 0 => TerrainType::from_index(selector.index_below(TerrainType::COUNT))
                    .unwrap_or_default(),
                None => terrain.get([row - 1, col]).copied().unwrap_or_default(),
            };
            if let Some(cell) = terrain.get_mut([row, col]) {
                *cell = picked;
            }
        }
    }

    terrain
}
