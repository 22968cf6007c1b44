//! Discrete edit records queued by input handling and applied once per update

use std::str::FromStr;

use crate::io::error::{CityError, invalid_parameter};
use crate::objects::kinds::ObjectKind;
use crate::spatial::grid::TileRegion;
use crate::terrain::types::TerrainType;

/// Square brush sizes for painting terrain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrushSize {
    /// A single tile
    #[default]
    Square1,
    /// Three by three tiles
    Square3,
    /// Five by five tiles
    Square5,
}

impl BrushSize {
    /// Tiles painted on each side of the centre tile
    pub const fn radius(self) -> usize {
        match self {
            Self::Square1 => 0,
            Self::Square3 => 1,
            Self::Square5 => 2,
        }
    }
}

impl FromStr for BrushSize {
    type Err = CityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" | "1x1" => Ok(Self::Square1),
            "3" | "3x3" => Ok(Self::Square3),
            "5" | "5x5" => Ok(Self::Square5),
            other => Err(invalid_parameter(
                "brush",
                &other,
                &"expected one of 1x1, 3x3, 5x5",
            )),
        }
    }
}

/// Fill of an inclusive rectangle with one terrain type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerrainEdit {
    /// Tiles to fill
    pub region: TileRegion,
    /// Terrain written to every tile
    pub terrain: TerrainType,
    /// Whether the filled tiles accept corner blends
    pub blend: bool,
}

impl TerrainEdit {
    /// Fill a single tile
    pub const fn single(row: usize, col: usize, terrain: TerrainType, blend: bool) -> Self {
        Self {
            region: TileRegion {
                min_row: row,
                min_col: col,
                max_row: row,
                max_col: col,
            },
            terrain,
            blend,
        }
    }

    /// Fill the rectangle between two corners given in any order
    pub fn rect(
        first: (usize, usize),
        second: (usize, usize),
        terrain: TerrainType,
        blend: bool,
    ) -> Self {
        Self {
            region: TileRegion::spanning(first, second),
            terrain,
            blend,
        }
    }

    /// Fill a selection made of one or two picked tiles
    ///
    /// When only the first tile has been picked the edit covers just that tile.
    pub fn from_selection(
        first: (usize, usize),
        second: Option<(usize, usize)>,
        terrain: TerrainType,
        blend: bool,
    ) -> Self {
        Self::rect(first, second.unwrap_or(first), terrain, blend)
    }

    /// Square brush stroke centred on a tile, clipped to a `rows` x `cols` grid
    ///
    /// A centre outside the grid is never pulled back inside it; only the
    /// part of the square that overlaps the grid gets painted.
    pub fn brush(
        center: (usize, usize),
        size: BrushSize,
        rows: usize,
        cols: usize,
        terrain: TerrainType,
        blend: bool,
    ) -> Self {
        let radius = size.radius();
        let last_row = rows.saturating_sub(1).max(center.0);
        let last_col = cols.saturating_sub(1).max(center.1);
        Self::rect(
            (center.0.saturating_sub(radius), center.1.saturating_sub(radius)),
            (
                center.0.saturating_add(radius).min(last_row),
                center.1.saturating_add(radius).min(last_col),
            ),
            terrain,
            blend,
        )
    }
}

/// A structural mutation of the city
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    /// Terrain fill
    Terrain(TerrainEdit),
    /// Object placement anchored at a tile
    PlaceObject {
        /// Anchor row
        row: usize,
        /// Anchor column
        col: usize,
        /// Kind of object to place
        kind: ObjectKind,
    },
}

impl From<TerrainEdit> for Edit {
    fn from(edit: TerrainEdit) -> Self {
        Self::Terrain(edit)
    }
}
