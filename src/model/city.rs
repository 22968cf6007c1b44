//! City model facade composing grid storage, autotiling and object placement

use crate::io::configuration::MAX_OBJECTS;
use crate::io::error::{Result, invalid_parameter};
use crate::math::random::RandomSelector;
use crate::model::edits::{Edit, TerrainEdit};
use crate::objects::kinds::{ObjectId, ObjectKind};
use crate::objects::placer::{ObjectPlacer, PlacementError};
use crate::objects::slices::SliceList;
use crate::spatial::grid::{GridStore, TerrainFill, TileRegion};
use crate::terrain::autotile::TerrainAutotiler;
use crate::terrain::mods::{ModSlots, TerrainMod};
use crate::terrain::types::TerrainType;

/// Construction parameters for a [`CityModel`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CityConfig {
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
    /// Size of the object identifier pool
    pub max_objects: usize,
    /// Seed for terrain generation and decorations; `None` draws from the OS
    pub seed: Option<u64>,
    /// Initial terrain layer
    pub fill: TerrainFill,
}

impl CityConfig {
    /// Configuration with default pool size, OS seeding and generated terrain
    pub const fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            max_objects: MAX_OBJECTS,
            seed: None,
            fill: TerrainFill::Generated,
        }
    }

    /// Use a fixed seed
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Use a different object pool size
    #[must_use]
    pub const fn with_max_objects(mut self, max_objects: usize) -> Self {
        self.max_objects = max_objects;
        self
    }

    /// Start with every tile set to one terrain type
    #[must_use]
    pub const fn with_uniform_terrain(mut self, terrain: TerrainType) -> Self {
        self.fill = TerrainFill::Uniform(terrain);
        self
    }
}

/// Authoritative terrain and object state of a city
///
/// Rendering code reads through the query methods; all mutation goes
/// through [`Self::set_terrain`], [`Self::set_terrain_region`] and
/// [`Self::add_object`], which keep mods and slices consistent.
#[derive(Debug, Clone)]
pub struct CityModel {
    grid: GridStore,
    autotiler: TerrainAutotiler,
    placer: ObjectPlacer,
}

impl CityModel {
    /// Create a city of `width` x `height` tiles with generated terrain
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or too large
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Self::with_config(CityConfig::new(width, height))
    }

    /// Create a city from a full configuration
    ///
    /// Every tile gets its decoration and mods computed, so the initial map
    /// already satisfies the same invariants as an edited one.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either dimension is zero or exceeds the grid limit
    /// - The object pool size is zero or does not fit an object id
    pub fn with_config(config: CityConfig) -> Result<Self> {
        if config.max_objects == 0 || u32::try_from(config.max_objects).is_err() {
            return Err(invalid_parameter(
                "max_objects",
                &config.max_objects,
                &"must be between 1 and u32::MAX",
            ));
        }

        log::debug!("Create city: {}x{}", config.width, config.height);

        let mut selector = RandomSelector::from_seed(config.seed);
        let mut grid = GridStore::new(config.height, config.width, config.fill, &mut selector)?;
        let mut autotiler = TerrainAutotiler::new(selector);
        let bounds = grid.bounds();
        autotiler.refresh_region(&mut grid, &bounds);

        Ok(Self {
            grid,
            autotiler,
            placer: ObjectPlacer::new(config.max_objects),
        })
    }

    /// Number of columns
    pub const fn width(&self) -> usize {
        self.grid.cols()
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        self.grid.rows()
    }

    /// Check if a tile lies inside the city
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        self.grid.contains(row, col)
    }

    /// Terrain of a tile
    ///
    /// # Panics
    ///
    /// Panics if the tile lies outside the city
    pub fn terrain(&self, row: usize, col: usize) -> TerrainType {
        self.grid.terrain(row, col)
    }

    /// Mod stored in slot `index` of a tile
    ///
    /// # Panics
    ///
    /// Panics if the tile lies outside the city
    pub fn terrain_mod(&self, row: usize, col: usize, index: usize) -> Option<TerrainMod> {
        self.grid.mods(row, col).get(index).copied().flatten()
    }

    /// Every mod slot of a tile
    ///
    /// # Panics
    ///
    /// Panics if the tile lies outside the city
    pub fn mods(&self, row: usize, col: usize) -> &ModSlots {
        self.grid.mods(row, col)
    }

    /// Whether corner blending is enabled for a tile
    pub fn blend_enabled(&self, row: usize, col: usize) -> bool {
        self.grid.blend_enabled(row, col)
    }

    /// Object occupying a tile
    ///
    /// # Panics
    ///
    /// Panics if the tile lies outside the city
    pub fn object_id(&self, row: usize, col: usize) -> Option<ObjectId> {
        self.grid.object_id(row, col)
    }

    /// Draw-ordered slices of every placed object
    pub const fn slices(&self) -> &SliceList {
        self.placer.slices()
    }

    /// Number of placed objects
    pub const fn object_count(&self) -> usize {
        self.placer.object_count()
    }

    /// Size of the object identifier pool
    pub fn object_capacity(&self) -> usize {
        self.placer.capacity()
    }

    /// Read-only view of the underlying grid
    pub const fn grid(&self) -> &GridStore {
        &self.grid
    }

    /// Set the terrain of one tile and refresh its neighbourhood
    pub fn set_terrain(&mut self, row: usize, col: usize, terrain: TerrainType, blend: bool) {
        self.set_terrain_region(row, col, row, col, terrain, blend);
    }

    /// Fill an inclusive rectangle with one terrain type
    ///
    /// Corners may be given in any order and are clamped to the city.
    /// Decorations are redrawn for the filled tiles; mods are recomputed
    /// for the filled tiles and a one-tile halo around them.
    pub fn set_terrain_region(
        &mut self,
        start_row: usize,
        start_col: usize,
        end_row: usize,
        end_col: usize,
        terrain: TerrainType,
        blend: bool,
    ) {
        let Some(region) = self.clamp_region(TileRegion::spanning(
            (start_row, start_col),
            (end_row, end_col),
        )) else {
            return;
        };

        for (row, col) in region.tiles() {
            self.grid.set_terrain(row, col, terrain, blend);
        }
        self.autotiler.refresh_region(&mut self.grid, &region);

        log::debug!("Set {region:?} to {terrain} (blend: {blend})");
    }

    /// Place an object, reporting success
    ///
    /// Failure leaves the city untouched; see [`Self::try_add_object`] for
    /// the reason.
    pub fn add_object(&mut self, row: usize, col: usize, kind: ObjectKind) -> bool {
        self.try_add_object(row, col, kind).is_ok()
    }

    /// Place an object with its top-left footprint tile at (`row`, `col`)
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier pool is exhausted, or the footprint
    /// leaves the city or overlaps a placed object
    pub fn try_add_object(
        &mut self,
        row: usize,
        col: usize,
        kind: ObjectKind,
    ) -> std::result::Result<ObjectId, PlacementError> {
        self.placer.place(&mut self.grid, row, col, kind)
    }

    /// Apply a queued edit, reporting whether it took effect
    pub fn apply(&mut self, edit: &Edit) -> bool {
        match *edit {
            Edit::Terrain(TerrainEdit {
                region,
                terrain,
                blend,
            }) => {
                let applies = self.clamp_region(region).is_some();
                self.set_terrain_region(
                    region.min_row,
                    region.min_col,
                    region.max_row,
                    region.max_col,
                    terrain,
                    blend,
                );
                applies
            }
            Edit::PlaceObject { row, col, kind } => match self.try_add_object(row, col, kind) {
                Ok(_) => true,
                Err(reason) => {
                    log::warn!("Rejected placement: {reason}");
                    false
                }
            },
        }
    }

    /// Recompute every tile's decoration and mods from scratch
    pub fn refresh_all(&mut self) {
        let bounds = self.grid.bounds();
        self.autotiler.refresh_region(&mut self.grid, &bounds);
    }

    /// Clip a region to the city, or `None` if it lies entirely outside
    fn clamp_region(&self, region: TileRegion) -> Option<TileRegion> {
        if region.min_row >= self.height() || region.min_col >= self.width() {
            return None;
        }
        Some(TileRegion {
            max_row: region.max_row.min(self.height() - 1),
            max_col: region.max_col.min(self.width() - 1),
            ..region
        })
    }
}
