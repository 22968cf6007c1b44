//! Asset lookup contract between the grid model and a renderer
//!
//! The model only hands out terrain and mod identifiers. A renderer owns an
//! asset provider that maps them to whatever handle it draws with.

use crate::io::error::{Result, invalid_parameter};
use crate::terrain::mods::{MOD_COUNT, TerrainMod};
use crate::terrain::types::TerrainType;

/// Maps terrain and mod identifiers to renderable handles
pub trait AssetProvider {
    /// Renderer-specific resource handle
    type Handle;

    /// Handle drawn for a terrain tile
    fn terrain_asset(&self, terrain: TerrainType) -> &Self::Handle;

    /// Handle drawn for a mod overlay
    fn mod_asset(&self, modifier: TerrainMod) -> &Self::Handle;

    /// Pixel offset of a mod overlay from the tile's top-left corner
    fn overlay_offset(&self, modifier: TerrainMod) -> [i32; 2] {
        modifier.overlay_offset()
    }
}

/// Owned table of handles indexed by terrain index and mod id
#[derive(Debug, Clone)]
pub struct AssetTable<H> {
    terrain: Vec<H>,
    mods: Vec<H>,
}

impl<H> AssetTable<H> {
    /// Build every handle up front
    pub fn from_fn(
        terrain_handle: impl FnMut(TerrainType) -> H,
        mod_handle: impl FnMut(TerrainMod) -> H,
    ) -> Self {
        let terrain = TerrainType::ALL
            .into_iter()
            .map(terrain_handle)
            .collect();
        let mods = (0..MOD_COUNT)
            .filter_map(TerrainMod::from_id)
            .map(mod_handle)
            .collect();
        Self { terrain, mods }
    }

    /// Build a table from handles already ordered by index and id
    ///
    /// # Errors
    ///
    /// Returns an error if either list does not have exactly one handle per
    /// terrain type or mod id
    pub fn from_parts(terrain: Vec<H>, mods: Vec<H>) -> Result<Self> {
        if terrain.len() != TerrainType::COUNT {
            return Err(invalid_parameter(
                "terrain",
                &terrain.len(),
                &format!("expected {} handles", TerrainType::COUNT),
            ));
        }
        if mods.len() != MOD_COUNT {
            return Err(invalid_parameter(
                "mods",
                &mods.len(),
                &format!("expected {MOD_COUNT} handles"),
            ));
        }
        Ok(Self { terrain, mods })
    }

    /// Handle for a terrain type, if present
    pub fn get_terrain(&self, terrain: TerrainType) -> Option<&H> {
        self.terrain.get(terrain.index())
    }

    /// Handle for a mod, if present
    pub fn get_mod(&self, modifier: TerrainMod) -> Option<&H> {
        self.mods.get(modifier.id())
    }
}

impl<H> AssetProvider for AssetTable<H> {
    type Handle = H;

    /// # Panics
    ///
    /// Never panics for tables built with [`AssetTable::from_fn`] or
    /// [`AssetTable::from_parts`], which hold one handle per terrain type
    #[allow(clippy::indexing_slicing)]
    fn terrain_asset(&self, terrain: TerrainType) -> &H {
        &self.terrain[terrain.index()]
    }

    /// # Panics
    ///
    /// Never panics for tables built with [`AssetTable::from_fn`] or
    /// [`AssetTable::from_parts`], which hold one handle per mod id
    #[allow(clippy::indexing_slicing)]
    fn mod_asset(&self, modifier: TerrainMod) -> &H {
        &self.mods[modifier.id()]
    }
}
