//! Terrain autotiling and multi-tile object placement for isometric city grids
//!
//! A city is a rectangular grid of terrain tiles. Each tile carries a small
//! stack of overlay mods derived from its neighbours (decorations, corner
//! blends and road line shapes), and multi-tile objects are split into
//! draw-ordered vertical slices for back-to-front rendering.

#![forbid(unsafe_code)]

/// Input/output operations, configuration and error handling
pub mod io;
/// Random selection utilities
pub mod math;
/// City model facade, queued edits and shared access
pub mod model;
/// Object kinds, identifier pool, placement and render slices
pub mod objects;
/// Grid storage and isometric projection
pub mod spatial;
/// Terrain types, overlay mods and neighbour-driven autotiling
pub mod terrain;

pub use io::error::{CityError, Result};
pub use model::city::{CityConfig, CityModel};
pub use model::shared::SharedCity;
