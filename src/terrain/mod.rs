//! Terrain types and their overlay mods

/// Neighbour-driven decoration and mod recomputation
pub mod autotile;
/// Overlay mod identifiers and per-tile slots
pub mod mods;
/// Terrain types and rounding bases
pub mod types;
