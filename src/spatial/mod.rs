//! Spatial data structures and projection
//!
//! This module contains spatial-related functionality including:
//! - Per-tile storage of terrain, mods, blend flags and object ids
//! - Rectangular tile regions
//! - Isometric tile to screen conversion

/// Grid storage and terrain generation
pub mod grid;
/// Isometric projection helpers
pub mod iso;

pub use grid::GridStore;
