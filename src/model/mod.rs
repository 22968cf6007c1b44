//! City model and update cycle
//!
//! This module contains:
//! - The city facade that keeps mods and slices consistent with edits
//! - Edit records queued by input handling
//! - Shared single-writer access with a FIFO edit queue
//! - Rolling update timing

/// City facade over grid, autotiler and placer
pub mod city;
/// Terrain and object edit records
pub mod edits;
/// Shared access and update cycles
pub mod shared;
/// Rolling average of update durations
pub mod timing;

pub use city::CityModel;
