//! Multi-tile objects and their render slices

/// Object kinds, footprints and identifiers
pub mod kinds;
/// Identifier pool and footprint placement
pub mod placer;
/// Draw-ordered slice list
pub mod slices;
