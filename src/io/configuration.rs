//! Grid constants and runtime configuration defaults

// Per-tile storage
/// Number of mod slots stored per tile
pub const MOD_CAPACITY: usize = 4;

/// Extra candidates drawn past the last terrain type during generation
///
/// Draws landing in this overflow copy the tile above, which streaks
/// the generated field vertically.
pub const GENERATION_OVERDRAW: usize = 2;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

/// Default size of the object identifier pool
pub const MAX_OBJECTS: usize = 1024;

// Decorations
/// Number of decoration variants available for decoration-eligible terrain
pub const DECORATION_COUNT: usize = 3;

/// Relative weight of each decoration variant, followed by the "no decoration" bucket
pub const DECORATION_WEIGHTS: [f64; DECORATION_COUNT + 1] = [3.0, 2.0, 1.0, 14.0];

// Isometric geometry of an unscaled tile, in pixels
/// Unscaled tile width
pub const TILE_WIDTH: u32 = 128;
/// Unscaled tile height
pub const TILE_HEIGHT: u32 = 64;

/// Horizontal pixel span covered by one object slice
pub const SLICE_WIDTH: u32 = TILE_WIDTH;

/// Largest zoom accepted by the isometric projection
pub const MAXIMUM_SCALE_FACTOR: f32 = 2.0;
/// Smallest zoom accepted by the isometric projection
pub const MINIMUM_SCALE_FACTOR: f32 = 0.25;

// Update cycle bookkeeping
/// Number of update cycles averaged by the update timer
pub const TIMING_SAMPLES: usize = 20;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;
/// Default grid width used by the command-line tool
pub const DEFAULT_WIDTH: usize = 64;
/// Default grid height used by the command-line tool
pub const DEFAULT_HEIGHT: usize = 64;
/// Default number of pixels per tile in exported minimaps
pub const DEFAULT_EXPORT_SCALE: u32 = 4;
