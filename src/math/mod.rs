//! Mathematical utilities for terrain generation

/// Seeded random selection
pub mod random;
