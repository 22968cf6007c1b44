//! Input/output for the city grid
//!
//! Error types, constants, the command-line front end and minimap export.

/// Asset lookup contract for renderers
pub mod assets;
/// Command-line interface and run orchestration
pub mod cli;
/// Grid constants and configuration defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// PNG minimap rendering and export
pub mod image;
