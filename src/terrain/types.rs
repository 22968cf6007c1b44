//! Terrain variants and their base-type mapping
//!
//! Several cosmetic variants can share one base type. Blending decisions
//! compare base types only, so a tall-grass tile never blends against grass.

use std::fmt;
use std::str::FromStr;

use crate::io::error::{CityError, invalid_parameter};

/// Terrain variant stored per tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TerrainType {
    /// Plain grass
    #[default]
    Grass,
    /// Cosmetic grass variant
    TallGrass,
    /// Bare soil
    Dirt,
    /// Sand
    Sand,
    /// Open water, which has no rounding overlays
    Water,
    /// Paved surface
    Paved,
    /// Paved surface carrying a painted line
    PavedLine,
}

impl TerrainType {
    /// Number of terrain variants
    pub const COUNT: usize = 7;

    /// Every variant in index order
    pub const ALL: [Self; Self::COUNT] = [
        Self::Grass,
        Self::TallGrass,
        Self::Dirt,
        Self::Sand,
        Self::Water,
        Self::Paved,
        Self::PavedLine,
    ];

    /// Base types that ship standard rounding overlays, in mod id order
    pub const ROUNDING_BASES: [Self; 4] = [Self::Grass, Self::Dirt, Self::Sand, Self::Paved];

    /// Dense index of this variant
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Variant for a dense index
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Canonical terrain identity used for blending comparisons
    pub const fn base(self) -> Self {
        match self {
            Self::Grass | Self::TallGrass => Self::Grass,
            Self::PavedLine | Self::Paved => Self::Paved,
            Self::Dirt => Self::Dirt,
            Self::Sand => Self::Sand,
            Self::Water => Self::Water,
        }
    }

    /// Whether this terrain shares a base type with another
    pub const fn same_base(self, other: Self) -> bool {
        self.base() as usize == other.base() as usize
    }

    /// Whether the base type has standard corner rounding overlays
    pub const fn has_standard_rounding(self) -> bool {
        !matches!(self.base(), Self::Water)
    }

    /// Position of the base type within [`Self::ROUNDING_BASES`]
    pub const fn rounding_index(self) -> Option<usize> {
        match self.base() {
            Self::Grass | Self::TallGrass => Some(0),
            Self::Dirt => Some(1),
            Self::Sand => Some(2),
            Self::Paved | Self::PavedLine => Some(3),
            Self::Water => None,
        }
    }

    /// Whether tiles of this terrain draw random decorations
    pub const fn is_decoration_eligible(self) -> bool {
        matches!(self.base(), Self::Grass)
    }

    /// Whether this terrain takes part in paved-line connectivity
    pub const fn is_paved_line(self) -> bool {
        matches!(self, Self::PavedLine)
    }

    /// Lowercase name used on the command line
    pub const fn name(self) -> &'static str {
        match self {
            Self::Grass => "grass",
            Self::TallGrass => "tall-grass",
            Self::Dirt => "dirt",
            Self::Sand => "sand",
            Self::Water => "water",
            Self::Paved => "paved",
            Self::PavedLine => "paved-line",
        }
    }
}

impl fmt::Display for TerrainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TerrainType {
    type Err = CityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|terrain| terrain.name() == wanted)
            .ok_or_else(|| invalid_parameter("terrain", &s, &"unknown terrain type"))
    }
}
