//! Placeable object kinds, their footprints and slice geometry

use std::fmt;
use std::str::FromStr;

use crate::io::configuration::SLICE_WIDTH;
use crate::io::error::{CityError, invalid_parameter};

/// Identifier of a placed object, drawn from a bounded pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(u32);

impl ObjectId {
    /// Wrap a pool index
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Pool index of this identifier
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Kind of placeable object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    /// Single-tile tree
    Tree,
    /// Single tile with a sprite wider than its tile
    Statue,
    /// Two tiles wide, one deep
    Hedge,
    /// Two by two tiles
    House,
    /// Three tiles wide, two deep
    Warehouse,
}

impl ObjectKind {
    /// Every kind in index order
    pub const ALL: [Self; 5] = [
        Self::Tree,
        Self::Statue,
        Self::Hedge,
        Self::House,
        Self::Warehouse,
    ];

    /// Footprint as (width in columns, height in rows)
    pub const fn footprint(self) -> (usize, usize) {
        match self {
            Self::Tree | Self::Statue => (1, 1),
            Self::Hedge => (2, 1),
            Self::House => (2, 2),
            Self::Warehouse => (3, 2),
        }
    }

    /// Width of the object's sprite in unscaled pixels
    pub const fn visual_width(self) -> u32 {
        match self {
            Self::Tree => 128,
            Self::Statue => 192,
            Self::Hedge | Self::House => 256,
            Self::Warehouse => 384,
        }
    }

    /// Number of render slices the sprite is cut into
    pub const fn slice_count(self) -> usize {
        let count = self.visual_width().div_ceil(SLICE_WIDTH) as usize;
        if count == 0 { 1 } else { count }
    }

    /// Column step between consecutive slices
    pub const fn slice_stride(self) -> usize {
        let stride = self.footprint().0.div_ceil(self.slice_count());
        if stride == 0 { 1 } else { stride }
    }

    /// Lowercase name used on the command line
    pub const fn name(self) -> &'static str {
        match self {
            Self::Tree => "tree",
            Self::Statue => "statue",
            Self::Hedge => "hedge",
            Self::House => "house",
            Self::Warehouse => "warehouse",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ObjectKind {
    type Err = CityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| invalid_parameter("object", &s, &"unknown object kind"))
    }
}
