//! Per-tile overlay values and their dense asset identifiers

use crate::io::configuration::{DECORATION_COUNT, MOD_CAPACITY};
use crate::terrain::types::TerrainType;

/// Fixed-capacity mod storage for one tile; `None` terminates the sequence
pub type ModSlots = [Option<TerrainMod>; MOD_CAPACITY];

/// Empty mod storage
pub const EMPTY_SLOTS: ModSlots = [None; MOD_CAPACITY];

/// Corner of a tile, also used as the quadrant of a rounded line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    /// Corner shared with the row above and the column to the left
    TopLeft = 0,
    /// Corner shared with the row above and the column to the right
    TopRight = 1,
    /// Corner shared with the row below and the column to the right
    BottomRight = 2,
    /// Corner shared with the row below and the column to the left
    BottomLeft = 3,
}

impl Corner {
    /// Every corner in id order
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomRight,
        Self::BottomLeft,
    ];

    /// Dense index of this corner
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Direction of a straight paved line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineAxis {
    /// Runs along the row
    Horizontal = 0,
    /// Runs along the column
    Vertical = 1,
}

/// A decorative or connectivity overlay drawn on top of a terrain tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerrainMod {
    /// Decoration variant, below [`DECORATION_COUNT`]
    Decoration(u8),
    /// Corner blend of a neighbouring base type into this tile
    Rounded {
        /// Corner the overlay covers
        corner: Corner,
        /// Base type of the neighbouring triangle
        target: TerrainType,
    },
    /// Straight paved-line segment
    StraightLine(LineAxis),
    /// Paved-line bend joining a horizontal and a vertical neighbour
    RoundedLine(Corner),
    /// Straight paved-line segment eased into one corner
    ///
    /// The autotiler never emits these; their ids are reserved so asset
    /// providers can ship the artwork alongside the other line shapes.
    SmoothedLine {
        /// Direction of the segment
        axis: LineAxis,
        /// Corner the segment bends towards
        corner: Corner,
    },
}

const ROUNDED_BASE: usize = DECORATION_COUNT;
const ROUNDED_LINE_BASE: usize = ROUNDED_BASE + TerrainType::ROUNDING_BASES.len() * 4;
const STRAIGHT_LINE_BASE: usize = ROUNDED_LINE_BASE + 4;

const SMOOTHED_LINE_BASE: usize = STRAIGHT_LINE_BASE + 2;

/// Number of distinct mod identifiers
pub const MOD_COUNT: usize = SMOOTHED_LINE_BASE + 2 * 4;

impl TerrainMod {
    /// Dense identifier used to look up overlay assets
    ///
    /// Decorations come first, then four corners per rounding base type,
    /// then the rounded, straight and smoothed paved-line shapes.
    pub const fn id(self) -> usize {
        match self {
            Self::Decoration(variant) => variant as usize,
            Self::Rounded { corner, target } => match target.rounding_index() {
                Some(base) => ROUNDED_BASE + base * 4 + corner.index(),
                // Never emitted for targets without rounding overlays
                None => ROUNDED_BASE + corner.index(),
            },
            Self::RoundedLine(corner) => ROUNDED_LINE_BASE + corner.index(),
            Self::StraightLine(axis) => STRAIGHT_LINE_BASE + axis as usize,
            Self::SmoothedLine { axis, corner } => {
                SMOOTHED_LINE_BASE + axis as usize * 4 + corner.index()
            }
        }
    }

    /// Mod for a dense identifier
    pub fn from_id(id: usize) -> Option<Self> {
        if id < ROUNDED_BASE {
            return u8::try_from(id).ok().map(Self::Decoration);
        }
        if id < ROUNDED_LINE_BASE {
            let offset = id - ROUNDED_BASE;
            let target = TerrainType::ROUNDING_BASES.get(offset / 4).copied()?;
            let corner = Corner::ALL.get(offset % 4).copied()?;
            return Some(Self::Rounded { corner, target });
        }
        if id < STRAIGHT_LINE_BASE {
            return Corner::ALL
                .get(id - ROUNDED_LINE_BASE)
                .copied()
                .map(Self::RoundedLine);
        }
        if id < SMOOTHED_LINE_BASE {
            return match id - STRAIGHT_LINE_BASE {
                0 => Some(Self::StraightLine(LineAxis::Horizontal)),
                _ => Some(Self::StraightLine(LineAxis::Vertical)),
            };
        }
        let offset = id - SMOOTHED_LINE_BASE;
        let axis = match offset / 4 {
            0 => LineAxis::Horizontal,
            1 => LineAxis::Vertical,
            _ => return None,
        };
        let corner = Corner::ALL.get(offset % 4).copied()?;
        Some(Self::SmoothedLine { axis, corner })
    }

    /// Whether this mod describes paved-line connectivity
    pub const fn is_line(self) -> bool {
        matches!(
            self,
            Self::StraightLine(_) | Self::RoundedLine(_) | Self::SmoothedLine { .. }
        )
    }

    /// Pixel offset of the overlay relative to the tile's top-left corner
    /// at unscaled tile size
    pub const fn overlay_offset(self) -> [i32; 2] {
        match self {
            Self::Decoration(0) => [50, 15],
            Self::Decoration(1) => [30, 20],
            Self::Decoration(_) => [30, 25],
            Self::Rounded { corner, .. } => match corner {
                Corner::TopLeft => [27, 0],
                Corner::TopRight => [76, 15],
                Corner::BottomRight => [26, 38],
                Corner::BottomLeft => [0, 15],
            },
            Self::RoundedLine(corner) => match corner {
                Corner::TopLeft => [33, 15],
                Corner::TopRight => [63, 15],
                Corner::BottomRight => [32, 26],
                Corner::BottomLeft => [25, 15],
            },
            Self::StraightLine(_) => [37, 19],
            Self::SmoothedLine { .. } => [39, 22],
        }
    }
}

/// Iterate the mods stored in a slot array up to the `None` sentinel
pub fn active_mods(slots: &ModSlots) -> impl Iterator<Item = TerrainMod> + '_ {
    slots.iter().map_while(|slot| *slot)
}
