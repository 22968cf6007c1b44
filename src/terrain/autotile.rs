//! Derivation of per-tile decorations, corner blends and paved-line shapes
//!
//! The mod pass is a pure function of the terrain in a tile's
//! 8-neighbourhood. Only the decoration pass draws randomness.

use crate::io::configuration::{DECORATION_COUNT, DECORATION_WEIGHTS, MOD_CAPACITY};
use crate::math::random::RandomSelector;
use crate::spatial::grid::{GridStore, TileRegion};
use crate::terrain::mods::{Corner, EMPTY_SLOTS, LineAxis, ModSlots, TerrainMod};
use crate::terrain::types::TerrainType;

const LEFT: [isize; 2] = [0, -1];
const RIGHT: [isize; 2] = [0, 1];
const UP: [isize; 2] = [-1, 0];
const DOWN: [isize; 2] = [1, 0];

/// One corner triangle seen from the centre tile
struct CornerProbe {
    corner: Corner,
    diagonal: [isize; 2],
    orthogonal: [isize; 2],
}

/// Horizontal neighbours and the two corners each of them can round
const CORNER_PROBES: [([isize; 2], [CornerProbe; 2]); 2] = [
    (
        LEFT,
        [
            CornerProbe {
                corner: Corner::TopLeft,
                diagonal: [-1, -1],
                orthogonal: UP,
            },
            CornerProbe {
                corner: Corner::BottomLeft,
                diagonal: [1, -1],
                orthogonal: DOWN,
            },
        ],
    ),
    (
        RIGHT,
        [
            CornerProbe {
                corner: Corner::TopRight,
                diagonal: [-1, 1],
                orthogonal: UP,
            },
            CornerProbe {
                corner: Corner::BottomRight,
                diagonal: [1, 1],
                orthogonal: DOWN,
            },
        ],
    ),
];

/// Bends checked in priority order: horizontal neighbour first, then vertical
const LINE_BENDS: [([isize; 2], [isize; 2], Corner); 4] = [
    (LEFT, UP, Corner::TopLeft),
    (LEFT, DOWN, Corner::BottomLeft),
    (RIGHT, UP, Corner::TopRight),
    (RIGHT, DOWN, Corner::BottomRight),
];

/// Computes terrain mods from tile neighbourhoods
#[derive(Debug, Clone)]
pub struct TerrainAutotiler {
    selector: RandomSelector,
}

impl TerrainAutotiler {
    /// Create an autotiler drawing decorations from `selector`
    pub const fn new(selector: RandomSelector) -> Self {
        Self { selector }
    }

    /// Redraw the decoration held in slot 0 of a tile
    ///
    /// Decoration-eligible tiles draw a weighted variant, where the last
    /// weight bucket means "no decoration". Other tiles have slot 0 cleared.
    pub fn recompute_decoration(&mut self, grid: &mut GridStore, row: usize, col: usize) {
        if !grid.contains(row, col) {
            return;
        }

        let decoration = if grid.terrain(row, col).is_decoration_eligible() {
            let variant = self.selector.weighted_choice(&DECORATION_WEIGHTS);
            (variant < DECORATION_COUNT).then(|| TerrainMod::Decoration(variant as u8))
        } else {
            None
        };

        grid.set_mod(row, col, 0, decoration);
    }

    /// Recompute the blend and connectivity mods of a tile
    ///
    /// A decoration in slot 0 is preserved and the remaining slots are
    /// rebuilt from the current neighbourhood.
    pub fn recompute_mods(&self, grid: &mut GridStore, row: usize, col: usize) {
        if grid.contains(row, col) {
            let slots = compute_mods(grid, row, col);
            grid.set_mods(row, col, slots);
        }
    }

    /// Redraw decorations of every written tile, then recompute mods of the
    /// written tiles and their 8-connected halo
    pub fn refresh_region(&mut self, grid: &mut GridStore, written: &TileRegion) {
        for (row, col) in written.tiles() {
            self.recompute_decoration(grid, row, col);
        }

        let halo = written.with_halo(grid.rows(), grid.cols());
        for (row, col) in halo.tiles() {
            self.recompute_mods(grid, row, col);
        }

        log::trace!("Refreshed mods for {halo:?}");
    }
}

/// Mods of a tile given the current grid contents
///
/// Slot 0 keeps an existing decoration. Corner blends follow, and a paved
/// line tile finishes with its line shape, which takes slot 0 over every
/// other mod when the slots are already full.
pub fn compute_mods(grid: &GridStore, row: usize, col: usize) -> ModSlots {
    let mut slots = EMPTY_SLOTS;
    let mut next = 0;

    if let Some(Some(decoration @ TerrainMod::Decoration(_))) = grid.mods(row, col).first() {
        if let Some(slot) = slots.first_mut() {
            *slot = Some(*decoration);
        }
        next = 1;
    }

    let center = grid.terrain(row, col);

    if grid.blend_enabled(row, col) && center.has_standard_rounding() {
        for corner_mod in corner_blends(grid, row, col, center) {
            if next >= MOD_CAPACITY {
                break;
            }
            if let Some(slot) = slots.get_mut(next) {
                *slot = Some(corner_mod);
            }
            next += 1;
        }
    }

    if center.is_paved_line() {
        if next >= MOD_CAPACITY {
            slots = EMPTY_SLOTS;
            next = 0;
        }
        if let Some(slot) = slots.get_mut(next) {
            *slot = Some(line_shape(grid, row, col));
        }
    }

    slots
}

/// Corner blends contributed by the left and right neighbours, in order
pub fn corner_blends(
    grid: &GridStore,
    row: usize,
    col: usize,
    center: TerrainType,
) -> Vec<TerrainMod> {
    let mut found = Vec::with_capacity(4);

    for (side, probes) in &CORNER_PROBES {
        let Some(neighbor) = grid.terrain_at(row, col, *side) else {
            continue;
        };
        if neighbor.same_base(center) || !neighbor.has_standard_rounding() {
            continue;
        }

        for probe in probes {
            let diagonal = grid.terrain_at(row, col, probe.diagonal);
            let orthogonal = grid.terrain_at(row, col, probe.orthogonal);
            let closes_triangle = diagonal.is_some_and(|t| t.same_base(neighbor))
                && orthogonal.is_some_and(|t| t.same_base(neighbor));

            if closes_triangle {
                found.push(TerrainMod::Rounded {
                    corner: probe.corner,
                    target: neighbor.base(),
                });
            }
        }
    }

    found
}

/// Line shape of a paved-line tile from its 4-connected neighbours
pub fn line_shape(grid: &GridStore, row: usize, col: usize) -> TerrainMod {
    let is_line = |offset: [isize; 2]| {
        grid.terrain_at(row, col, offset)
            .is_some_and(TerrainType::is_paved_line)
    };

    for (horizontal, vertical, quadrant) in LINE_BENDS {
        if is_line(horizontal) && is_line(vertical) {
            return TerrainMod::RoundedLine(quadrant);
        }
    }

    let horizontal = is_line(LEFT) || is_line(RIGHT);
    let vertical = is_line(UP) || is_line(DOWN);

    // An isolated line tile falls back to horizontal
    if vertical && !horizontal {
        TerrainMod::StraightLine(LineAxis::Vertical)
    } else {
        TerrainMod::StraightLine(LineAxis::Horizontal)
    }
}
