//! Object identity allocation and slice list maintenance

use std::fmt;

use bitvec::prelude::*;

use crate::objects::kinds::{ObjectId, ObjectKind};
use crate::objects::slices::{ObjectSlice, SliceList};
use crate::spatial::grid::{GridStore, TileRegion};

/// Reasons a placement is refused; none of them leave side effects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Every identifier of the pool is in use
    PoolExhausted {
        /// Size of the identifier pool
        capacity: usize,
    },
    /// The footprint does not fit inside the grid
    OutOfBounds {
        /// Requested anchor row
        row: usize,
        /// Requested anchor column
        col: usize,
        /// Kind that was being placed
        kind: ObjectKind,
    },
    /// The footprint overlaps an object that is already placed
    Occupied {
        /// Requested anchor row
        row: usize,
        /// Requested anchor column
        col: usize,
        /// Kind that was being placed
        kind: ObjectKind,
    },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PoolExhausted { capacity } => {
                write!(f, "All {capacity} object identifiers are in use")
            }
            Self::OutOfBounds { row, col, kind } => {
                write!(f, "A {kind} at ({row}, {col}) does not fit inside the grid")
            }
            Self::Occupied { row, col, kind } => {
                write!(f, "A {kind} at ({row}, {col}) overlaps a placed object")
            }
        }
    }
}

impl std::error::Error for PlacementError {}

/// Bounded pool of object identifiers handing out the lowest free id
#[derive(Debug, Clone)]
pub struct IdPool {
    used: BitVec,
    count: usize,
}

impl IdPool {
    /// Create a pool with `capacity` identifiers
    pub fn new(capacity: usize) -> Self {
        Self {
            used: bitvec![0; capacity],
            count: 0,
        }
    }

    /// Number of identifiers handed out
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Size of the pool
    pub fn capacity(&self) -> usize {
        self.used.len()
    }

    /// Test if every identifier is in use
    pub fn is_full(&self) -> bool {
        self.count >= self.capacity()
    }

    /// Test if an identifier is in use
    pub fn contains(&self, id: ObjectId) -> bool {
        self.used.get(id.index()).as_deref() == Some(&true)
    }

    /// Claim the lowest free identifier
    ///
    /// Returns `None` when the pool is full.
    ///
    /// # Panics
    ///
    /// Panics if the pool reports free capacity but no free identifier can
    /// be found. This means the accounting is corrupted and cannot be
    /// recovered from.
    #[allow(clippy::panic)]
    pub fn allocate(&mut self) -> Option<ObjectId> {
        if self.is_full() {
            return None;
        }

        let Some(index) = self.used.first_zero() else {
            panic!(
                "object id pool corrupted: {} of {} ids counted but no free id found",
                self.count,
                self.capacity()
            );
        };

        self.used.set(index, true);
        self.count += 1;
        Some(ObjectId::new(index as u32))
    }
}

/// Places multi-tile objects and keeps the global slice list ordered
#[derive(Debug, Clone)]
pub struct ObjectPlacer {
    pool: IdPool,
    slices: SliceList,
}

impl ObjectPlacer {
    /// Create a placer with room for `max_objects` objects
    pub fn new(max_objects: usize) -> Self {
        Self {
            pool: IdPool::new(max_objects),
            slices: SliceList::new(),
        }
    }

    /// Number of placed objects
    pub const fn object_count(&self) -> usize {
        self.pool.count()
    }

    /// Size of the identifier pool
    pub fn capacity(&self) -> usize {
        self.pool.capacity()
    }

    /// Draw-ordered slices of every placed object
    pub const fn slices(&self) -> &SliceList {
        &self.slices
    }

    /// Place an object with its top-left footprint tile at (`row`, `col`)
    ///
    /// # Errors
    ///
    /// Returns an error without touching the grid or the slice list if:
    /// - The identifier pool is exhausted
    /// - The footprint extends past the grid
    /// - The footprint overlaps a placed object
    pub fn place(
        &mut self,
        grid: &mut GridStore,
        row: usize,
        col: usize,
        kind: ObjectKind,
    ) -> Result<ObjectId, PlacementError> {
        if self.pool.is_full() {
            return Err(PlacementError::PoolExhausted {
                capacity: self.pool.capacity(),
            });
        }

        let footprint = footprint_region(row, col, kind);
        if !grid.contains(footprint.max_row, footprint.max_col) {
            return Err(PlacementError::OutOfBounds { row, col, kind });
        }
        if grid.region_occupied(&footprint) {
            return Err(PlacementError::Occupied { row, col, kind });
        }

        let id = self.pool.allocate().ok_or(PlacementError::PoolExhausted {
            capacity: self.pool.capacity(),
        })?;

        for (r, c) in footprint.tiles() {
            grid.set_object_id(r, c, id);
        }

        let run = slice_run(&footprint, id, kind);
        self.slices.insert_run(&run);

        log::debug!(
            "Placed {kind} {id} at ({row}, {col}) with {} slices",
            run.len()
        );
        Ok(id)
    }
}

/// Tiles covered by an object anchored at (`row`, `col`)
pub const fn footprint_region(row: usize, col: usize, kind: ObjectKind) -> TileRegion {
    let (width, height) = kind.footprint();
    TileRegion {
        min_row: row,
        min_col: col,
        max_row: row.saturating_add(height - 1),
        max_col: col.saturating_add(width - 1),
    }
}

/// Slices of one object, walking its columns left to right on the base row
pub fn slice_run(footprint: &TileRegion, id: ObjectId, kind: ObjectKind) -> Vec<ObjectSlice> {
    let stride = kind.slice_stride();
    (0..kind.slice_count())
        .map(|index| ObjectSlice {
            row: footprint.max_row,
            col: (footprint.min_col + index * stride).min(footprint.max_col),
            object: id,
            kind,
            index,
        })
        .collect()
}
