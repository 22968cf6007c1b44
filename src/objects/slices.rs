//! Ordered list of object render slices
//!
//! Slices are stored in an arena and linked by index so that inserting a
//! slice never moves existing records. The list is kept sorted by
//! `(col, row)`, which is the order an isometric renderer walks the grid.

use crate::objects::kinds::{ObjectId, ObjectKind};

/// A renderable column strip of a placed object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectSlice {
    /// Row the slice is drawn on (the object's bottom-most row)
    pub row: usize,
    /// Column the slice is drawn on
    pub col: usize,
    /// Object the slice belongs to
    pub object: ObjectId,
    /// Kind of the owning object
    pub kind: ObjectKind,
    /// Position of the slice within its object, left to right
    pub index: usize,
}

impl ObjectSlice {
    /// Draw-order key
    pub const fn key(&self) -> (usize, usize) {
        (self.col, self.row)
    }
}

#[derive(Debug, Clone)]
struct SliceNode {
    slice: ObjectSlice,
    next: Option<usize>,
}

/// Index-linked, draw-ordered slice list
#[derive(Debug, Clone, Default)]
pub struct SliceList {
    nodes: Vec<SliceNode>,
    head: Option<usize>,
}

impl SliceList {
    /// Create an empty list
    pub const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            head: None,
        }
    }

    /// Number of slices in the list
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Test if no slices are present
    pub const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Arena index of the first slice in draw order
    pub const fn head(&self) -> Option<usize> {
        self.head
    }

    /// Slice stored at an arena index
    pub fn get(&self, index: usize) -> Option<&ObjectSlice> {
        self.nodes.get(index).map(|node| &node.slice)
    }

    /// Arena index of the slice following `index` in draw order
    pub fn next(&self, index: usize) -> Option<usize> {
        self.nodes.get(index).and_then(|node| node.next)
    }

    /// First slice in draw order
    pub fn first(&self) -> Option<&ObjectSlice> {
        self.head.and_then(|index| self.get(index))
    }

    /// Iterate slices in draw order
    pub fn iter(&self) -> SliceIter<'_> {
        SliceIter {
            list: self,
            cursor: self.head,
        }
    }

    /// Insert a run of slices sorted by key
    ///
    /// `run` must already be in non-decreasing key order.
    /// Each slice is linked after the last node whose key is strictly less
    /// than its own. The scan resumes from the previous insertion point, so
    /// the slices of one object cost a single pass over the list; once the
    /// tail is reached the remaining slices are appended in order.
    ///
    /// Equal keys within one run therefore keep run order, so a statue's two
    /// slices read 0 then 1. Restarting each scan from the head, as separate
    /// [`Self::insert`] calls do, places every slice before existing equal
    /// keys and would give 1 then 0.
    pub fn insert_run(&mut self, run: &[ObjectSlice]) {
        let mut cursor: Option<usize> = None;

        for slice in run {
            let key = slice.key();
            let mut candidate = match cursor {
                Some(index) => self.next(index),
                None => self.head,
            };

            while let Some(index) = candidate {
                if self.get(index).is_some_and(|existing| existing.key() < key) {
                    cursor = Some(index);
                    candidate = self.next(index);
                } else {
                    break;
                }
            }

            cursor = Some(self.link_after(cursor, *slice));
        }
    }

    /// Insert one slice in key order
    pub fn insert(&mut self, slice: ObjectSlice) {
        self.insert_run(&[slice]);
    }

    /// Store a slice and link it after `previous`, or at the head
    fn link_after(&mut self, previous: Option<usize>, slice: ObjectSlice) -> usize {
        let index = self.nodes.len();
        let successor = match previous {
            Some(prev) => self.next(prev),
            None => self.head,
        };
        self.nodes.push(SliceNode {
            slice,
            next: successor,
        });

        match previous.and_then(|prev| self.nodes.get_mut(prev)) {
            Some(node) => node.next = Some(index),
            None => self.head = Some(index),
        }

        index
    }
}

/// Draw-order iterator over a [`SliceList`]
pub struct SliceIter<'a> {
    list: &'a SliceList,
    cursor: Option<usize>,
}

impl<'a> Iterator for SliceIter<'a> {
    type Item = &'a ObjectSlice;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.cursor?;
        self.cursor = self.list.next(index);
        self.list.get(index)
    }
}

impl<'a> IntoIterator for &'a SliceList {
    type Item = &'a ObjectSlice;
    type IntoIter = SliceIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
