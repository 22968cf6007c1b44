//! Tests for the draw-ordered slice list

#[cfg(test)]
mod tests {
    use citygrid::objects::kinds::{ObjectId, ObjectKind};
    use citygrid::objects::slices::{ObjectSlice, SliceList};

    fn slice(row: usize, col: usize, object: u32, index: usize) -> ObjectSlice {
        ObjectSlice {
            row,
            col,
            object: ObjectId::new(object),
            kind: ObjectKind::Tree,
            index,
        }
    }

    fn keys(list: &SliceList) -> Vec<(usize, usize)> {
        list.iter().map(ObjectSlice::key).collect()
    }

    // Tests single inserts keep (col, row) order
    // Verified by ordering on (row, col)
    #[test]
    fn test_insert_orders_by_column_then_row() {
        let mut list = SliceList::new();
        list.insert(slice(0, 3, 0, 0));
        list.insert(slice(5, 1, 1, 0));
        list.insert(slice(2, 1, 2, 0));
        list.insert(slice(9, 0, 3, 0));

        assert_eq!(keys(&list), vec![(0, 9), (1, 2), (1, 5), (3, 0)]);
        assert_eq!(list.len(), 4);
        assert_eq!(list.first().map(|s| s.object), Some(ObjectId::new(3)));
    }

    // Tests a run is merged into an existing list in one pass
    // Verified by restarting each scan from the head
    #[test]
    fn test_insert_run_interleaves() {
        let mut list = SliceList::new();
        list.insert(slice(1, 0, 0, 0));
        list.insert(slice(1, 2, 1, 0));
        list.insert(slice(1, 4, 2, 0));

        list.insert_run(&[slice(1, 1, 3, 0), slice(1, 2, 3, 1), slice(1, 5, 3, 2)]);

        assert_eq!(
            keys(&list),
            vec![(0, 1), (1, 1), (2, 1), (2, 1), (4, 1), (5, 1)]
        );
        let at_two: Vec<u32> = list
            .iter()
            .filter(|s| s.col == 2)
            .map(|s| s.object.index() as u32)
            .collect();
        assert_eq!(at_two, vec![3, 1]);
    }

    // Tests equal keys within one run keep their run order
    // Verified by resetting the cursor after each insertion
    #[test]
    fn test_equal_keys_keep_run_order() {
        let mut list = SliceList::new();
        list.insert_run(&[slice(0, 0, 0, 0), slice(0, 0, 0, 1)]);

        let indices: Vec<usize> = list.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![0, 1]);

        let mut separate = SliceList::new();
        separate.insert(slice(0, 0, 0, 0));
        separate.insert(slice(0, 0, 0, 1));

        let indices: Vec<usize> = separate.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![1, 0]);
    }

    // Tests arena links are exposed for renderers that walk by index
    // Verified by returning the arena order from next
    #[test]
    fn test_index_walk_matches_iterator() {
        let mut list = SliceList::new();
        list.insert(slice(0, 2, 0, 0));
        list.insert(slice(0, 1, 1, 0));

        let mut walked = Vec::new();
        let mut cursor = list.head();
        while let Some(index) = cursor {
            walked.extend(list.get(index).map(ObjectSlice::key));
            cursor = list.next(index);
        }

        assert_eq!(walked, keys(&list));
        assert_eq!(list.head(), Some(1));
        assert!(!list.is_empty());
        assert!(SliceList::new().is_empty());
    }
}
