//! Tests for decoration, corner blend and paved-line derivation

#[cfg(test)]
mod tests {
    use citygrid::math::random::RandomSelector;
    use citygrid::spatial::grid::{GridStore, TerrainFill, TileRegion};
    use citygrid::terrain::autotile::{TerrainAutotiler, compute_mods, corner_blends, line_shape};
    use citygrid::terrain::mods::{Corner, LineAxis, TerrainMod, active_mods};
    use citygrid::terrain::types::TerrainType;

    fn uniform_grid(rows: usize, cols: usize, terrain: TerrainType) -> GridStore {
        let mut selector = RandomSelector::new(0);
        GridStore::new(rows, cols, TerrainFill::Uniform(terrain), &mut selector)
            .expect("valid dimensions")
    }

    fn paint(grid: &mut GridStore, tiles: &[(usize, usize)], terrain: TerrainType) {
        for &(row, col) in tiles {
            grid.set_terrain(row, col, terrain, true);
        }
    }

    // Tests a corner blends only when the whole triangle matches
    // Verified by dropping the orthogonal neighbour check
    #[test]
    fn test_corner_blend_requires_full_triangle() {
        let mut grid = uniform_grid(3, 3, TerrainType::Dirt);
        paint(&mut grid, &[(1, 0), (0, 0), (0, 1)], TerrainType::Sand);

        assert_eq!(
            corner_blends(&grid, 1, 1, TerrainType::Dirt),
            vec![TerrainMod::Rounded {
                corner: Corner::TopLeft,
                target: TerrainType::Sand,
            }]
        );

        paint(&mut grid, &[(0, 1)], TerrainType::Dirt);
        assert!(corner_blends(&grid, 1, 1, TerrainType::Dirt).is_empty());
    }

    // Tests variants sharing a base type never blend into each other
    // Verified by comparing raw terrain instead of base types
    #[test]
    fn test_same_base_does_not_blend() {
        let mut grid = uniform_grid(3, 3, TerrainType::Grass);
        paint(&mut grid, &[(1, 0), (0, 0), (0, 1)], TerrainType::TallGrass);

        assert!(corner_blends(&grid, 1, 1, TerrainType::Grass).is_empty());
    }

    // Tests water neither blends nor receives blends
    // Verified by removing the rounding check on the neighbour
    #[test]
    fn test_water_has_no_rounding() {
        let mut grid = uniform_grid(3, 3, TerrainType::Dirt);
        paint(&mut grid, &[(1, 0), (0, 0), (0, 1)], TerrainType::Water);
        assert!(corner_blends(&grid, 1, 1, TerrainType::Dirt).is_empty());

        let mut lake = uniform_grid(3, 3, TerrainType::Sand);
        paint(&mut lake, &[(1, 1)], TerrainType::Water);
        assert_eq!(active_mods(&compute_mods(&lake, 1, 1)).count(), 0);
    }

    // Tests the blend flag suppresses corner blends on a tile
    // Verified by ignoring the blend flag
    #[test]
    fn test_blend_flag_disables_rounding() {
        let mut grid = uniform_grid(3, 3, TerrainType::Dirt);
        paint(&mut grid, &[(1, 0), (0, 0), (0, 1)], TerrainType::Sand);
        grid.set_terrain(1, 1, TerrainType::Dirt, false);

        assert_eq!(active_mods(&compute_mods(&grid, 1, 1)).count(), 0);
    }

    // Tests blends are listed left side first, top before bottom
    // Verified by probing the right neighbour first
    #[test]
    fn test_corner_blend_order() {
        let mut grid = uniform_grid(3, 3, TerrainType::Sand);
        paint(&mut grid, &[(1, 1)], TerrainType::Dirt);

        let corners: Vec<Corner> = corner_blends(&grid, 1, 1, TerrainType::Dirt)
            .into_iter()
            .filter_map(|modifier| match modifier {
                TerrainMod::Rounded { corner, .. } => Some(corner),
                _ => None,
            })
            .collect();
        assert_eq!(
            corners,
            vec![
                Corner::TopLeft,
                Corner::BottomLeft,
                Corner::TopRight,
                Corner::BottomRight
            ]
        );
    }

    // Tests straight and bent line shapes from 4-connected neighbours
    // Verified by checking vertical neighbours before bends
    #[test]
    fn test_line_shapes() {
        let mut grid = uniform_grid(4, 4, TerrainType::Dirt);
        paint(&mut grid, &[(2, 2), (2, 1)], TerrainType::PavedLine);
        assert_eq!(
            line_shape(&grid, 2, 2),
            TerrainMod::StraightLine(LineAxis::Horizontal)
        );

        paint(&mut grid, &[(1, 2)], TerrainType::PavedLine);
        assert_eq!(
            line_shape(&grid, 2, 2),
            TerrainMod::RoundedLine(Corner::TopLeft)
        );
        assert_eq!(
            line_shape(&grid, 1, 2),
            TerrainMod::StraightLine(LineAxis::Vertical)
        );
    }

    // Tests an isolated line tile falls back to horizontal
    // Verified by returning vertical for tiles without neighbours
    #[test]
    fn test_isolated_line_is_horizontal() {
        let mut grid = uniform_grid(3, 3, TerrainType::Paved);
        paint(&mut grid, &[(1, 1)], TerrainType::PavedLine);

        assert_eq!(
            line_shape(&grid, 1, 1),
            TerrainMod::StraightLine(LineAxis::Horizontal)
        );
    }

    // Tests the line mod follows corner blends while slots remain
    // Verified by always writing the line into slot 0
    #[test]
    fn test_line_appended_after_blends() {
        let mut grid = uniform_grid(3, 3, TerrainType::Sand);
        paint(&mut grid, &[(1, 1), (1, 2)], TerrainType::PavedLine);

        let slots = compute_mods(&grid, 1, 1);
        let sand = |corner| TerrainMod::Rounded {
            corner,
            target: TerrainType::Sand,
        };
        assert_eq!(
            slots,
            [
                Some(sand(Corner::TopLeft)),
                Some(sand(Corner::BottomLeft)),
                Some(TerrainMod::StraightLine(LineAxis::Horizontal)),
                None,
            ]
        );
    }

    // Tests a full slot array gives way to the line mod
    // Verified by dropping the line when slots are full
    #[test]
    fn test_line_overwrites_full_slots() {
        let mut grid = uniform_grid(3, 3, TerrainType::Sand);
        paint(&mut grid, &[(1, 1)], TerrainType::PavedLine);

        assert_eq!(corner_blends(&grid, 1, 1, TerrainType::PavedLine).len(), 4);
        assert_eq!(
            compute_mods(&grid, 1, 1),
            [
                Some(TerrainMod::StraightLine(LineAxis::Horizontal)),
                None,
                None,
                None,
            ]
        );
    }

    // Tests an existing decoration keeps slot 0
    // Verified by rebuilding slots from empty
    #[test]
    fn test_decoration_preserved() {
        let mut grid = uniform_grid(3, 3, TerrainType::Dirt);
        paint(&mut grid, &[(1, 0), (0, 0), (0, 1)], TerrainType::Sand);
        grid.set_mod(1, 1, 0, Some(TerrainMod::Decoration(1)));

        let slots = compute_mods(&grid, 1, 1);
        assert_eq!(slots[0], Some(TerrainMod::Decoration(1)));
        assert!(matches!(slots[1], Some(TerrainMod::Rounded { .. })));
        assert_eq!(slots[2], None);
    }

    // Tests the mod pass depends only on terrain
    // Verified by drawing randomness inside compute_mods
    #[test]
    fn test_recompute_is_idempotent() {
        let mut grid = uniform_grid(5, 5, TerrainType::Dirt);
        paint(&mut grid, &[(1, 1), (1, 2), (2, 1)], TerrainType::Sand);
        paint(&mut grid, &[(3, 3), (3, 4)], TerrainType::PavedLine);

        let autotiler = TerrainAutotiler::new(RandomSelector::new(4));
        for (row, col) in grid.bounds().tiles() {
            autotiler.recompute_mods(&mut grid, row, col);
        }
        let first: Vec<_> = grid.bounds().tiles().map(|(r, c)| *grid.mods(r, c)).collect();

        for (row, col) in grid.bounds().tiles() {
            autotiler.recompute_mods(&mut grid, row, col);
        }
        let second: Vec<_> = grid.bounds().tiles().map(|(r, c)| *grid.mods(r, c)).collect();

        assert_eq!(first, second);
    }

    // Tests decorations are drawn only for grass tiles
    // Verified by decorating every written tile
    #[test]
    fn test_decorations_on_grass_only() {
        let mut grid = uniform_grid(8, 8, TerrainType::Grass);
        paint(&mut grid, &[(0, 0), (0, 1), (1, 0)], TerrainType::Dirt);
        let mut autotiler = TerrainAutotiler::new(RandomSelector::new(21));

        let bounds = grid.bounds();
        autotiler.refresh_region(&mut grid, &bounds);

        let mut decorated = 0;
        for (row, col) in grid.bounds().tiles() {
            let slot = grid.mods(row, col)[0];
            if let Some(TerrainMod::Decoration(variant)) = slot {
                assert!(grid.terrain(row, col).is_decoration_eligible());
                assert!(variant < 3);
                decorated += 1;
            }
        }
        assert!(decorated > 0);
        assert!(!matches!(grid.mods(0, 0)[0], Some(TerrainMod::Decoration(_))));
    }

    // Tests a refresh reaches the one-tile halo around the written region
    // Verified by recomputing only the written tiles
    #[test]
    fn test_refresh_covers_halo() {
        let mut grid = uniform_grid(5, 5, TerrainType::Dirt);
        let mut autotiler = TerrainAutotiler::new(RandomSelector::new(8));
        paint(&mut grid, &[(0, 0), (0, 1), (1, 0)], TerrainType::Sand);

        autotiler.refresh_region(&mut grid, &TileRegion::spanning((0, 0), (1, 0)));

        assert_eq!(
            grid.mods(1, 1)[0],
            Some(TerrainMod::Rounded {
                corner: Corner::TopLeft,
                target: TerrainType::Sand,
            })
        );
    }
}
