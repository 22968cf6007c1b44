//! Tests for isometric projection and zoom handling

#[cfg(test)]
mod tests {
    use citygrid::io::configuration::{MAXIMUM_SCALE_FACTOR, MINIMUM_SCALE_FACTOR};
    use citygrid::spatial::iso::{IsoProjection, is_tile_valid};

    // Tests the default zoom is the largest supported one
    // Verified by defaulting to unit scale
    #[test]
    fn test_default_projection() {
        let projection = IsoProjection::default();
        assert!((projection.scale_factor() - MAXIMUM_SCALE_FACTOR).abs() < f32::EPSILON);
        assert_eq!(projection.tile_height(), 128);
        assert_eq!(projection.tile_width(), 256);
    }

    // Tests zoom is clamped and tile height stays even
    // Verified by rounding the full height instead of the half height
    #[test]
    fn test_scale_factor_clamped() {
        let zoomed_out = IsoProjection::new(0.01);
        assert!((zoomed_out.scale_factor() - MINIMUM_SCALE_FACTOR).abs() < f32::EPSILON);
        assert_eq!(zoomed_out.tile_height(), 16);

        let odd = IsoProjection::new(0.3);
        assert_eq!(odd.tile_height(), 20);
        assert_eq!(odd.tile_width(), 40);
    }

    // Tests scale changes report whether the tile size changed
    // Verified by always returning true
    #[test]
    fn test_set_scale_factor_reports_changes() {
        let mut projection = IsoProjection::new(1.0);
        assert!(!projection.set_scale_factor(1.0));
        assert!(!projection.set_scale_factor(1.01));
        assert!(projection.set_scale_factor(1.5));
        assert_eq!(projection.tile_height(), 96);
    }

    // Tests a non-finite zoom keeps the previous tile size
    // Verified by clamping NaN like any other zoom
    #[test]
    fn test_non_finite_scale_factor_ignored() {
        let mut projection = IsoProjection::new(1.5);
        assert!(!projection.set_scale_factor(f32::NAN));
        assert!(!projection.set_scale_factor(f32::INFINITY));
        assert_eq!(projection.tile_height(), 96);
        assert!((projection.scale_factor() - 1.5).abs() < f32::EPSILON);

        let fresh = IsoProjection::new(f32::NAN);
        assert!(fresh.tile_height() > 0);
        let [x, y] = fresh.tile_to_screen(3, 2);
        let (row, col) = fresh.screen_to_tile(x, y);
        assert!((row - 3.0).abs() < f32::EPSILON);
        assert!((col - 2.0).abs() < f32::EPSILON);
    }

    // Tests tile and screen coordinates convert back and forth
    // Verified by swapping row and column in the projection
    #[test]
    fn test_tile_screen_round_trip() {
        let projection = IsoProjection::new(1.0);

        assert_eq!(projection.tile_to_screen(0, 0), [0, 0]);
        assert_eq!(projection.tile_to_screen(0, 1), [64, 32]);
        assert_eq!(projection.tile_to_screen(1, 0), [-64, 32]);
        assert_eq!(projection.point_to_screen(0.5, 0.5), [0, 32]);

        let (row, col) = projection.screen_to_tile(64, 32);
        assert!(row.abs() < f32::EPSILON);
        assert!((col - 1.0).abs() < f32::EPSILON);
    }

    // Tests visibility culling against the view rectangle
    // Verified by ignoring the tile height below the top edge
    #[test]
    fn test_tile_visibility() {
        let projection = IsoProjection::new(1.0);

        assert!(projection.is_tile_visible(0, 0, 800, 600));
        assert!(projection.is_tile_visible(-60, -60, 800, 600));
        assert!(!projection.is_tile_visible(0, 600, 800, 600));
        assert!(!projection.is_tile_visible(-200, 0, 800, 600));
        assert!(!projection.is_tile_visible(900, 0, 800, 600));
    }

    // Tests fractional tile coordinates against grid bounds
    // Verified by using an inclusive upper bound
    #[test]
    fn test_is_tile_valid() {
        assert!(is_tile_valid(0.0, 0.0, 4, 4));
        assert!(is_tile_valid(3.9, 3.9, 4, 4));
        assert!(!is_tile_valid(-0.1, 1.0, 4, 4));
        assert!(!is_tile_valid(1.0, 4.0, 4, 4));
    }
}
