use folioview_core::{
    FixedLayoutSurface, ProgressTracker, ScrollBehavior, ScrollSurface, SectionId,
};

#[test]
fn progress_stays_in_unit_range_across_the_valid_offset_sweep() {
    let mut surface = FixedLayoutSurface::full_page(600.0);
    let mut tracker = ProgressTracker::new();
    let extent = surface.scrollable_extent();

    let mut offset = 0.0;
    while offset <= extent {
        surface.scroll_to(offset, ScrollBehavior::Auto);
        let value = tracker.observe_surface(&surface);
        assert!((0.0..=1.0).contains(&value), "progress {value} at {offset}");
        offset += 37.0;
    }
}

#[test]
fn progress_is_exact_at_both_boundaries() {
    let mut surface = FixedLayoutSurface::full_page(600.0);
    let mut tracker = ProgressTracker::new();

    surface.scroll_to(0.0, ScrollBehavior::Auto);
    assert_eq!(tracker.observe_surface(&surface), 0.0);

    surface.scroll_to(surface.scrollable_extent(), ScrollBehavior::Auto);
    assert_eq!(tracker.observe_surface(&surface), 1.0);
}

#[test]
fn non_scrollable_container_reports_zero() {
    // Content fits inside the viewport, so there is no scrollable range.
    let surface = FixedLayoutSurface::new(2000.0, &[(SectionId::Home, 800.0)]);
    let mut tracker = ProgressTracker::new();

    assert_eq!(surface.scrollable_extent(), 0.0);
    assert_eq!(tracker.observe_surface(&surface), 0.0);
}
