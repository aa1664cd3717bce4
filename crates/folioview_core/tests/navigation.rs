use folioview_core::{
    scroll_to_section, FixedLayoutSurface, ScrollBehavior, ScrollSurface, SectionId,
};

const TOLERANCE: f64 = 0.5;

#[test]
fn every_section_aligns_with_the_container_top() {
    let mut surface = FixedLayoutSurface::full_page(800.0);

    for id in SectionId::ALL {
        scroll_to_section(&mut surface, id);

        let expected = surface
            .section_top(id)
            .unwrap()
            .min(surface.scrollable_extent());
        assert!(
            (surface.offset() - expected).abs() <= TOLERANCE,
            "section {id} landed at {} instead of {expected}",
            surface.offset()
        );
    }
}

#[test]
fn bottom_section_clamps_to_scrollable_extent() {
    // Skills is taller than the remaining scroll range when sections are
    // uneven; the landing offset must clamp instead of overshooting.
    let mut surface = FixedLayoutSurface::new(
        700.0,
        &[
            (SectionId::Home, 700.0),
            (SectionId::About, 500.0),
            (SectionId::Projects, 900.0),
            (SectionId::Skills, 400.0),
        ],
    );

    scroll_to_section(&mut surface, SectionId::Skills);

    assert_eq!(surface.offset(), surface.scrollable_extent());
}

#[test]
fn missing_section_is_a_silent_no_op() {
    let mut surface = FixedLayoutSurface::new(
        600.0,
        &[(SectionId::Home, 600.0), (SectionId::Projects, 1200.0)],
    );
    surface.scroll_to(250.0, ScrollBehavior::Auto);

    scroll_to_section(&mut surface, SectionId::About);

    assert_eq!(surface.offset(), 250.0);
}

#[test]
fn navigating_back_to_home_returns_to_top() {
    let mut surface = FixedLayoutSurface::full_page(800.0);

    scroll_to_section(&mut surface, SectionId::Skills);
    assert!(surface.offset() > 0.0);

    scroll_to_section(&mut surface, SectionId::Home);
    assert_eq!(surface.offset(), 0.0);
}
