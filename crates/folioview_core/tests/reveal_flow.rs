use folioview_core::{
    build_page, scroll_to_section, ContentStore, FixedLayoutSurface, ScrollSession, SectionId,
};

const FRAME: f64 = 1.0 / 60.0;

fn page_session() -> (ScrollSession, FixedLayoutSurface) {
    let page = build_page(ContentStore::shared());
    let session = ScrollSession::for_page(&page);
    let surface = FixedLayoutSurface::full_page(900.0);
    (session, surface)
}

#[test]
fn session_registers_wrappers_and_every_card() {
    let (session, _) = page_session();

    // 3 section wrappers + 4 project cards + 4 skill cards.
    assert_eq!(session.block_count(), 11);
    assert_eq!(session.is_revealed("about"), Some(false));
    assert_eq!(session.is_revealed("hero"), None);
}

#[test]
fn blocks_reveal_when_their_section_scrolls_into_view() {
    let (mut session, mut surface) = page_session();

    let frame = session.tick(&surface, FRAME);
    assert!(frame.newly_revealed.is_empty());
    assert_eq!(session.revealed_count(), 0);

    scroll_to_section(&mut surface, SectionId::About);
    let frame = session.tick(&surface, FRAME);
    assert_eq!(frame.newly_revealed, vec!["about".to_string()]);

    scroll_to_section(&mut surface, SectionId::Projects);
    let frame = session.tick(&surface, FRAME);
    assert_eq!(frame.newly_revealed.len(), 5);
    assert_eq!(session.is_revealed("projects"), Some(true));
    assert_eq!(
        session.is_revealed("project:Heart Disease Risk Prediction Using Clinical Data"),
        Some(true)
    );
}

#[test]
fn reveals_never_reset_after_scrolling_away() {
    let (mut session, mut surface) = page_session();

    scroll_to_section(&mut surface, SectionId::Skills);
    session.tick(&surface, FRAME);
    let revealed_at_bottom = session.revealed_count();
    assert!(revealed_at_bottom > 0);

    scroll_to_section(&mut surface, SectionId::Home);
    let frame = session.tick(&surface, FRAME);
    assert!(frame.newly_revealed.is_empty());
    assert_eq!(session.revealed_count(), revealed_at_bottom);

    // Returning must not fire the one-shot triggers a second time.
    scroll_to_section(&mut surface, SectionId::Skills);
    let frame = session.tick(&surface, FRAME);
    assert!(frame.newly_revealed.is_empty());
}

#[test]
fn full_scroll_pass_reveals_every_block_and_reaches_full_progress() {
    let (mut session, mut surface) = page_session();

    for id in SectionId::ALL {
        scroll_to_section(&mut surface, id);
        // Let the spring chase the new raw value for a while.
        for _ in 0..120 {
            let frame = session.tick(&surface, FRAME);
            assert!((0.0..=1.0).contains(&frame.raw_progress));
            assert!((0.0..=1.0).contains(&frame.smooth_progress));
        }
    }

    assert_eq!(session.revealed_count(), session.block_count());
    assert_eq!(session.raw_progress(), 1.0);
    assert!((session.smooth_progress() - 1.0).abs() < 1e-3);
}
