//! Demo/smoke entry point.
//!
//! # Responsibility
//! - Verify `folioview_core` wiring with a deterministic scroll pass over
//!   the rendered page model.
//! - Keep output stable for quick local sanity checks.

use folioview_core::{
    build_page, scroll_to_section, ContentStore, FixedLayoutSurface, ScrollSession, SectionBody,
    SectionId,
};

const VIEWPORT_HEIGHT: f64 = 900.0;
const FRAME: f64 = 1.0 / 60.0;
const FRAMES_PER_STOP: usize = 90;

fn main() {
    let store = ContentStore::shared();
    let page = build_page(store);

    println!("folioview_core version={}", folioview_core::core_version());
    println!("brand={}", page.navbar.brand);
    for section in &page.sections {
        println!("section={} blocks={}", section.id, block_count(&section.body));
    }

    let mut surface = FixedLayoutSurface::full_page(VIEWPORT_HEIGHT);
    let mut session = ScrollSession::for_page(&page);

    for id in SectionId::ALL {
        scroll_to_section(&mut surface, id);
        for _ in 0..FRAMES_PER_STOP {
            for block_id in session.tick(&surface, FRAME).newly_revealed {
                println!("revealed={block_id}");
            }
        }
        println!(
            "stop={id} raw={:.2} smooth={:.2}",
            session.raw_progress(),
            session.smooth_progress()
        );
    }

    println!(
        "revealed {}/{} blocks",
        session.revealed_count(),
        session.block_count()
    );
}

fn block_count(body: &SectionBody) -> usize {
    match body {
        // Hero text + portrait animate on mount.
        SectionBody::Hero(_) => 2,
        SectionBody::About(_) => 1,
        SectionBody::Projects(projects) => 1 + projects.cards.len(),
        SectionBody::Skills(skills) => 1 + skills.cards.len(),
    }
}
