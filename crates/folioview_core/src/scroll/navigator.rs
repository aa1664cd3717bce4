//! Section navigation over a scroll surface.
//!
//! # Responsibility
//! - Map a symbolic section id to one smooth scroll action.
//!
//! # Invariants
//! - A section missing from the layout is a silent no-op, never an error.
//! - The landing offset always stays inside the surface's valid range.

use crate::scroll::surface::{ScrollBehavior, ScrollSurface, SectionId};
use log::debug;

/// Smooth-scrolls the surface so the section's top edge aligns with the
/// container's top edge.
///
/// All four ids are statically known to exist in the rendered page, so a
/// missing section is tolerated without any observable effect beyond a
/// debug log line.
pub fn scroll_to_section<S: ScrollSurface>(surface: &mut S, id: SectionId) {
    let Some(top) = surface.section_top(id) else {
        debug!("event=nav_skip module=scroll section={id} reason=section_missing");
        return;
    };

    // Sections near the bottom cannot align exactly; the container clamps,
    // and so does the target we hand it.
    let target = top.clamp(0.0, surface.scrollable_extent());
    surface.scroll_to(target, ScrollBehavior::Smooth);
    debug!("event=nav_scroll module=scroll section={id} target={target:.1}");
}

#[cfg(test)]
mod tests {
    use super::scroll_to_section;
    use crate::scroll::surface::{FixedLayoutSurface, ScrollBehavior, ScrollSurface, SectionId};

    #[test]
    fn missing_section_leaves_offset_untouched() {
        let mut surface =
            FixedLayoutSurface::new(500.0, &[(SectionId::Home, 500.0), (SectionId::About, 500.0)]);
        surface.scroll_to(120.0, ScrollBehavior::Auto);

        scroll_to_section(&mut surface, SectionId::Skills);

        assert_eq!(surface.offset(), 120.0);
    }
}
