//! Scroll container capability seam.
//!
//! # Responsibility
//! - Abstract the host scroll container behind a trait the rest of the
//!   crate can drive without a UI toolkit.
//! - Provide a deterministic fixed-layout implementation for tests and the
//!   demo binary.
//!
//! # Invariants
//! - `FixedLayoutSurface` offsets are always clamped to
//!   `[0, scrollable_extent()]`.
//! - Section geometry never changes after construction.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Symbolic identifier of one top-level page section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    Home,
    About,
    Projects,
    Skills,
}

impl SectionId {
    /// All sections in page order.
    pub const ALL: [SectionId; 4] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Projects,
        SectionId::Skills,
    ];

    /// Stable string id used in markup anchors and log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Projects => "projects",
            Self::Skills => "skills",
        }
    }

    /// Parses a stable string id back into a section identifier.
    ///
    /// # Errors
    /// - Returns `UnknownSectionId` for anything outside the four known ids.
    pub fn parse(value: &str) -> Result<SectionId, UnknownSectionId> {
        match value.trim().to_ascii_lowercase().as_str() {
            "home" => Ok(Self::Home),
            "about" => Ok(Self::About),
            "projects" => Ok(Self::Projects),
            "skills" => Ok(Self::Skills),
            other => Err(UnknownSectionId(other.to_string())),
        }
    }
}

impl Display for SectionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse failure for a symbolic section id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSectionId(pub String);

impl Display for UnknownSectionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown section id `{}`; expected home|about|projects|skills",
            self.0
        )
    }
}

impl Error for UnknownSectionId {}

/// Scroll motion hint passed to the host container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    /// Jump immediately.
    Auto,
    /// Animate toward the target; trajectory is the host's concern.
    Smooth,
}

/// Host scroll container capability.
///
/// The render host implements this over its real container; in this
/// repository `FixedLayoutSurface` stands in for it deterministically.
pub trait ScrollSurface {
    /// Current scroll offset from the top of the content.
    fn offset(&self) -> f64;

    /// Visible window height.
    fn viewport_height(&self) -> f64;

    /// Total stacked content height.
    fn content_height(&self) -> f64;

    /// Top edge of a section in content coordinates, `None` when the
    /// section is not present in the layout.
    fn section_top(&self, id: SectionId) -> Option<f64>;

    /// Height of a section, `None` when absent from the layout.
    fn section_height(&self, id: SectionId) -> Option<f64>;

    /// Moves the scroll offset; implementations clamp to the valid range.
    fn scroll_to(&mut self, offset: f64, behavior: ScrollBehavior);

    /// Scrollable range beyond the viewport; zero when the content fits.
    fn scrollable_extent(&self) -> f64 {
        (self.content_height() - self.viewport_height()).max(0.0)
    }
}

/// Deterministic in-memory surface with fixed stacked section heights.
#[derive(Debug, Clone)]
pub struct FixedLayoutSurface {
    sections: Vec<(SectionId, f64)>,
    viewport_height: f64,
    offset: f64,
}

impl FixedLayoutSurface {
    /// Builds a surface from `(section, height)` pairs stacked in order.
    pub fn new(viewport_height: f64, sections: &[(SectionId, f64)]) -> Self {
        Self {
            sections: sections.to_vec(),
            viewport_height: viewport_height.max(0.0),
            offset: 0.0,
        }
    }

    /// One full-viewport page per section, mirroring the rendered layout.
    pub fn full_page(viewport_height: f64) -> Self {
        let sections: Vec<(SectionId, f64)> = SectionId::ALL
            .iter()
            .map(|id| (*id, viewport_height))
            .collect();
        Self::new(viewport_height, &sections)
    }

    /// Top and bottom edges of a section in content coordinates.
    pub fn section_bounds(&self, id: SectionId) -> Option<(f64, f64)> {
        let mut top = 0.0;
        for (section, height) in &self.sections {
            if *section == id {
                return Some((top, top + height));
            }
            top += height;
        }
        None
    }
}

impl ScrollSurface for FixedLayoutSurface {
    fn offset(&self) -> f64 {
        self.offset
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    fn content_height(&self) -> f64 {
        self.sections.iter().map(|(_, height)| height).sum()
    }

    fn section_top(&self, id: SectionId) -> Option<f64> {
        self.section_bounds(id).map(|(top, _)| top)
    }

    fn section_height(&self, id: SectionId) -> Option<f64> {
        self.section_bounds(id).map(|(top, bottom)| bottom - top)
    }

    fn scroll_to(&mut self, offset: f64, _behavior: ScrollBehavior) {
        // The simulated container lands instantly; the smooth hint only
        // matters to real hosts animating their own trajectory.
        self.offset = offset.clamp(0.0, self.scrollable_extent());
    }
}

#[cfg(test)]
mod tests {
    use super::{FixedLayoutSurface, ScrollBehavior, ScrollSurface, SectionId};

    #[test]
    fn section_id_round_trips_through_parse() {
        for id in SectionId::ALL {
            assert_eq!(SectionId::parse(id.as_str()), Ok(id));
        }
        assert!(SectionId::parse("contact").is_err());
    }

    #[test]
    fn fixed_layout_stacks_sections_in_order() {
        let surface = FixedLayoutSurface::new(
            600.0,
            &[
                (SectionId::Home, 600.0),
                (SectionId::About, 400.0),
                (SectionId::Projects, 800.0),
            ],
        );

        assert_eq!(surface.section_top(SectionId::Home), Some(0.0));
        assert_eq!(surface.section_top(SectionId::About), Some(600.0));
        assert_eq!(surface.section_top(SectionId::Projects), Some(1000.0));
        assert_eq!(surface.section_top(SectionId::Skills), None);
        assert_eq!(surface.content_height(), 1800.0);
        assert_eq!(surface.scrollable_extent(), 1200.0);
    }

    #[test]
    fn scroll_to_clamps_to_valid_range() {
        let mut surface = FixedLayoutSurface::full_page(500.0);

        surface.scroll_to(-50.0, ScrollBehavior::Auto);
        assert_eq!(surface.offset(), 0.0);

        surface.scroll_to(1_000_000.0, ScrollBehavior::Smooth);
        assert_eq!(surface.offset(), surface.scrollable_extent());
    }
}
