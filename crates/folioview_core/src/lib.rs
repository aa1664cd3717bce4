//! Core behavior model for the folioview single-page portfolio.
//! This crate owns the content data, scroll navigation, progress smoothing
//! and reveal state; render hosts bind it to a real container.

pub mod content;
pub mod logging;
pub mod motion;
pub mod render;
pub mod scroll;
pub mod session;

pub use content::model::{ContentError, Education, Profile, ProjectEntry, SkillGroup};
pub use content::store::ContentStore;
pub use logging::{default_log_level, init_logging, logging_status, LogConfig, LoggingError};
pub use motion::reveal::{
    ease_out_cubic, RevealFrame, RevealPhase, RevealTransition, RevealTrigger,
};
pub use motion::spring::{Spring, SpringConfig};
pub use render::cards::{project_cards, skill_cards, CardLink, ProjectCard, SkillCard};
pub use render::page::{
    build_page, AboutBlock, ConclusionBlock, Hero, NavAction, Navbar, Page, ProjectsBlock,
    Section, SectionBody, SkillsBlock,
};
pub use scroll::navigator::scroll_to_section;
pub use scroll::progress::{raw_progress, ProgressTracker};
pub use scroll::surface::{
    FixedLayoutSurface, ScrollBehavior, ScrollSurface, SectionId, UnknownSectionId,
};
pub use session::{visible_fraction, ScrollSession, SessionFrame};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
