//! Scroll session orchestration.
//!
//! # Responsibility
//! - Wire raw progress, spring smoothing and per-block reveal triggers to
//!   one scroll surface and expose per-frame snapshots.
//!
//! # Invariants
//! - Raw and smoothed progress stay within `[0, 1]` (the spring starts at
//!   rest on the raw value's range endpoints and is over-critically damped).
//! - A block id is reported as newly revealed at most once per session.

use crate::motion::reveal::RevealTrigger;
use crate::motion::spring::{Spring, SpringConfig};
use crate::render::page::{Page, SectionBody};
use crate::scroll::progress::ProgressTracker;
use crate::scroll::surface::{ScrollSurface, SectionId};
use log::info;

/// One reveal-tracked visual block bound to its enclosing section.
#[derive(Debug, Clone)]
struct BlockBinding {
    block_id: String,
    section: SectionId,
    trigger: RevealTrigger,
}

/// Snapshot handed to the render layer after each tick.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionFrame {
    pub raw_progress: f64,
    pub smooth_progress: f64,
    /// Ids of blocks whose reveal fired on this tick, in registration order.
    pub newly_revealed: Vec<String>,
}

/// Per-view-session composition of tracker, smoother and reveal triggers.
pub struct ScrollSession {
    tracker: ProgressTracker,
    spring: Spring,
    blocks: Vec<BlockBinding>,
}

impl ScrollSession {
    /// Creates an empty session with the given spring configuration.
    pub fn new(config: SpringConfig) -> Self {
        Self {
            tracker: ProgressTracker::new(),
            spring: Spring::new(config, 0.0),
            blocks: Vec::new(),
        }
    }

    /// Creates a session with one trigger per intersection-animated block
    /// of the page: the about/projects/skills wrappers and every card.
    ///
    /// Hero blocks animate on mount and are deliberately not registered.
    pub fn for_page(page: &Page) -> Self {
        let mut session = Self::new(SpringConfig::default());
        for section in &page.sections {
            match &section.body {
                SectionBody::Hero(_) => {}
                SectionBody::About(about) => {
                    session.register_block("about", section.id, about.reveal_threshold);
                }
                SectionBody::Projects(projects) => {
                    session.register_block("projects", section.id, projects.reveal_threshold);
                    for card in &projects.cards {
                        session.register_block(
                            &format!("project:{}", card.title),
                            section.id,
                            card.reveal_threshold,
                        );
                    }
                }
                SectionBody::Skills(skills) => {
                    session.register_block("skills", section.id, skills.reveal_threshold);
                    for card in &skills.cards {
                        session.register_block(
                            &format!("skill:{}", card.title),
                            section.id,
                            card.reveal_threshold,
                        );
                    }
                }
            }
        }
        session
    }

    /// Registers one reveal-tracked block.
    pub fn register_block(&mut self, block_id: &str, section: SectionId, threshold: f64) {
        self.blocks.push(BlockBinding {
            block_id: block_id.to_string(),
            section,
            trigger: RevealTrigger::new(threshold),
        });
    }

    /// Advances the session by one frame.
    ///
    /// Reads the surface once, updates raw and smoothed progress, feeds
    /// every reveal trigger its section's visible fraction and reports the
    /// blocks that flipped on this tick.
    pub fn tick(&mut self, surface: &impl ScrollSurface, dt: f64) -> SessionFrame {
        let raw = self.tracker.observe_surface(surface);
        self.spring.set_target(raw);
        let smooth = self.spring.step(dt);

        let mut newly_revealed = Vec::new();
        for binding in &mut self.blocks {
            let fraction = visible_fraction(surface, binding.section);
            if binding.trigger.observe(fraction) {
                info!(
                    "event=block_revealed module=session block={} section={}",
                    binding.block_id, binding.section
                );
                newly_revealed.push(binding.block_id.clone());
            }
        }

        SessionFrame {
            raw_progress: raw,
            smooth_progress: smooth,
            newly_revealed,
        }
    }

    /// Latest raw progress.
    pub fn raw_progress(&self) -> f64 {
        self.tracker.value()
    }

    /// Latest spring-smoothed progress.
    pub fn smooth_progress(&self) -> f64 {
        self.spring.value()
    }

    /// Whether a registered block has revealed; `None` for unknown ids.
    pub fn is_revealed(&self, block_id: &str) -> Option<bool> {
        self.blocks
            .iter()
            .find(|binding| binding.block_id == block_id)
            .map(|binding| binding.trigger.is_revealed())
    }

    /// Number of blocks currently revealed.
    pub fn revealed_count(&self) -> usize {
        self.blocks
            .iter()
            .filter(|binding| binding.trigger.is_revealed())
            .count()
    }

    /// Number of registered blocks.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }
}

/// Fraction of a section currently inside the viewport, relative to the
/// section's own height.
///
/// This is the same signal a host intersection observer would deliver;
/// missing or zero-height sections report `0.0`.
pub fn visible_fraction(surface: &impl ScrollSurface, id: SectionId) -> f64 {
    let (Some(top), Some(height)) = (surface.section_top(id), surface.section_height(id)) else {
        return 0.0;
    };
    if height <= 0.0 {
        return 0.0;
    }

    let viewport_top = surface.offset();
    let viewport_bottom = viewport_top + surface.viewport_height();
    let overlap = (viewport_bottom.min(top + height) - viewport_top.max(top)).max(0.0);
    (overlap / height).clamp(0.0, 1.0)
}
