//! One-shot reveal state machine and its presentation transition.
//!
//! # Responsibility
//! - Track per-block Hidden→Revealed transitions from visibility input.
//! - Describe the eased opacity/offset/scale interpolation a revealed block
//!   plays once.
//!
//! # Invariants
//! - `Revealed` is terminal; no API path returns a block to `Hidden`.
//! - Transition sampling is pure and clamps to the resting frame.

use log::debug;

/// Reveal lifecycle of one visual block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    /// Initial offset/transparent presentation.
    Hidden,
    /// Resting presentation; terminal.
    Revealed,
}

/// Visibility-threshold trigger for one block.
#[derive(Debug, Clone)]
pub struct RevealTrigger {
    threshold: f64,
    phase: RevealPhase,
}

impl RevealTrigger {
    /// Threshold for content blocks (cards, about columns).
    pub const BLOCK_THRESHOLD: f64 = 0.25;
    /// Threshold for full section wrappers.
    pub const SECTION_THRESHOLD: f64 = 0.2;

    /// Creates a hidden trigger; the threshold is clamped into `[0, 1]`.
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            phase: RevealPhase::Hidden,
        }
    }

    /// Feeds one visibility observation.
    ///
    /// Returns `true` only on the single observation that flips the block
    /// to `Revealed`. Later observations, qualifying or not, return `false`
    /// and leave the phase untouched.
    pub fn observe(&mut self, visible_fraction: f64) -> bool {
        if self.phase == RevealPhase::Revealed {
            return false;
        }
        if visible_fraction >= self.threshold {
            self.phase = RevealPhase::Revealed;
            debug!(
                "event=reveal module=motion fraction={visible_fraction:.2} threshold={:.2}",
                self.threshold
            );
            return true;
        }
        false
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    pub fn is_revealed(&self) -> bool {
        self.phase == RevealPhase::Revealed
    }

    /// Configured visibility threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

/// Presentation-only interpolation played when a block reveals.
///
/// `delay` staggers grids of sibling cards; sampling before the delay
/// elapses holds the initial frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealTransition {
    /// Initial downward offset interpolated to zero.
    pub offset_y: f64,
    /// Initial scale interpolated to `1.0`.
    pub scale_from: f64,
    /// Interpolation duration in seconds.
    pub duration: f64,
    /// Start delay in seconds.
    pub delay: f64,
}

impl RevealTransition {
    /// Section wrapper fade (about/projects/skills).
    pub fn section() -> Self {
        Self {
            offset_y: 20.0,
            scale_from: 1.0,
            duration: 0.6,
            delay: 0.0,
        }
    }

    /// Project card fade, staggered by grid position.
    pub fn project_card(index: usize) -> Self {
        Self {
            offset_y: 16.0,
            scale_from: 1.0,
            duration: 0.45,
            delay: index as f64 * 0.05,
        }
    }

    /// Skill card fade, staggered by grid position.
    pub fn skill_card(index: usize) -> Self {
        Self {
            offset_y: 14.0,
            scale_from: 1.0,
            duration: 0.42,
            delay: index as f64 * 0.04,
        }
    }

    /// Hero text entrance; plays on mount, not on intersection.
    pub fn hero_text() -> Self {
        Self {
            offset_y: 18.0,
            scale_from: 1.0,
            duration: 0.7,
            delay: 0.0,
        }
    }

    /// Hero portrait entrance; scales up slightly behind the text.
    pub fn hero_portrait() -> Self {
        Self {
            offset_y: 0.0,
            scale_from: 0.94,
            duration: 0.7,
            delay: 0.08,
        }
    }

    /// Samples the presentation at `elapsed` seconds since the reveal.
    pub fn sample(&self, elapsed: f64) -> RevealFrame {
        let t = if self.duration <= 0.0 {
            1.0
        } else {
            ((elapsed - self.delay) / self.duration).clamp(0.0, 1.0)
        };
        let eased = ease_out_cubic(t);
        RevealFrame {
            opacity: eased,
            offset_y: self.offset_y * (1.0 - eased),
            scale: self.scale_from + (1.0 - self.scale_from) * eased,
        }
    }
}

/// One sampled presentation state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealFrame {
    pub opacity: f64,
    pub offset_y: f64,
    pub scale: f64,
}

/// Ease-out cubic curve over `[0, 1]`.
pub fn ease_out_cubic(t: f64) -> f64 {
    let inverse = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inverse * inverse * inverse
}

#[cfg(test)]
mod tests {
    use super::{ease_out_cubic, RevealPhase, RevealTransition, RevealTrigger};

    #[test]
    fn trigger_threshold_is_clamped() {
        assert_eq!(RevealTrigger::new(3.0).threshold(), 1.0);
        assert_eq!(RevealTrigger::new(-0.5).threshold(), 0.0);
    }

    #[test]
    fn ease_out_cubic_is_clamped_and_front_loaded() {
        assert_eq!(ease_out_cubic(-1.0), 0.0);
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(2.0), 1.0);
        assert!(ease_out_cubic(0.5) > 0.5);
    }

    #[test]
    fn delayed_transition_holds_initial_frame() {
        let transition = RevealTransition::project_card(3);
        assert!((transition.delay - 0.15).abs() < 1e-9);

        let frame = transition.sample(0.1);
        assert_eq!(frame.opacity, 0.0);
        assert_eq!(frame.offset_y, 16.0);

        let resting = transition.sample(transition.delay + transition.duration);
        assert_eq!(resting.opacity, 1.0);
        assert_eq!(resting.offset_y, 0.0);
        assert_eq!(resting.scale, 1.0);
    }

    #[test]
    fn observe_is_one_shot() {
        let mut trigger = RevealTrigger::new(RevealTrigger::BLOCK_THRESHOLD);
        assert_eq!(trigger.phase(), RevealPhase::Hidden);

        assert!(!trigger.observe(0.1));
        assert!(trigger.observe(0.25));
        assert!(trigger.is_revealed());

        // Scrolling away and back never resets the phase.
        assert!(!trigger.observe(0.0));
        assert!(!trigger.observe(1.0));
        assert!(trigger.is_revealed());
    }
}
