//! Raw scroll progress derivation.
//!
//! # Responsibility
//! - Turn a scroll offset and scrollable extent into a normalized fraction.
//!
//! # Invariants
//! - The derived value is always within `[0, 1]` inclusive.
//! - A container with no scrollable range reports progress `0`.

use crate::scroll::surface::ScrollSurface;

/// Normalized scroll fraction for one offset/extent pair.
///
/// Non-finite inputs and zero or negative extents all collapse to `0.0`;
/// everything else clamps into `[0, 1]`.
pub fn raw_progress(offset: f64, extent: f64) -> f64 {
    if !(extent.is_finite() && offset.is_finite()) || extent <= 0.0 {
        return 0.0;
    }
    (offset / extent).clamp(0.0, 1.0)
}

/// Event-driven tracker holding the latest raw progress value.
#[derive(Debug, Clone, Default)]
pub struct ProgressTracker {
    value: f64,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recomputes progress from one scroll observation.
    pub fn observe(&mut self, offset: f64, extent: f64) -> f64 {
        self.value = raw_progress(offset, extent);
        self.value
    }

    /// Recomputes progress straight from a surface.
    pub fn observe_surface(&mut self, surface: &impl ScrollSurface) -> f64 {
        self.observe(surface.offset(), surface.scrollable_extent())
    }

    /// Latest raw progress value.
    pub fn value(&self) -> f64 {
        self.value
    }
}
