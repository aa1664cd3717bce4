//! Scroll container seam, section navigation and raw progress.

pub mod navigator;
pub mod progress;
pub mod surface;
