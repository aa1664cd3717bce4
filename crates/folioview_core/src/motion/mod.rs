//! Presentation motion primitives: spring smoothing and one-shot reveals.

pub mod reveal;
pub mod spring;
