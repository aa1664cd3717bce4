//! Deterministic render model: card projections and page assembly.

pub mod cards;
pub mod page;
