//! Static portfolio content: record shapes, validation and the shared store.

pub mod model;
pub mod store;
