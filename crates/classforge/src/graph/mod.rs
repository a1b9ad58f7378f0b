//! Diagram resolution engine
//!
//! Two stages: [`classify`](classify::classify) turns the flat row list
//! into per-kind collections of isolated entities, and
//! [`link`](link::link) resolves the identity-based cross-references into
//! the final connected graph.

pub mod classify;
pub mod link;

pub use classify::{classify, RawGraph};
pub use link::link;
