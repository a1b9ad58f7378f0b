//! Core building blocks for diagram processing
//!
//! Row and value types, error definitions, and logging setup shared by the
//! classifier, linker, and the source/sink layers.

mod error;
pub mod logging;
pub mod row;

pub use error::*;
pub use logging::*;
pub use row::{Row, Value};
