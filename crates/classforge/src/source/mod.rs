//! Row sources
//!
//! Thin collaborators that extract the ordered row list (and the diagram's
//! name) from an external document. The engine only requires the header
//! whitelist to be honored and reading to stop at the first empty row.

mod sheet;

pub use sheet::DiagramSheet;
