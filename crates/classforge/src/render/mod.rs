//! Diagram sinks
//!
//! Thin collaborators that serialize a resolved diagram into generated
//! source files. The engine exposes the final graph; everything about file
//! formats and output paths lives here.

mod writer;

pub use writer::{pascal_case, sanitize_filename, snake_case, ScaffoldWriter, WriterConfig};
