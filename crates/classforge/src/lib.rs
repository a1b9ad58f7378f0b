//! Classforge - Turn spreadsheet-exported UML class diagrams into source scaffolding
//!
//! A library for reconstructing a cross-referenced class graph from the flat
//! row list of a class diagram export, and emitting Rust struct scaffolding
//! from the resolved graph.
//!
//! # Quick Start
//!
//! ```rust
//! use classforge::core::row::header;
//! use classforge::core::Row;
//! use classforge::model::Diagram;
//!
//! let rows = vec![
//!     Row::new()
//!         .with(header::ARTIFACT_TYPE, "Class")
//!         .with(header::ID, 1)
//!         .with(header::NAME, "Animal")
//!         .with(header::ABSTRACT, "Yes"),
//!     Row::new()
//!         .with(header::ARTIFACT_TYPE, "Class")
//!         .with(header::ID, 2)
//!         .with(header::NAME, "Dog")
//!         .with(header::ABSTRACT, "No"),
//!     Row::new()
//!         .with(header::ARTIFACT_TYPE, "Generalization")
//!         .with(header::GENERAL, 1)
//!         .with(header::SPECIFIC, 2),
//! ];
//!
//! let diagram = Diagram::populate("Zoo", &rows).unwrap();
//! let dog = diagram.class_by_name("Dog").unwrap();
//! let parent = diagram.class(dog.superclass().unwrap());
//! assert_eq!(parent.name.as_deref(), Some("Animal"));
//! ```
//!
//! # Pipeline
//!
//! The full file-to-files pipeline is [`generate`]: read an xlsx export
//! ([`source::DiagramSheet`]), resolve the graph ([`model::Diagram`]), and
//! write scaffolding ([`render::ScaffoldWriter`]).

pub mod core;
pub mod graph;
pub mod model;
pub mod render;
pub mod source;

pub use crate::core::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{DiagramError, Row, Value};
    pub use crate::model::{
        ArtifactKind, Association, Attribute, Class, ClassId, Diagram, Generalization,
        Identity, Package, PackageId,
    };
    pub use crate::render::ScaffoldWriter;
    pub use crate::source::DiagramSheet;
}

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::model::Diagram;
use crate::render::ScaffoldWriter;
use crate::source::DiagramSheet;

/// Read an xlsx export and resolve it into a diagram
pub fn load_diagram(input: &Path) -> Result<Diagram> {
    let sheet = DiagramSheet::open(input)?;
    let (name, rows) = sheet.into_parts();
    Ok(Diagram::populate(name, &rows)?)
}

/// Read an xlsx export and write Rust scaffolding for every class into
/// `out_dir`. Returns the paths written.
pub fn generate(input: &Path, out_dir: &Path) -> Result<Vec<PathBuf>> {
    let diagram = load_diagram(input)?;
    ScaffoldWriter::new().write(&diagram, out_dir)
}
