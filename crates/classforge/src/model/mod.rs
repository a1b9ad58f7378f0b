//! Typed diagram entities
//!
//! Every export row becomes one of these entities. Entities are constructed
//! isolated (raw identifier values only) by the classifier and wired into a
//! connected graph by the linker; cross-references between sibling
//! collections are index-based.

mod artifact;
mod association;
mod attribute;
mod class;
mod diagram;
mod generalization;
mod package;
pub mod registry;

pub use artifact::Identity;
pub use association::{AggregationKind, Association, Multiplicity, RawAssociation};
pub use attribute::{Attribute, TYPE_NOT_APPLICABLE};
pub use class::Class;
pub use diagram::Diagram;
pub use generalization::Generalization;
pub use package::Package;
pub use registry::ArtifactKind;

/// Index of a class within a diagram's class collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClassId(pub(crate) usize);

impl ClassId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Index of a package within a diagram's package collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PackageId(pub(crate) usize);

impl PackageId {
    pub fn index(self) -> usize {
        self.0
    }
}
