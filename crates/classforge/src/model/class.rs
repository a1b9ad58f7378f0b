//! Class entity
//!
//! The central entity of the diagram. Constructed isolated from a row, then
//! filled in by the linker: attributes move in, resolved associations are
//! appended, and the package/superclass references are set. After linking
//! a class is never mutated again.

use super::{Association, Attribute, ClassId, Identity, PackageId};
use crate::core::row::{header, Row};
use crate::core::Value;

/// A class in the diagram
#[derive(Debug, Clone)]
pub struct Class {
    pub identity: Identity,
    pub name: Option<String>,
    parent_id: Option<Value>,
    is_abstract: bool,
    attributes: Vec<Attribute>,
    associations: Vec<Association>,
    package: Option<PackageId>,
    superclass: Option<ClassId>,
}

impl Class {
    /// Construct an isolated class from an export row.
    ///
    /// The `Abstract` cell is truthy unless it is exactly `"No"`; the
    /// exporter omits the cell for abstract classes.
    pub fn from_row(row: &Row) -> Self {
        Self {
            identity: Identity::from_row(row),
            name: row.string(header::NAME),
            parent_id: row.get(header::PARENT_ID).cloned(),
            is_abstract: row.text(header::ABSTRACT) != Some("No"),
            attributes: Vec::new(),
            associations: Vec::new(),
            package: None,
            superclass: None,
        }
    }

    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    /// Whether the linker assigned a superclass
    pub fn has_superclass(&self) -> bool {
        self.superclass.is_some()
    }

    /// Owned attributes, in export row order
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Associations this class participates in, in linking order
    pub fn associations(&self) -> &[Association] {
        &self.associations
    }

    /// The owning package, if the linker found one
    pub fn package(&self) -> Option<PackageId> {
        self.package
    }

    /// The superclass, if a generalization resolved
    pub fn superclass(&self) -> Option<ClassId> {
        self.superclass
    }

    /// The owning package's id, consumed by the linker
    pub(crate) fn parent_id(&self) -> Option<&Value> {
        self.parent_id.as_ref()
    }

    pub(crate) fn set_package(&mut self, package: PackageId) {
        self.package = Some(package);
    }

    pub(crate) fn set_superclass(&mut self, superclass: ClassId) {
        self.superclass = Some(superclass);
    }

    pub(crate) fn push_attribute(&mut self, attribute: Attribute) {
        self.attributes.push(attribute);
    }

    pub(crate) fn push_association(&mut self, association: Association) {
        self.associations.push(association);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_row_explicit_no_is_concrete() {
        let row = Row::new()
            .with(header::ARTIFACT_TYPE, "Class")
            .with(header::ID, 2)
            .with(header::NAME, "Dog")
            .with(header::ABSTRACT, "No");
        let class = Class::from_row(&row);
        assert!(!class.is_abstract());
        assert_eq!(class.name.as_deref(), Some("Dog"));
    }

    #[test]
    fn test_from_row_yes_is_abstract() {
        let row = Row::new()
            .with(header::NAME, "Animal")
            .with(header::ABSTRACT, "Yes");
        assert!(Class::from_row(&row).is_abstract());
    }

    #[test]
    fn test_from_row_missing_abstract_cell_is_abstract() {
        let row = Row::new().with(header::NAME, "Animal");
        assert!(Class::from_row(&row).is_abstract());
    }

    #[test]
    fn test_fresh_class_is_unlinked() {
        let row = Row::new().with(header::ID, 1).with(header::PARENT_ID, 9);
        let class = Class::from_row(&row);
        assert!(class.attributes().is_empty());
        assert!(class.associations().is_empty());
        assert!(class.package().is_none());
        assert!(!class.has_superclass());
        assert_eq!(class.parent_id(), Some(&Value::Int(9)));
    }
}
