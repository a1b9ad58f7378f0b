//! Package entity
//!
//! A package owns the classes the linker files into it.

use super::{ClassId, Identity};
use crate::core::row::{header, Row};

/// A package in the diagram
#[derive(Debug, Clone, Default)]
pub struct Package {
    pub identity: Identity,
    pub name: Option<String>,
    classes: Vec<ClassId>,
}

impl Package {
    /// Construct an isolated package from an export row
    pub fn from_row(row: &Row) -> Self {
        Self {
            identity: Identity::from_row(row),
            name: row.string(header::NAME),
            classes: Vec::new(),
        }
    }

    /// Member classes, in linking order
    pub fn classes(&self) -> &[ClassId] {
        &self.classes
    }

    pub(crate) fn add_class(&mut self, class: ClassId) {
        self.classes.push(class);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Value;

    #[test]
    fn test_from_row() {
        let row = Row::new()
            .with(header::ARTIFACT_TYPE, "Package")
            .with(header::ID, 10)
            .with(header::NAME, "billing");
        let package = Package::from_row(&row);
        assert_eq!(package.name.as_deref(), Some("billing"));
        assert_eq!(package.identity.id, Some(Value::Int(10)));
        assert!(package.classes().is_empty());
    }
}
