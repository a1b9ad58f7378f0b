//! Diagram: the final owned graph
//!
//! A diagram is built in one shot from a name and the export's row list:
//! classification then linking, exactly once. The result is immutable and
//! is the entire surface the renderer consumes.

use tracing::{info, span, Level};

use super::{Class, ClassId, Package, PackageId};
use crate::core::{DiagramError, Row};
use crate::graph;

/// A resolved class diagram
#[derive(Debug)]
pub struct Diagram {
    name: String,
    packages: Vec<Package>,
    classes: Vec<Class>,
}

impl Diagram {
    /// Classify and link the given rows into a resolved diagram.
    ///
    /// Fails fast on an empty name or an empty row list; everything else is
    /// tolerated best-effort (unknown rows and unresolved references are
    /// dropped, see [`crate::graph`]).
    pub fn populate(name: impl Into<String>, rows: &[Row]) -> Result<Self, DiagramError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DiagramError::invalid_diagram("diagram has no name"));
        }
        if rows.is_empty() {
            return Err(DiagramError::invalid_diagram("diagram has no rows"));
        }

        let populate_span = span!(Level::INFO, "populate_diagram", name = %name, rows = rows.len());
        let _enter = populate_span.enter();

        let raw = graph::classify(rows);
        let (packages, classes) = graph::link(raw);

        info!(
            packages = packages.len(),
            classes = classes.len(),
            "Diagram populated"
        );

        Ok(Self {
            name,
            packages,
            classes,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    pub fn classes(&self) -> &[Class] {
        &self.classes
    }

    pub fn class(&self, id: ClassId) -> &Class {
        &self.classes[id.0]
    }

    pub fn package(&self, id: PackageId) -> &Package {
        &self.packages[id.0]
    }

    /// Find a class by name, for renderers and tests
    pub fn class_by_name(&self, name: &str) -> Option<&Class> {
        self.classes
            .iter()
            .find(|class| class.name.as_deref() == Some(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::row::header;

    fn class_row(id: i64, name: &str, is_abstract: &str) -> Row {
        Row::new()
            .with(header::ARTIFACT_TYPE, "Class")
            .with(header::ID, id)
            .with(header::NAME, name)
            .with(header::ABSTRACT, is_abstract)
    }

    #[test]
    fn test_populate_rejects_empty_name() {
        let rows = vec![class_row(1, "A", "No")];
        let result = Diagram::populate("", &rows);
        assert!(matches!(
            result,
            Err(DiagramError::InvalidDiagram { .. })
        ));
    }

    #[test]
    fn test_populate_rejects_empty_rows() {
        let result = Diagram::populate("Model", &[]);
        assert!(matches!(
            result,
            Err(DiagramError::InvalidDiagram { .. })
        ));
    }

    #[test]
    fn test_generalization_end_to_end() {
        // Animal (abstract) <- Dog, linked by a generalization row
        let rows = vec![
            class_row(1, "Animal", "Yes"),
            class_row(2, "Dog", "No"),
            Row::new()
                .with(header::ARTIFACT_TYPE, "Generalization")
                .with(header::ID, 3)
                .with(header::GENERAL, 1)
                .with(header::SPECIFIC, 2),
        ];

        let diagram = Diagram::populate("Zoo", &rows).unwrap();
        assert_eq!(diagram.classes().len(), 2);

        let dog = diagram.class_by_name("Dog").unwrap();
        let superclass = diagram.class(dog.superclass().unwrap());
        assert_eq!(superclass.name.as_deref(), Some("Animal"));
        assert!(superclass.is_abstract());
        assert!(!dog.is_abstract());
    }

    #[test]
    fn test_attribute_end_to_end() {
        let rows = vec![
            class_row(10, "Book", "No"),
            Row::new()
                .with(header::ARTIFACT_TYPE, "Attribute")
                .with(header::NAME, "title")
                .with(header::TYPE, "String")
                .with(header::PARENT_ID, 10),
        ];

        let diagram = Diagram::populate("Library", &rows).unwrap();
        let book = diagram.class_by_name("Book").unwrap();
        assert_eq!(book.attributes().len(), 1);
        assert_eq!(book.attributes()[0].name.as_deref(), Some("title"));
        assert_eq!(book.attributes()[0].attr_type, "String");
    }

    #[test]
    fn test_self_association_end_to_end() {
        let rows = vec![
            class_row(5, "Node", "No"),
            Row::new()
                .with(header::ARTIFACT_TYPE, "Association")
                .with(header::FROM, 5)
                .with(header::TO, 5),
        ];

        let diagram = Diagram::populate("Graph", &rows).unwrap();
        let node = diagram.class_by_name("Node").unwrap();
        assert_eq!(node.associations().len(), 1);
    }

    #[test]
    fn test_unresolved_association_end_to_end() {
        let rows = vec![
            class_row(1, "Known", "No"),
            Row::new()
                .with(header::ARTIFACT_TYPE, "Association")
                .with(header::FROM, 5)
                .with(header::TO, 1),
        ];

        let diagram = Diagram::populate("Partial", &rows).unwrap();
        for class in diagram.classes() {
            assert!(class.associations().is_empty());
        }
    }

    #[test]
    fn test_packages_and_classes_are_the_whole_surface() {
        let rows = vec![
            Row::new()
                .with(header::ARTIFACT_TYPE, "Package")
                .with(header::ID, 9)
                .with(header::NAME, "core"),
            class_row(1, "Engine", "No").with(header::PARENT_ID, 9),
        ];

        let diagram = Diagram::populate("App", &rows).unwrap();
        assert_eq!(diagram.name(), "App");
        assert_eq!(diagram.packages().len(), 1);
        assert_eq!(diagram.classes().len(), 1);

        let engine = &diagram.classes()[0];
        let package = diagram.package(engine.package().unwrap());
        assert_eq!(package.name.as_deref(), Some("core"));
        assert_eq!(package.classes().len(), 1);
        assert_eq!(
            diagram.class(package.classes()[0]).name.as_deref(),
            Some("Engine")
        );
    }
}
