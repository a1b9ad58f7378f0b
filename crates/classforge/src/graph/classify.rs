//! Row classifier and entity factory
//!
//! Consumes raw rows one at a time, determines each row's entity kind via
//! the tag registry, and files the constructed entity into the collection
//! for its kind. No cross-entity resolution happens here; every entity is
//! isolated and carries only raw identifier values.

use tracing::{debug, span, trace, Level};

use crate::core::Row;
use crate::model::{
    ArtifactKind, Attribute, Class, Generalization, Package, RawAssociation,
};

/// Classification output: one ordered collection per entity kind,
/// insertion order = row order.
///
/// This is scratch state. The linker consumes it; nothing in here is
/// reachable from a populated diagram.
#[derive(Debug, Default)]
pub struct RawGraph {
    pub packages: Vec<Package>,
    pub classes: Vec<Class>,
    pub attributes: Vec<Attribute>,
    pub associations: Vec<RawAssociation>,
    pub generalizations: Vec<Generalization>,
}

/// Sort rows into typed, reference-incomplete entities.
///
/// Rows with an unknown or missing type tag are dropped; exports routinely
/// contain unmodeled row kinds and a partial graph beats a failed run.
pub fn classify(rows: &[Row]) -> RawGraph {
    let classify_span = span!(Level::DEBUG, "classify_rows", rows = rows.len());
    let _enter = classify_span.enter();

    let mut graph = RawGraph::default();

    for row in rows {
        let Some(tag) = row.tag() else {
            debug!("Dropping row without a type tag");
            continue;
        };
        let Some(kind) = ArtifactKind::from_tag(tag) else {
            debug!(tag, "Dropping row with unknown type tag");
            continue;
        };

        trace!(tag, "Classified row");
        match kind {
            ArtifactKind::Package => graph.packages.push(Package::from_row(row)),
            ArtifactKind::Class => graph.classes.push(Class::from_row(row)),
            ArtifactKind::Attribute => graph.attributes.push(Attribute::from_row(row)),
            ArtifactKind::Association => graph.associations.push(RawAssociation::from_row(row)),
            ArtifactKind::Generalization => {
                graph.generalizations.push(Generalization::from_row(row))
            }
        }
    }

    debug!(
        packages = graph.packages.len(),
        classes = graph.classes.len(),
        attributes = graph.attributes.len(),
        associations = graph.associations.len(),
        generalizations = graph.generalizations.len(),
        "Classification complete"
    );
    graph
}
