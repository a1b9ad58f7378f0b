//! Linker
//!
//! Resolves the isolated entities of a [`RawGraph`] into a connected graph
//! in three fixed passes:
//!
//! 1. package and attribute attachment,
//! 2. association endpoint resolution,
//! 3. generalization (superclass) assignment.
//!
//! The order matters: passes 2 and 3 rely on classes being in their final
//! identity but not on attributes or associations being resolved first.
//! Entities whose references never resolve are dropped silently; exports
//! are expected to contain some malformed rows and a partial graph beats a
//! failed run.

use tracing::{debug, span, Level};

use super::RawGraph;
use crate::model::{Class, ClassId, Package, PackageId};

/// Resolve cross-references and return the final package and class
/// collections. The scratch collections of the raw graph are consumed here
/// and not retained.
pub fn link(raw: RawGraph) -> (Vec<Package>, Vec<Class>) {
    let link_span = span!(
        Level::DEBUG,
        "link_graph",
        classes = raw.classes.len(),
        associations = raw.associations.len()
    );
    let _enter = link_span.enter();

    let RawGraph {
        mut packages,
        mut classes,
        attributes,
        associations,
        generalizations,
    } = raw;

    attach_packages(&mut packages, &mut classes);
    attach_attributes(&mut classes, attributes);
    attach_associations(&mut classes, associations);
    assign_superclasses(&mut classes, generalizations);

    (packages, classes)
}

/// Pass 1a: each class joins the first package whose identity matches the
/// class's parent id. A class has at most one owning package.
fn attach_packages(packages: &mut [Package], classes: &mut [Class]) {
    for (index, class) in classes.iter_mut().enumerate() {
        let Some(position) = packages
            .iter()
            .position(|package| package.identity.matches_value(class.parent_id()))
        else {
            continue;
        };
        class.set_package(PackageId(position));
        packages[position].add_class(ClassId(index));
    }
}

/// Pass 1b: every loose attribute moves into the first class whose identity
/// matches the attribute's parent id. Orphans are dropped.
fn attach_attributes(classes: &mut [Class], attributes: Vec<crate::model::Attribute>) {
    for attribute in attributes {
        match classes
            .iter()
            .position(|class| class.identity.matches_value(attribute.parent_id()))
        {
            Some(position) => classes[position].push_attribute(attribute),
            None => debug!(name = ?attribute.name, "Attribute matches no class, dropping"),
        }
    }
}

/// Pass 2: resolve association endpoints in a single scan over the classes,
/// short-circuiting once both are found. A fully resolved association joins
/// the `to` class's list and, unless self-referential, the `from` class's
/// list as well. Partially resolved associations are dropped.
fn attach_associations(
    classes: &mut [Class],
    associations: Vec<crate::model::RawAssociation>,
) {
    for association in associations {
        let mut from = None;
        let mut to = None;
        for (index, class) in classes.iter().enumerate() {
            if from.is_none() && class.identity.matches_value(association.from.as_ref()) {
                from = Some(ClassId(index));
            }
            if to.is_none() && class.identity.matches_value(association.to.as_ref()) {
                to = Some(ClassId(index));
            }
            if from.is_some() && to.is_some() {
                break;
            }
        }

        let (Some(from), Some(to)) = (from, to) else {
            debug!(name = ?association.name, "Association endpoint unresolved, dropping");
            continue;
        };

        let resolved = association.resolve(from, to);
        // A self-referential association registers exactly once
        classes[to.0].push_association(resolved.clone());
        if from != to {
            classes[from.0].push_association(resolved);
        }
    }
}

/// Pass 3: a generalization with both endpoints resolved against the class
/// collection sets the specific class's superclass. Endpoints naming
/// packages or unknown ids leave the generalization unapplied.
fn assign_superclasses(
    classes: &mut [Class],
    generalizations: Vec<crate::model::Generalization>,
) {
    for generalization in generalizations {
        if generalization.general.is_none() || generalization.specific.is_none() {
            continue;
        }

        let mut general = None;
        let mut specific = None;
        for (index, class) in classes.iter().enumerate() {
            if general.is_none() && class.identity.matches_value(generalization.general.as_ref())
            {
                general = Some(ClassId(index));
            }
            if specific.is_none()
                && class.identity.matches_value(generalization.specific.as_ref())
            {
                specific = Some(ClassId(index));
            }
            if general.is_some() && specific.is_some() {
                break;
            }
        }

        match (general, specific) {
            (Some(general), Some(specific)) => classes[specific.0].set_superclass(general),
            _ => debug!(name = ?generalization.name, "Generalization unresolved, skipping"),
        }
    }
}
