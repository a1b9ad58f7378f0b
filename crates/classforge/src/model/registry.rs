//! Closed registry of entity kinds
//!
//! Maps a row's declared `ArtifactType` tag to the entity variant to
//! construct. The table is fixed and declared up front; it also carries the
//! alias entries for tags whose row-level name differs from the entity's
//! internal name (the exporter labels class rows `"Class"`, historically a
//! reserved word in generator targets).

/// The kinds of entity an export row can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Package,
    Class,
    Attribute,
    Association,
    Generalization,
}

/// Row-level tag → entity kind. Tags not in this table are ignored by the
/// classifier; an unknown tag drops the row rather than failing the run.
const TAG_TABLE: &[(&str, ArtifactKind)] = &[
    ("Package", ArtifactKind::Package),
    ("Class", ArtifactKind::Class),
    ("Attribute", ArtifactKind::Attribute),
    ("Association", ArtifactKind::Association),
    ("Generalization", ArtifactKind::Generalization),
];

impl ArtifactKind {
    /// Look up the entity kind for a row tag
    pub fn from_tag(tag: &str) -> Option<ArtifactKind> {
        TAG_TABLE
            .iter()
            .find(|(name, _)| *name == tag)
            .map(|(_, kind)| *kind)
    }

    /// The canonical row tag for this kind
    pub fn tag(self) -> &'static str {
        match self {
            ArtifactKind::Package => "Package",
            ArtifactKind::Class => "Class",
            ArtifactKind::Attribute => "Attribute",
            ArtifactKind::Association => "Association",
            ArtifactKind::Generalization => "Generalization",
        }
    }

    /// All entity kinds, in classification priority order
    pub fn all() -> &'static [ArtifactKind] {
        &[
            ArtifactKind::Package,
            ArtifactKind::Class,
            ArtifactKind::Attribute,
            ArtifactKind::Association,
            ArtifactKind::Generalization,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tags_resolve() {
        assert_eq!(ArtifactKind::from_tag("Package"), Some(ArtifactKind::Package));
        assert_eq!(ArtifactKind::from_tag("Class"), Some(ArtifactKind::Class));
        assert_eq!(
            ArtifactKind::from_tag("Attribute"),
            Some(ArtifactKind::Attribute)
        );
        assert_eq!(
            ArtifactKind::from_tag("Association"),
            Some(ArtifactKind::Association)
        );
        assert_eq!(
            ArtifactKind::from_tag("Generalization"),
            Some(ArtifactKind::Generalization)
        );
    }

    #[test]
    fn test_unknown_tag_is_none() {
        assert_eq!(ArtifactKind::from_tag("Stereotype"), None);
        assert_eq!(ArtifactKind::from_tag(""), None);
        // Lookup is case-sensitive, matching the export format
        assert_eq!(ArtifactKind::from_tag("class"), None);
    }

    #[test]
    fn test_tag_round_trip() {
        for kind in ArtifactKind::all() {
            assert_eq!(ArtifactKind::from_tag(kind.tag()), Some(*kind));
        }
    }
}
