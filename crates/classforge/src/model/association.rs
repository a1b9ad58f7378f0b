//! Association entities
//!
//! Associations live in two forms: [`RawAssociation`], straight off the
//! export row with raw endpoint ids, and [`Association`], produced by the
//! linker once both endpoints resolve to actual classes. Raw associations
//! whose endpoints never resolve are dropped from the final graph.

use super::{ClassId, Identity};
use crate::core::row::{header, Row};
use crate::core::Value;

/// Multiplicity of an association: the export carries one total column and
/// one per endpoint
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Multiplicity {
    pub total: Option<Value>,
    pub from: Option<Value>,
    pub to: Option<Value>,
}

/// Aggregation kind per endpoint
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregationKind {
    pub from: Option<Value>,
    pub to: Option<Value>,
}

/// An association as classified, endpoints still raw identifier values
#[derive(Debug, Clone)]
pub struct RawAssociation {
    pub identity: Identity,
    pub name: Option<String>,
    pub from: Option<Value>,
    pub to: Option<Value>,
    pub multiplicity: Multiplicity,
    pub aggregation_kind: AggregationKind,
}

impl RawAssociation {
    /// Construct an isolated association from an export row
    pub fn from_row(row: &Row) -> Self {
        Self {
            identity: Identity::from_row(row),
            name: row.string(header::NAME),
            from: row.get(header::FROM).cloned(),
            to: row.get(header::TO).cloned(),
            multiplicity: Multiplicity {
                total: row.get(header::MULTIPLICITY).cloned(),
                from: row.get(header::FROM_MULTIPLICITY).cloned(),
                to: row.get(header::TO_MULTIPLICITY).cloned(),
            },
            aggregation_kind: AggregationKind {
                from: row.get(header::FROM_AGGREGATION_KIND).cloned(),
                to: row.get(header::TO_AGGREGATION_KIND).cloned(),
            },
        }
    }

    /// Rewrite the raw endpoints into resolved class references
    pub(crate) fn resolve(self, from: ClassId, to: ClassId) -> Association {
        Association {
            name: self.name,
            from,
            to,
            multiplicity: self.multiplicity,
            aggregation_kind: self.aggregation_kind,
        }
    }
}

/// An association with both endpoints resolved
#[derive(Debug, Clone)]
pub struct Association {
    pub name: Option<String>,
    pub from: ClassId,
    pub to: ClassId,
    pub multiplicity: Multiplicity,
    pub aggregation_kind: AggregationKind,
}

impl Association {
    /// Whether both endpoints are the same class
    pub fn is_self_referential(&self) -> bool {
        self.from == self.to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_row() {
        let row = Row::new()
            .with(header::ARTIFACT_TYPE, "Association")
            .with(header::FROM, 1)
            .with(header::TO, 2)
            .with(header::MULTIPLICITY, "1..*")
            .with(header::FROM_MULTIPLICITY, 1)
            .with(header::TO_MULTIPLICITY, "*")
            .with(header::FROM_AGGREGATION_KIND, "none")
            .with(header::TO_AGGREGATION_KIND, "shared");
        let raw = RawAssociation::from_row(&row);
        assert_eq!(raw.from, Some(Value::Int(1)));
        assert_eq!(raw.to, Some(Value::Int(2)));
        assert_eq!(raw.multiplicity.total, Some(Value::from("1..*")));
        assert_eq!(raw.multiplicity.from, Some(Value::Int(1)));
        assert_eq!(raw.aggregation_kind.to, Some(Value::from("shared")));
    }

    #[test]
    fn test_resolve_keeps_metadata() {
        let row = Row::new()
            .with(header::NAME, "owns")
            .with(header::FROM, 1)
            .with(header::TO, 1)
            .with(header::TO_MULTIPLICITY, 1);
        let resolved = RawAssociation::from_row(&row).resolve(ClassId(0), ClassId(0));
        assert!(resolved.is_self_referential());
        assert_eq!(resolved.name.as_deref(), Some("owns"));
        assert_eq!(resolved.multiplicity.to, Some(Value::Int(1)));
    }
}
