//! Attribute entity

use super::Identity;
use crate::core::row::{header, Row};
use crate::core::Value;

/// Sentinel type for attributes whose export row carries no `Type` cell
pub const TYPE_NOT_APPLICABLE: &str = "[N/A]";

/// An attribute of a class
///
/// Constructed loose, carrying only the owning class's id; the linker files
/// it into the first class whose identity matches.
#[derive(Debug, Clone)]
pub struct Attribute {
    pub identity: Identity,
    pub name: Option<String>,
    pub visibility: Option<String>,
    pub attr_type: String,
    pub scope: Option<String>,
    parent_id: Option<Value>,
}

impl Attribute {
    /// Construct an isolated attribute from an export row
    pub fn from_row(row: &Row) -> Self {
        Self {
            identity: Identity::from_row(row),
            name: row.string(header::NAME),
            visibility: row.string(header::VISIBILITY),
            attr_type: row
                .string(header::TYPE)
                .unwrap_or_else(|| TYPE_NOT_APPLICABLE.to_string()),
            scope: row.string(header::SCOPE),
            parent_id: row.get(header::PARENT_ID).cloned(),
        }
    }

    /// The owning class's id, consumed by the linker
    pub(crate) fn parent_id(&self) -> Option<&Value> {
        self.parent_id.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_row() {
        let row = Row::new()
            .with(header::ARTIFACT_TYPE, "Attribute")
            .with(header::NAME, "title")
            .with(header::TYPE, "String")
            .with(header::VISIBILITY, "private")
            .with(header::PARENT_ID, 10);
        let attribute = Attribute::from_row(&row);
        assert_eq!(attribute.name.as_deref(), Some("title"));
        assert_eq!(attribute.attr_type, "String");
        assert_eq!(attribute.visibility.as_deref(), Some("private"));
        assert_eq!(attribute.parent_id(), Some(&Value::Int(10)));
    }

    #[test]
    fn test_missing_type_falls_back_to_sentinel() {
        let row = Row::new().with(header::NAME, "flag");
        let attribute = Attribute::from_row(&row);
        assert_eq!(attribute.attr_type, TYPE_NOT_APPLICABLE);
    }
}
