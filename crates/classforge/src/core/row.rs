//! Row and cell value types for diagram exports
//!
//! A [`Row`] is one line of a spreadsheet export, reduced to the fixed set
//! of headers the model cares about. Everything upstream of the classifier
//! speaks in these types.

use std::collections::HashMap;
use std::fmt;

/// Header names recognized in a diagram export.
///
/// Only these headers survive into a [`Row`]; anything else in the sheet is
/// dropped at read time.
pub mod header {
    pub const ARTIFACT_TYPE: &str = "ArtifactType";
    pub const ID: &str = "ID";
    pub const NAME: &str = "Name";
    pub const TYPE: &str = "Type";
    pub const MODEL_ID: &str = "Model ID";
    pub const VISIBILITY: &str = "Visibility";
    pub const ABSTRACT: &str = "Abstract";
    pub const MULTIPLICITY: &str = "Multiplicity";
    pub const SCOPE: &str = "Scope";
    pub const FROM: &str = "From";
    pub const FROM_MULTIPLICITY: &str = "From Multiplicity";
    pub const FROM_AGGREGATION_KIND: &str = "From Aggregation Kind";
    pub const TO: &str = "To";
    pub const TO_MULTIPLICITY: &str = "To Multiplicity";
    pub const TO_AGGREGATION_KIND: &str = "To Aggregation Kind";
    pub const GENERAL: &str = "General";
    pub const SPECIFIC: &str = "Specific";
    pub const PARENT_ID: &str = "Parent ID";
}

/// The header used for a column whose header cell is blank.
///
/// Class diagram exports leave the type column unlabeled, so a blank header
/// is read as the artifact type column.
pub const META_COLUMN: &str = header::ARTIFACT_TYPE;

/// All headers a row may carry, in export order.
pub const HEADERS: [&str; 18] = [
    header::ARTIFACT_TYPE,
    header::ID,
    header::NAME,
    header::TYPE,
    header::MODEL_ID,
    header::VISIBILITY,
    header::ABSTRACT,
    header::MULTIPLICITY,
    header::SCOPE,
    header::FROM,
    header::FROM_MULTIPLICITY,
    header::FROM_AGGREGATION_KIND,
    header::TO,
    header::TO_MULTIPLICITY,
    header::TO_AGGREGATION_KIND,
    header::GENERAL,
    header::SPECIFIC,
    header::PARENT_ID,
];

/// Check whether a header belongs to the recognized set
pub fn is_known_header(name: &str) -> bool {
    HEADERS.contains(&name)
}

/// A scalar cell value
///
/// Exports store whole numbers as floats; those are coerced to [`Value::Int`]
/// so that identifier comparison is stable. Everything else stays text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    Text(String),
    Int(i64),
}

impl Value {
    /// Parse a raw cell into a value. Empty cells yield `None`; numeric text
    /// representing a whole number becomes `Int`.
    pub fn parse(raw: &str) -> Option<Value> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        if let Ok(number) = trimmed.parse::<f64>() {
            if number.is_finite()
                && number.fract() == 0.0
                && number >= i64::MIN as f64
                && number <= i64::MAX as f64
            {
                return Some(Value::Int(number as i64));
            }
        }
        Some(Value::Text(trimmed.to_string()))
    }

    /// The text payload, if this value is textual
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            Value::Int(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(text) => write!(f, "{}", text),
            Value::Int(number) => write!(f, "{}", number),
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl From<i64> for Value {
    fn from(number: i64) -> Self {
        Value::Int(number)
    }
}

/// One export row, restricted to the recognized headers
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    values: HashMap<String, Value>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value under a header. Unknown headers are dropped; returns
    /// whether the value was stored.
    pub fn set(&mut self, name: &str, value: Value) -> bool {
        if !is_known_header(name) {
            return false;
        }
        self.values.insert(name.to_string(), value);
        true
    }

    /// Builder-style [`Row::set`]
    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.set(name, value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Text payload under a header, if present and textual
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_text)
    }

    /// Value under a header rendered as a string
    pub fn string(&self, name: &str) -> Option<String> {
        self.get(name).map(Value::to_string)
    }

    /// The declared artifact type tag of this row
    pub fn tag(&self) -> Option<&str> {
        self.text(header::ARTIFACT_TYPE)
    }

    /// A row with no values signals end-of-data in an export
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_parse_empty() {
        assert_eq!(Value::parse(""), None);
        assert_eq!(Value::parse("   "), None);
    }

    #[test]
    fn test_value_parse_whole_float_coerces_to_int() {
        assert_eq!(Value::parse("42"), Some(Value::Int(42)));
        assert_eq!(Value::parse("42.0"), Some(Value::Int(42)));
    }

    #[test]
    fn test_value_parse_fractional_stays_text() {
        assert_eq!(Value::parse("1.5"), Some(Value::Text("1.5".to_string())));
    }

    #[test]
    fn test_value_parse_text() {
        assert_eq!(
            Value::parse("Animal"),
            Some(Value::Text("Animal".to_string()))
        );
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Int(7).to_string(), "7");
        assert_eq!(Value::Text("x".to_string()).to_string(), "x");
    }

    #[test]
    fn test_row_rejects_unknown_header() {
        let mut row = Row::new();
        assert!(!row.set("Stereotype", Value::from("ignored")));
        assert!(row.get("Stereotype").is_none());
        assert!(row.is_empty());
    }

    #[test]
    fn test_row_stores_known_header() {
        let row = Row::new()
            .with(header::ARTIFACT_TYPE, "Class")
            .with(header::ID, 3);
        assert_eq!(row.tag(), Some("Class"));
        assert_eq!(row.get(header::ID), Some(&Value::Int(3)));
        assert!(!row.is_empty());
    }

    #[test]
    fn test_row_string_renders_ints() {
        let row = Row::new().with(header::NAME, 12);
        assert_eq!(row.string(header::NAME), Some("12".to_string()));
    }

    #[test]
    fn test_header_set_is_complete() {
        assert!(is_known_header("Parent ID"));
        assert!(is_known_header("From Aggregation Kind"));
        assert!(!is_known_header("parent id"));
        assert_eq!(HEADERS.len(), 18);
    }
}
