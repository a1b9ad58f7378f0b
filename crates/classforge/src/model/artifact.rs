//! Artifact identity
//!
//! Exports are lax about which identifier column is populated: some rows
//! carry `ID`, some `Model ID`, some both. Identity comparison therefore
//! accepts a match on either key.

use crate::core::row::{header, Row};
use crate::core::Value;

/// The identity of a row-derived entity
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identity {
    pub id: Option<Value>,
    pub model_id: Option<Value>,
}

impl Identity {
    pub fn new(id: Option<Value>, model_id: Option<Value>) -> Self {
        Self { id, model_id }
    }

    /// Extract the identity columns from a row
    pub fn from_row(row: &Row) -> Self {
        Self {
            id: row.get(header::ID).cloned(),
            model_id: row.get(header::MODEL_ID).cloned(),
        }
    }

    /// Two entities are the same real-world thing when `id` matches OR
    /// `model_id` matches. A field only matches when both sides carry a
    /// value; an absent field never matches.
    pub fn matches(&self, other: &Identity) -> bool {
        field_matches(self.id.as_ref(), other.id.as_ref())
            || field_matches(self.model_id.as_ref(), other.model_id.as_ref())
    }

    /// Lookup form of [`Identity::matches`]: test a single candidate value
    /// against either identity key. A missing candidate never matches.
    pub fn matches_value(&self, candidate: Option<&Value>) -> bool {
        let Some(candidate) = candidate else {
            return false;
        };
        self.id.as_ref() == Some(candidate) || self.model_id.as_ref() == Some(candidate)
    }

    /// Whether neither identity key is populated
    pub fn is_unidentified(&self) -> bool {
        self.id.is_none() && self.model_id.is_none()
    }
}

fn field_matches(left: Option<&Value>, right: Option<&Value>) -> bool {
    matches!((left, right), (Some(a), Some(b)) if a == b)
}
