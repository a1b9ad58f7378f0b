//! Generalization entity
//!
//! Represents "specific inherits from general". Endpoints start as raw ids
//! and are resolved against the class collection by the linker; an
//! unresolved generalization is silently skipped.

use super::Identity;
use crate::core::row::{header, Row};
use crate::core::Value;

/// An inheritance link between two classes
#[derive(Debug, Clone)]
pub struct Generalization {
    pub identity: Identity,
    pub name: Option<String>,
    pub general: Option<Value>,
    pub specific: Option<Value>,
}

impl Generalization {
    /// Construct an isolated generalization from an export row
    pub fn from_row(row: &Row) -> Self {
        Self {
            identity: Identity::from_row(row),
            name: row.string(header::NAME),
            general: row.get(header::GENERAL).cloned(),
            specific: row.get(header::SPECIFIC).cloned(),
        }
    }
}
