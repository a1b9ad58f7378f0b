//! Core error types for diagram processing
//!
//! This module defines the common error types used throughout the
//! classification, linking, and generation pipeline.

use thiserror::Error;

/// Core error types for diagram processing
#[derive(Error, Debug)]
pub enum DiagramError {
    #[error("Invalid diagram: {message}")]
    InvalidDiagram { message: String },

    #[error("Source error: {message}")]
    SourceError { message: String },

    #[error("Render error: {message}")]
    RenderError { message: String },

    #[error("IO error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl DiagramError {
    /// Create a new invalid-diagram error
    pub fn invalid_diagram(message: impl Into<String>) -> Self {
        Self::InvalidDiagram {
            message: message.into(),
        }
    }

    /// Create a new source error
    pub fn source_error(message: impl Into<String>) -> Self {
        Self::SourceError {
            message: message.into(),
        }
    }

    /// Create a new render error
    pub fn render_error(message: impl Into<String>) -> Self {
        Self::RenderError {
            message: message.into(),
        }
    }
}
