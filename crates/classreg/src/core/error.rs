//! Core error types for the class registry
//!
//! Registry operations themselves never fail. These errors only surface when
//! model values are parsed from text (command scripts, CLI flags).

use thiserror::Error;

/// Errors produced while converting text into model values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Invalid visibility: {value} (expected public, private, protected or package)")]
    InvalidVisibility { value: String },

    #[error("Invalid relationship kind: '{value}' (expected a non-empty label)")]
    InvalidRelationshipKind { value: String },

    #[error("Invalid parameter: {value} (expected name:Type)")]
    InvalidParameter { value: String },
}

impl RegistryError {
    /// Create a new visibility error
    pub fn invalid_visibility(value: impl Into<String>) -> Self {
        Self::InvalidVisibility {
            value: value.into(),
        }
    }

    /// Create a new relationship kind error
    pub fn invalid_relationship_kind(value: impl Into<String>) -> Self {
        Self::InvalidRelationshipKind {
            value: value.into(),
        }
    }

    /// Create a new parameter error
    pub fn invalid_parameter(value: impl Into<String>) -> Self {
        Self::InvalidParameter {
            value: value.into(),
        }
    }
}
