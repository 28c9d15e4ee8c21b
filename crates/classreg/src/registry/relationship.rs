//! Relationship edges between classes

use std::fmt;

use crate::core::RelationshipKind;

/// Opaque handle to a class stored in a [`ClassRegistry`](super::ClassRegistry)
///
/// Handles are never reused. Once the class is deleted, the handle stays
/// invalid and lookups through it return `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassId(pub(crate) usize);

impl ClassId {
    /// Position of the class's slot in the registry arena
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A directed, non-owning link from the owning class to `target`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationshipEdge {
    pub kind: RelationshipKind,
    pub target: ClassId,
    pub multiplicity: String,
    pub navigability: String,
}

impl RelationshipEdge {
    pub fn new(
        target: ClassId,
        kind: RelationshipKind,
        multiplicity: impl Into<String>,
        navigability: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            target,
            multiplicity: multiplicity.into(),
            navigability: navigability.into(),
        }
    }

    /// Whether this edge points at `target`
    pub fn targets(&self, target: ClassId) -> bool {
        self.target == target
    }
}
