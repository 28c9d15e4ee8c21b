//! Shared value types for class diagram models
//!
//! Visibility is a closed set of UML modifiers. Relationship kinds cover the
//! usual UML edges and keep any other label verbatim.

use std::fmt;
use std::str::FromStr;

use super::error::RegistryError;

/// Visibility modifier for classes and their members
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Visibility {
    #[default]
    Public, // +
    Private,   // -
    Protected, // #
    Package,   // ~
}

impl Visibility {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Visibility::Public),
            '-' => Some(Visibility::Private),
            '#' => Some(Visibility::Protected),
            '~' => Some(Visibility::Package),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Visibility::Public => '+',
            Visibility::Private => '-',
            Visibility::Protected => '#',
            Visibility::Package => '~',
        }
    }

    /// All visibility keywords accepted by `FromStr`
    pub fn variants() -> &'static [&'static str] {
        &["public", "private", "protected", "package"]
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visibility::Public => write!(f, "public"),
            Visibility::Private => write!(f, "private"),
            Visibility::Protected => write!(f, "protected"),
            Visibility::Package => write!(f, "package"),
        }
    }
}

impl FromStr for Visibility {
    type Err = RegistryError;

    /// Accepts keywords (case-insensitive) or a single UML sigil.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(v) = Visibility::from_char(c) {
                return Ok(v);
            }
        }

        match trimmed.to_lowercase().as_str() {
            "public" => Ok(Visibility::Public),
            "private" => Ok(Visibility::Private),
            "protected" => Ok(Visibility::Protected),
            "package" => Ok(Visibility::Package),
            _ => Err(RegistryError::invalid_visibility(s)),
        }
    }
}

/// Semantic type of a relationship edge
#[derive(Debug, Clone, PartialEq, Eq, Default, Hash)]
pub enum RelationshipKind {
    #[default]
    Association,
    Aggregation,
    Composition,
    Inheritance,
    Realization,
    Dependency,
    /// Any other label, such as `uses` or `nesting`, stored as written
    Other(String),
}

impl RelationshipKind {
    /// Well-known relationship kinds
    pub fn variants() -> &'static [&'static str] {
        &[
            "association",
            "aggregation",
            "composition",
            "inheritance",
            "realization",
            "dependency",
        ]
    }
}

impl fmt::Display for RelationshipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelationshipKind::Association => write!(f, "association"),
            RelationshipKind::Aggregation => write!(f, "aggregation"),
            RelationshipKind::Composition => write!(f, "composition"),
            RelationshipKind::Inheritance => write!(f, "inheritance"),
            RelationshipKind::Realization => write!(f, "realization"),
            RelationshipKind::Dependency => write!(f, "dependency"),
            RelationshipKind::Other(label) => write!(f, "{}", label),
        }
    }
}

impl FromStr for RelationshipKind {
    type Err = RegistryError;

    /// Known names match case-insensitively; any other non-empty label
    /// becomes [`RelationshipKind::Other`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "" => Err(RegistryError::invalid_relationship_kind(s)),
            "association" => Ok(RelationshipKind::Association),
            "aggregation" => Ok(RelationshipKind::Aggregation),
            "composition" => Ok(RelationshipKind::Composition),
            "inheritance" | "generalization" => Ok(RelationshipKind::Inheritance),
            "realization" | "implementation" => Ok(RelationshipKind::Realization),
            "dependency" => Ok(RelationshipKind::Dependency),
            _ => Ok(RelationshipKind::Other(trimmed.to_string())),
        }
    }
}
