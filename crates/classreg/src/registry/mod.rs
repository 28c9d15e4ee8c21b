//! UML class registry
//!
//! The registry owns classes; classes own their members and outgoing
//! relationships. Relationship targets are [`ClassId`] handles rather than
//! owning references.

mod class_registry;
mod entity;
mod member;
mod relationship;

pub use class_registry::ClassRegistry;
pub use entity::ClassEntity;
pub use member::{Attribute, Method, Parameter};
pub use relationship::{ClassId, RelationshipEdge};
