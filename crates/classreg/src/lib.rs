//! Classreg - an in-memory registry for UML class diagrams
//!
//! Stores classes with their attributes, methods and relationships, and
//! offers create/read/update/delete operations over them. Lookups are by
//! exact name and resolve to the first match in insertion order. Operations
//! that find nothing to act on do nothing.
//!
//! # Quick Start
//!
//! ```rust
//! use classreg::prelude::*;
//!
//! let mut registry = ClassRegistry::new();
//! registry.add_class(ClassEntity::new("Animal", Visibility::Public, true));
//! registry.add_class(ClassEntity::new("Dog", Visibility::Public, false));
//!
//! registry.add_relationship("Dog", "Animal", RelationshipKind::Inheritance, "1", "unidirectional");
//!
//! let dog = registry.find_class_by_name("Dog").unwrap();
//! let parent = registry.resolve_target(&dog.relationships[0]).unwrap();
//! assert_eq!(parent.name, "Animal");
//! ```
//!
//! # Members
//!
//! ```rust
//! use classreg::prelude::*;
//!
//! let mut class = ClassEntity::new("Account", Visibility::Public, false);
//! class.add_attribute(Attribute::new("balance", "Decimal").with_visibility(Visibility::Private));
//! class.add_method(
//!     Method::new("deposit", "void").with_parameter(Parameter::new("amount", "Decimal")),
//! );
//!
//! assert_eq!(class.attributes[0].to_string(), "-balance: Decimal");
//! assert_eq!(class.methods[0].to_string(), "+deposit(amount: Decimal): void");
//! ```

pub mod core;
pub mod registry;

pub use crate::core::*;
pub use crate::registry::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{RegistryError, RelationshipKind, Visibility};
    pub use crate::registry::{
        Attribute, ClassEntity, ClassId, ClassRegistry, Method, Parameter, RelationshipEdge,
    };
}
