//! Class entity
//!
//! A class owns its attributes, methods and outgoing relationships. Every
//! operation mutates in place and is a silent no-op when nothing matches.
//! Edit and delete by name affect every matching member, not just the first.

use tracing::{debug, trace};

use super::member::{Attribute, Method};
use super::relationship::{ClassId, RelationshipEdge};
use crate::core::{RelationshipKind, Visibility};

/// A UML class node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassEntity {
    pub name: String,
    pub visibility: Visibility,
    pub is_abstract: bool,
    pub attributes: Vec<Attribute>,
    pub methods: Vec<Method>,
    pub relationships: Vec<RelationshipEdge>,
}

impl ClassEntity {
    pub fn new(name: impl Into<String>, visibility: Visibility, is_abstract: bool) -> Self {
        Self {
            name: name.into(),
            visibility,
            is_abstract,
            attributes: Vec::new(),
            methods: Vec::new(),
            relationships: Vec::new(),
        }
    }

    pub fn add_attribute(&mut self, attribute: Attribute) {
        trace!(class = %self.name, attribute = %attribute.name, "Adding attribute");
        self.attributes.push(attribute);
    }

    pub fn add_method(&mut self, method: Method) {
        trace!(class = %self.name, method = %method.name, "Adding method");
        self.methods.push(method);
    }

    pub fn add_relationship(
        &mut self,
        target: ClassId,
        kind: RelationshipKind,
        multiplicity: impl Into<String>,
        navigability: impl Into<String>,
    ) {
        trace!(class = %self.name, %target, %kind, "Adding relationship");
        self.relationships
            .push(RelationshipEdge::new(target, kind, multiplicity, navigability));
    }

    /// Remove every attribute named `name`
    pub fn delete_attribute(&mut self, name: &str) {
        let before = self.attributes.len();
        self.attributes.retain(|a| a.name != name);
        self.log_removal("attribute", name, before - self.attributes.len());
    }

    /// Remove every method named `name`
    pub fn delete_method(&mut self, name: &str) {
        let before = self.methods.len();
        self.methods.retain(|m| m.name != name);
        self.log_removal("method", name, before - self.methods.len());
    }

    /// Remove every edge pointing at `target`
    pub fn delete_relationship(&mut self, target: ClassId) {
        let before = self.relationships.len();
        self.relationships.retain(|r| !r.targets(target));
        let removed = before - self.relationships.len();
        if removed == 0 {
            debug!(class = %self.name, %target, "No relationship to target, nothing deleted");
        } else {
            trace!(class = %self.name, %target, removed, "Deleted relationships");
        }
    }

    pub fn set_class_name(&mut self, new_name: impl Into<String>) {
        self.name = new_name.into();
    }

    pub fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
    }

    pub fn set_abstract_status(&mut self, is_abstract: bool) {
        self.is_abstract = is_abstract;
    }

    /// Overwrite every attribute named `old_name` with `replacement`
    pub fn edit_attribute(&mut self, old_name: &str, replacement: Attribute) {
        let mut edited = 0usize;
        for attribute in self.attributes.iter_mut().filter(|a| a.name == old_name) {
            *attribute = replacement.clone();
            edited += 1;
        }
        self.log_edit("attribute", old_name, edited);
    }

    /// Overwrite every method named `old_name`, parameters included
    pub fn edit_method(&mut self, old_name: &str, replacement: Method) {
        let mut edited = 0usize;
        for method in self.methods.iter_mut().filter(|m| m.name == old_name) {
            *method = replacement.clone();
            edited += 1;
        }
        self.log_edit("method", old_name, edited);
    }

    /// Overwrite kind, multiplicity and navigability of every edge to `target`
    ///
    /// The target itself is never changed.
    pub fn edit_relationship(
        &mut self,
        target: ClassId,
        kind: RelationshipKind,
        multiplicity: &str,
        navigability: &str,
    ) {
        let mut edited = 0usize;
        for edge in self.relationships.iter_mut().filter(|r| r.targets(target)) {
            edge.kind = kind.clone();
            edge.multiplicity = multiplicity.to_string();
            edge.navigability = navigability.to_string();
            edited += 1;
        }
        if edited == 0 {
            debug!(class = %self.name, %target, "No relationship to target, nothing edited");
        } else {
            trace!(class = %self.name, %target, edited, "Edited relationships");
        }
    }

    pub fn find_attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    pub fn find_method(&self, name: &str) -> Option<&Method> {
        self.methods.iter().find(|m| m.name == name)
    }

    /// Edges pointing at `target`, in insertion order
    pub fn relationships_to(&self, target: ClassId) -> impl Iterator<Item = &RelationshipEdge> {
        self.relationships.iter().filter(move |r| r.targets(target))
    }

    fn log_removal(&self, member: &str, name: &str, removed: usize) {
        if removed == 0 {
            debug!(class = %self.name, member, member_name = name, "No match, nothing deleted");
        } else {
            trace!(class = %self.name, member, member_name = name, removed, "Deleted members");
        }
    }

    fn log_edit(&self, member: &str, name: &str, edited: usize) {
        if edited == 0 {
            debug!(class = %self.name, member, member_name = name, "No match, nothing edited");
        } else {
            trace!(class = %self.name, member, member_name = name, edited, "Edited members");
        }
    }
}
