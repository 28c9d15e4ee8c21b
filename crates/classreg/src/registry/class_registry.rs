//! Class registry
//!
//! Stores classes in an append-only arena. A [`ClassId`] is the index of the
//! class's slot; deleting a class empties the slot without shifting the
//! others, so ids held by relationship edges never point at a different
//! class. An edge whose target was deleted is dangling: it stays in place
//! and simply no longer resolves.

use tracing::{debug, trace};

use super::entity::ClassEntity;
use super::relationship::{ClassId, RelationshipEdge};
use crate::core::RelationshipKind;

/// Ordered collection of classes, the root of the model
///
/// Names are not unique. Every by-name lookup resolves to the first live
/// class with that name in insertion order.
#[derive(Debug, Clone, Default)]
pub struct ClassRegistry {
    slots: Vec<Option<ClassEntity>>,
}

impl ClassRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a class and return its handle
    pub fn add_class(&mut self, class: ClassEntity) -> ClassId {
        let id = ClassId(self.slots.len());
        trace!(class = %class.name, %id, "Adding class");
        self.slots.push(Some(class));
        id
    }

    /// Remove every class named `name`
    ///
    /// Edges in other classes that targeted a removed class are left as they
    /// are.
    pub fn delete_class(&mut self, name: &str) {
        let mut removed = 0usize;
        for slot in self.slots.iter_mut() {
            if slot.as_ref().is_some_and(|c| c.name == name) {
                *slot = None;
                removed += 1;
            }
        }

        if removed == 0 {
            debug!(class = name, "No class with that name, nothing deleted");
        } else {
            trace!(class = name, removed, "Deleted classes");
        }
    }

    pub fn find_class_by_name(&self, name: &str) -> Option<&ClassEntity> {
        self.classes().find(|c| c.name == name)
    }

    pub fn find_class_by_name_mut(&mut self, name: &str) -> Option<&mut ClassEntity> {
        self.classes_mut().find(|c| c.name == name)
    }

    /// Handle of the first class named `name`
    pub fn find_class_id(&self, name: &str) -> Option<ClassId> {
        self.entries()
            .find(|(_, c)| c.name == name)
            .map(|(id, _)| id)
    }

    /// Link `source` to `target`, both resolved by first-match name lookup
    ///
    /// Skipped without notice when either name does not resolve.
    pub fn add_relationship(
        &mut self,
        source: &str,
        target: &str,
        kind: RelationshipKind,
        multiplicity: &str,
        navigability: &str,
    ) {
        let Some((source_id, target_id)) = self.resolve_pair(source, target) else {
            return;
        };
        if let Some(class) = self.get_mut(source_id) {
            class.add_relationship(target_id, kind, multiplicity, navigability);
        }
    }

    /// Remove every edge from `source` to `target`, both resolved by name
    pub fn delete_relationship(&mut self, source: &str, target: &str) {
        let Some((source_id, target_id)) = self.resolve_pair(source, target) else {
            return;
        };
        if let Some(class) = self.get_mut(source_id) {
            class.delete_relationship(target_id);
        }
    }

    /// Overwrite every edge from `source` to `target`, both resolved by name
    pub fn edit_relationship(
        &mut self,
        source: &str,
        target: &str,
        kind: RelationshipKind,
        multiplicity: &str,
        navigability: &str,
    ) {
        let Some((source_id, target_id)) = self.resolve_pair(source, target) else {
            return;
        };
        if let Some(class) = self.get_mut(source_id) {
            class.edit_relationship(target_id, kind, multiplicity, navigability);
        }
    }

    /// Live classes in insertion order
    pub fn classes(&self) -> impl Iterator<Item = &ClassEntity> {
        self.slots.iter().flatten()
    }

    /// Live classes in insertion order, open to direct mutation
    pub fn classes_mut(&mut self) -> impl Iterator<Item = &mut ClassEntity> {
        self.slots.iter_mut().flatten()
    }

    /// Live classes paired with their handles, in insertion order
    pub fn entries(&self) -> impl Iterator<Item = (ClassId, &ClassEntity)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|c| (ClassId(i), c)))
    }

    pub fn ids(&self) -> impl Iterator<Item = ClassId> + '_ {
        self.entries().map(|(id, _)| id)
    }

    pub fn get(&self, id: ClassId) -> Option<&ClassEntity> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, id: ClassId) -> Option<&mut ClassEntity> {
        self.slots.get_mut(id.0).and_then(Option::as_mut)
    }

    pub fn contains(&self, id: ClassId) -> bool {
        self.get(id).is_some()
    }

    /// The class an edge points at, or `None` if it was deleted
    pub fn resolve_target(&self, edge: &RelationshipEdge) -> Option<&ClassEntity> {
        self.get(edge.target)
    }

    /// Edges whose target no longer exists, with the id of their owner
    pub fn dangling_relationships(&self) -> Vec<(ClassId, &RelationshipEdge)> {
        self.entries()
            .flat_map(|(id, class)| class.relationships.iter().map(move |r| (id, r)))
            .filter(|(_, r)| !self.contains(r.target))
            .collect()
    }

    pub fn class_count(&self) -> usize {
        self.classes().count()
    }

    /// Total number of edges across all live classes, dangling ones included
    pub fn relationship_count(&self) -> usize {
        self.classes().map(|c| c.relationships.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.class_count() == 0
    }

    /// Remove every class
    ///
    /// Handles issued before the call stay invalid afterwards.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
    }

    fn resolve_pair(&self, source: &str, target: &str) -> Option<(ClassId, ClassId)> {
        match (self.find_class_id(source), self.find_class_id(target)) {
            (Some(s), Some(t)) => Some((s, t)),
            (s, t) => {
                debug!(
                    source,
                    target,
                    source_found = s.is_some(),
                    target_found = t.is_some(),
                    "Relationship endpoint not found, skipping"
                );
                None
            }
        }
    }
}
