//! Identifier resolution for the full schema variant.
//!
//! Edges in this schema are bare id strings, so every consumer needs a
//! lookup table from identifier to owning record before it can traverse
//! anything. `EntityIndex` is that table. It lives outside the record types
//! and belongs to whoever loads the dataset.
//!
//! The index accepts whatever it is given: duplicate ids are last-write-wins
//! and dangling references are reported, never rejected.

use hashbrown::HashMap;

use crate::full::{EdgeRef, Entity};

/// A lookup table from entity id to entity.
///
/// `id` is treated as globally unique across entity types; a cross-type
/// collision behaves exactly like a same-type collision.
#[derive(Debug, Clone, Default)]
pub struct EntityIndex {
    by_id: HashMap<String, Entity>,
    /// Payload-bearing edge records have endpoints instead of an id.
    payload_edges: Vec<Entity>,
}

impl EntityIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record. Returns the previously indexed record when the id was
    /// already taken (last write wins). Payload-edge records always return
    /// `None`.
    pub fn insert(&mut self, entity: Entity) -> Option<Entity> {
        match entity.id() {
            Some(id) => self.by_id.insert(id.to_owned(), entity),
            None => {
                self.payload_edges.push(entity);
                None
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&Entity> {
        self.by_id.get(id)
    }

    /// Follow one edge reference to its target, if the target is indexed.
    pub fn resolve(&self, edge: &EdgeRef) -> Option<&Entity> {
        self.by_id.get(&edge.id)
    }

    /// Every edge reference in the index whose target id is not present,
    /// paired with a label for the owning record (its id, or its kind for
    /// payload edges). A report, not an error: a partially loaded dataset is
    /// expected to have plenty of these.
    pub fn unresolved(&self) -> Vec<(String, EdgeRef)> {
        let mut dangling = Vec::new();
        let owners = self
            .by_id
            .values()
            .chain(self.payload_edges.iter());
        for entity in owners {
            let owner = entity
                .id()
                .map(str::to_owned)
                .unwrap_or_else(|| entity.kind().to_owned());
            for edge in entity.edge_refs() {
                if !self.by_id.contains_key(&edge.id) {
                    dangling.push((owner.clone(), edge));
                }
            }
        }
        dangling
    }

    pub fn len(&self) -> usize {
        self.by_id.len() + self.payload_edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty() && self.payload_edges.is_empty()
    }

    /// All id-keyed records, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entity)> {
        self.by_id.iter().map(|(id, e)| (id.as_str(), e))
    }

    /// The payload-bearing edge records, in insertion order.
    pub fn payload_edges(&self) -> &[Entity] {
        &self.payload_edges
    }
}

impl Extend<Entity> for EntityIndex {
    fn extend<T: IntoIterator<Item = Entity>>(&mut self, iter: T) {
        for entity in iter {
            self.insert(entity);
        }
    }
}

impl FromIterator<Entity> for EntityIndex {
    fn from_iter<T: IntoIterator<Item = Entity>>(iter: T) -> Self {
        let mut index = Self::new();
        index.extend(iter);
        index
    }
}
