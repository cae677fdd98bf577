//! Entity store with deferred add/remove.
//!
//! New entities are staged and only become visible at the next `update()`;
//! dead entities are dropped at the same point. Every system in a frame
//! therefore iterates the same snapshot of the entity set.
//!
//! Live entities are kept in id order (ids are allocated monotonically and
//! removal preserves order), so lookup by id is a binary search.

use std::collections::HashMap;

use shapestorm_core::enums::Tag;

use crate::entity::{Entity, EntityId};

#[derive(Debug, Default)]
pub struct EntityManager {
    entities: Vec<Entity>,
    pending: Vec<Entity>,
    by_tag: HashMap<Tag, Vec<EntityId>>,
    next_id: u64,
}

impl EntityManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage a new entity. It is not visible through any view until the
    /// next `update()`; the returned handle is for attaching components.
    pub fn add_entity(&mut self, tag: Tag) -> &mut Entity {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        let slot = self.pending.len();
        self.pending.push(Entity::new(id, tag));
        &mut self.pending[slot]
    }

    /// Frame boundary: commit staged entities, then drop dead ones from the
    /// live list and every tag index.
    pub fn update(&mut self) {
        for entity in self.pending.drain(..) {
            self.by_tag.entry(entity.tag()).or_default().push(entity.id());
            self.entities.push(entity);
        }

        let dead: Vec<EntityId> = self
            .entities
            .iter()
            .filter(|e| !e.is_alive())
            .map(Entity::id)
            .collect();
        if dead.is_empty() {
            return;
        }

        self.entities.retain(Entity::is_alive);
        for ids in self.by_tag.values_mut() {
            ids.retain(|id| dead.binary_search(id).is_err());
        }
    }

    /// All live entities in insertion order.
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn entities_mut(&mut self) -> impl Iterator<Item = &mut Entity> + '_ {
        self.entities.iter_mut()
    }

    /// Ids of the live entities carrying `tag`, in insertion order.
    pub fn ids(&self, tag: Tag) -> &[EntityId] {
        self.by_tag.get(&tag).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn entities_with_tag(&self, tag: Tag) -> impl Iterator<Item = &Entity> + '_ {
        self.ids(tag).iter().filter_map(|&id| self.get(id))
    }

    pub fn entities_with_tag_mut(&mut self, tag: Tag) -> impl Iterator<Item = &mut Entity> + '_ {
        self.entities.iter_mut().filter(move |e| e.tag() == tag)
    }

    /// Live entity by id. Staged entities are not found.
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        let idx = self.entities.binary_search_by_key(&id, Entity::id).ok()?;
        Some(&self.entities[idx])
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        let idx = self.entities.binary_search_by_key(&id, Entity::id).ok()?;
        Some(&mut self.entities[idx])
    }

    /// Number of live entities.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn count(&self, tag: Tag) -> usize {
        self.ids(tag).len()
    }

    /// Number of entities staged for the next `update()`.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}
