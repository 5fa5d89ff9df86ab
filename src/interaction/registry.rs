//! Registry of live interactable entities.
use bevy::prelude::*;

/// Ordered, duplicate-free set of registered interactables.
///
/// Registration order doubles as the proximity tie-break order.
#[derive(Resource, Debug, Default)]
pub struct InteractableRegistry {
    entries: Vec<Entity>,
}

impl InteractableRegistry {
    /// Adds `entity`, returning false when it was already registered.
    pub fn register(&mut self, entity: Entity) -> bool {
        if self.contains(entity) {
            return false;
        }
        self.entries.push(entity);
        true
    }

    /// Removes `entity`, returning false when it was not registered.
    pub fn unregister(&mut self, entity: Entity) -> bool {
        let Some(index) = self.entries.iter().position(|entry| *entry == entity) else {
            return false;
        };
        self.entries.remove(index);
        true
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.entries.contains(&entity)
    }

    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
