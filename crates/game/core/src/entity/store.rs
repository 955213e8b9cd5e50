use super::{Entity, EntityId};

/// Flat ownership list of live entities, kept in insertion order.
///
/// Insertion order is the tie-break for all pairwise work. Since ids grow
/// monotonically, the list is also sorted by id and lookups are binary
/// searches.
#[derive(Default)]
pub struct EntityStore {
    entities: Vec<Entity>,
    next_id: u32,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes ownership of `entity`, assigns its handle and appends it.
    pub fn insert(&mut self, mut entity: Entity) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        entity.assign_id(id);
        self.entities.push(entity);
        id
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    fn index_of(&self, id: EntityId) -> Option<usize> {
        self.entities.binary_search_by_key(&id, Entity::id).ok()
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.index_of(id).map(|index| &self.entities[index])
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.index_of(id).map(|index| &mut self.entities[index])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.iter_mut()
    }

    pub fn ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.entities.iter().map(Entity::id)
    }

    /// Removes every entity for which `keep` returns false, releasing its
    /// components. Returns the number removed.
    pub fn retain(&mut self, mut keep: impl FnMut(&Entity) -> bool) -> usize {
        let (kept, removed): (Vec<_>, Vec<_>) = std::mem::take(&mut self.entities)
            .into_iter()
            .partition(|entity| keep(entity));
        self.entities = kept;
        let count = removed.len();
        for mut entity in removed {
            entity.release_all();
        }
        count
    }
}
