use std::collections::BTreeMap;

use categorydesk_catalog::{Patch, Record};
use categorydesk_core::{DomainError, DomainResult, RecordId};

/// Numbered in-memory collection.
///
/// Ids come from a monotonically increasing counter, so id order is
/// insertion order and iteration never needs a separate sequence.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    records: BTreeMap<RecordId, T>,
    next_id: u64,
}

impl<T> Collection<T> {
    pub fn new() -> Self {
        Self {
            records: BTreeMap::new(),
            next_id: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> Collection<T> {
    /// All current values in insertion order.
    pub fn list(&self) -> Vec<T> {
        self.records.values().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.records.values()
    }

    pub fn get(&self, id: RecordId) -> Option<&T> {
        self.records.get(&id)
    }

    pub fn require(&self, id: RecordId) -> DomainResult<&T> {
        self.records
            .get(&id)
            .ok_or_else(|| DomainError::not_found(T::ENTITY, id))
    }

    /// Assign the next id, store the record `build` produces and return it.
    pub fn insert_with(&mut self, build: impl FnOnce(RecordId) -> T) -> T {
        let id = RecordId::new(self.next_id);
        self.next_id += 1;
        let record = build(id);
        debug_assert_eq!(record.id(), id, "record built with a foreign id");
        self.records.insert(record.id(), record.clone());
        record
    }

    /// Shallow-merge `patch` over the stored record.
    pub fn update<P: Patch<T>>(&mut self, id: RecordId, patch: P) -> DomainResult<T> {
        let record = self
            .records
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found(T::ENTITY, id))?;
        patch.apply_to(record);
        Ok(record.clone())
    }

    /// Remove if present. Absent ids are not an error.
    pub fn remove(&mut self, id: RecordId) -> Option<T> {
        self.records.remove(&id)
    }
}
