//! In-memory group storage.
//!
//! `GroupStore` owns the id -> group map for one server instance together
//! with the id counter used on creation. Every stored group carries its own
//! key as `id`.

use crate::types::group::Group;
use std::collections::BTreeMap;

/// Errors raised by [`GroupStore`] mutations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No positive id is left to hand out
    #[error("group id space exhausted")]
    IdSpaceExhausted,
}

/// Map of group id to group, plus a monotonic id counter.
#[derive(Debug, Clone)]
pub struct GroupStore {
    groups: BTreeMap<i64, Group>,
    next_id: i64,
}

impl Default for GroupStore {
    fn default() -> Self {
        Self::new(1)
    }
}

impl GroupStore {
    /// Create an empty store whose first generated id is `first_id`.
    pub fn new(first_id: i64) -> Self {
        Self {
            groups: BTreeMap::new(),
            next_id: first_id.max(1),
        }
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn contains(&self, id: i64) -> bool {
        self.groups.contains_key(&id)
    }

    pub fn get(&self, id: i64) -> Option<&Group> {
        self.groups.get(&id)
    }

    /// All groups, in ascending id order.
    pub fn all(&self) -> Vec<Group> {
        self.groups.values().cloned().collect()
    }

    /// Groups whose name contains `marker` as a literal, case-sensitive substring.
    pub fn filter_by_name(&self, marker: &str) -> Vec<Group> {
        self.groups
            .values()
            .filter(|group| group.name.contains(marker))
            .cloned()
            .collect()
    }

    /// Store `group` under a freshly generated id and return the stored copy.
    ///
    /// Any id already present in the group is overwritten.
    pub fn create(&mut self, mut group: Group) -> Result<Group, StoreError> {
        let id = self.allocate_id()?;
        group.id = Some(id);
        self.groups.insert(id, group.clone());
        Ok(group)
    }

    /// Replace (or insert) the group stored at `id`. The body's own id, if
    /// any, is ignored so the key and the record never disagree.
    pub fn upsert(&mut self, id: i64, mut group: Group) -> &Group {
        group.id = Some(id);
        self.groups.insert(id, group);
        &self.groups[&id]
    }

    /// Remove the group at `id`, returning it if it was present.
    pub fn remove(&mut self, id: i64) -> Option<Group> {
        self.groups.remove(&id)
    }

    /// Next unused id. Ids inserted through `upsert` are skipped.
    fn allocate_id(&mut self) -> Result<i64, StoreError> {
        let mut candidate = self.next_id;
        while self.groups.contains_key(&candidate) {
            candidate = candidate
                .checked_add(1)
                .ok_or(StoreError::IdSpaceExhausted)?;
        }
        self.next_id = candidate
            .checked_add(1)
            .ok_or(StoreError::IdSpaceExhausted)?;
        Ok(candidate)
    }
}
