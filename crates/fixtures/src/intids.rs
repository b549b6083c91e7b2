//! Integer ids for content objects
//!
//! Each object id gets one integer id on first registration. Ids increase
//! monotonically and are never reused within a site.

use rustc_hash::FxHashMap;
use std::collections::BTreeMap;

/// Integer id assigned by [`IntIds`]
pub type IntId = u64;

/// Two-way mapping between object ids and integer ids
#[derive(Debug)]
pub struct IntIds {
    by_object: FxHashMap<String, IntId>,
    by_int: BTreeMap<IntId, String>,
    next: IntId,
}

impl IntIds {
    /// Create an empty mapping; the first id handed out is 1
    pub fn new() -> Self {
        Self {
            by_object: FxHashMap::default(),
            by_int: BTreeMap::new(),
            next: 1,
        }
    }

    /// Register `object_id`, returning its int id
    ///
    /// Registering the same object again returns the id it already has.
    pub fn register(&mut self, object_id: &str) -> IntId {
        if let Some(&id) = self.by_object.get(object_id) {
            return id;
        }
        let id = self.next;
        self.next += 1;
        self.by_object.insert(object_id.to_string(), id);
        self.by_int.insert(id, object_id.to_string());
        tracing::trace!(object_id, int_id = id, "registered int id");
        id
    }

    /// Remove `object_id`, returning the int id it had
    pub fn unregister(&mut self, object_id: &str) -> Option<IntId> {
        let id = self.by_object.remove(object_id)?;
        self.by_int.remove(&id);
        Some(id)
    }

    /// Int id of `object_id`
    pub fn get_id(&self, object_id: &str) -> Option<IntId> {
        self.by_object.get(object_id).copied()
    }

    /// Object id registered under `id`
    pub fn get_object(&self, id: IntId) -> Option<&str> {
        self.by_int.get(&id).map(String::as_str)
    }

    /// All int ids in ascending order
    pub fn ids(&self) -> Vec<IntId> {
        self.by_int.keys().copied().collect()
    }

    /// Number of registered objects
    pub fn len(&self) -> usize {
        self.by_int.len()
    }

    /// Whether nothing is registered
    pub fn is_empty(&self) -> bool {
        self.by_int.is_empty()
    }
}

impl Default for IntIds {
    fn default() -> Self {
        Self::new()
    }
}
