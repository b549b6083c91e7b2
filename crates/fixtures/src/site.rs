//! Explicit site context
//!
//! Holds the content objects of one test run together with the site's int
//! id utility. Functions that need the site take it as an argument.

use crate::demo::Demo;
use crate::error::FixtureError;
use crate::intids::{IntId, IntIds};
use lazyrel_core::{Access, Extent, Producer};
use lazyrel_lazylist::LazySequence;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Content objects plus their int ids
#[derive(Debug, Default)]
pub struct Site {
    objects: BTreeMap<String, Arc<Demo>>,
    intids: IntIds,
}

impl Site {
    /// Create an empty site
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `demo` and register it with the site's int ids
    ///
    /// # Errors
    ///
    /// `DuplicateObject` if an object with the same id is already present.
    pub fn add(&mut self, demo: Demo) -> Result<IntId, FixtureError> {
        if self.objects.contains_key(demo.id()) {
            return Err(FixtureError::DuplicateObject(demo.id().to_string()));
        }
        let int_id = self.intids.register(demo.id());
        self.objects.insert(demo.id().to_string(), Arc::new(demo));
        Ok(int_id)
    }

    /// Remove the object with id `object_id`
    pub fn remove(&mut self, object_id: &str) -> Option<Arc<Demo>> {
        let demo = self.objects.remove(object_id)?;
        self.intids.unregister(object_id);
        Some(demo)
    }

    /// Object with id `object_id`
    pub fn get(&self, object_id: &str) -> Option<Arc<Demo>> {
        self.objects.get(object_id).cloned()
    }

    /// Object registered under `int_id`
    pub fn resolve(&self, int_id: IntId) -> Result<Arc<Demo>, FixtureError> {
        self.intids
            .get_object(int_id)
            .and_then(|object_id| self.get(object_id))
            .ok_or(FixtureError::UnknownIntId(int_id))
    }

    /// Object ids in ascending order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.objects.keys().map(String::as_str)
    }

    /// Number of objects
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the site has no objects
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// The site's int id utility
    pub fn intids(&self) -> &IntIds {
        &self.intids
    }

    /// Lazily resolve `int_ids` to objects
    ///
    /// Nothing is looked up until an element is read. An id with no object
    /// behind it fails with `UnknownIntId` at the index it occupies.
    pub fn resolve_lazy(&self, int_ids: Vec<IntId>) -> LazySequence<Resolver<'_>> {
        LazySequence::new(Resolver {
            site: self,
            int_ids,
            next: 0,
        })
    }
}

/// Producer resolving int ids against a site
#[derive(Debug)]
pub struct Resolver<'a> {
    site: &'a Site,
    int_ids: Vec<IntId>,
    next: usize,
}

impl<'a> Producer for Resolver<'a> {
    type Item = Arc<Demo>;
    type Error = FixtureError;

    fn extent(&self) -> Extent {
        Extent::Exact(self.int_ids.len())
    }

    fn access(&self) -> Access {
        Access::Random
    }

    fn produce_next(&mut self) -> Option<Result<Arc<Demo>, FixtureError>> {
        let index = self.next;
        self.next += 1;
        self.produce_at(index)
    }

    fn produce_at(&mut self, index: usize) -> Option<Result<Arc<Demo>, FixtureError>> {
        let int_id = *self.int_ids.get(index)?;
        Some(self.site.resolve(int_id))
    }
}
