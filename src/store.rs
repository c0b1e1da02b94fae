//! In-memory record store shared by users and posts.
//!
//! A store owns a map from id to record plus the counter that hands out the
//! next id. Ids start at 1, only ever grow, and are never reused once a
//! record is removed.

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;

pub type Id = i64;

/// Cloneable handle to a map of records keyed by a monotonic id.
pub struct Store<T> {
    inner: Arc<RwLock<Inner<T>>>,
}

struct Inner<T> {
    records: BTreeMap<Id, T>,
    next_id: Id,
}

impl<T: Clone> Store<T> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                records: BTreeMap::new(),
                next_id: 1,
            })),
        }
    }

    /// Reserve the next id and store the record built for it.
    pub async fn insert_with<F>(&self, build: F) -> T
    where
        F: FnOnce(Id) -> T,
    {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id += 1;

        let record = build(id);
        inner.records.insert(id, record.clone());
        record
    }

    /// All records in ascending id order, which is also insertion order.
    pub async fn list(&self) -> Vec<T> {
        self.inner.read().await.records.values().cloned().collect()
    }

    pub async fn get(&self, id: Id) -> Option<T> {
        self.inner.read().await.records.get(&id).cloned()
    }

    /// Mutate a record in place, returning the result. `None` leaves the
    /// store untouched.
    pub async fn update<F>(&self, id: Id, apply: F) -> Option<T>
    where
        F: FnOnce(&mut T),
    {
        let mut inner = self.inner.write().await;
        let record = inner.records.get_mut(&id)?;
        apply(record);
        Some(record.clone())
    }

    pub async fn remove(&self, id: Id) -> Option<T> {
        self.inner.write().await.records.remove(&id)
    }
}

#[cfg(test)]
impl<T> Store<T> {
    async fn len(&self) -> usize {
        self.inner.read().await.records.len()
    }

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl<T: Clone> Default for Store<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
