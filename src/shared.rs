//! Thread-safe index with snapshot queries.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::coordinates::Coordinates;
use crate::point_index::PointIndex;

/// A [`PointIndex`] that many threads can write to and query.
///
/// Queries run against a [`snapshot`](Self::snapshot): an immutable,
/// point-in-time `Arc` of the table. Writers copy the table before mutating
/// it whenever a snapshot is still alive, so an iterator over a snapshot
/// never sees a concurrent add or remove. Cloning a `SharedIndex` yields
/// another handle to the same table.
#[derive(Debug)]
pub struct SharedIndex<T> {
    table: Arc<RwLock<Arc<PointIndex<T>>>>,
}

impl<T: Clone> SharedIndex<T> {
    /// Create a new empty shared index.
    pub fn new() -> Self {
        Self {
            table: Arc::new(RwLock::new(Arc::new(PointIndex::new()))),
        }
    }

    /// Store `payload` at `coords`, returning the payload it replaced.
    pub fn add(&self, coords: impl Into<Coordinates>, payload: T) -> Option<T> {
        let mut table = self.write();
        Self::table_mut(&mut table).add(coords, payload)
    }

    /// Delete the entry at exactly `coords`. Returns whether one existed.
    pub fn remove(&self, coords: &[f64]) -> bool {
        let mut table = self.write();
        if !table.contains(coords) {
            return false;
        }
        Self::table_mut(&mut table).remove(coords)
    }

    /// The current contents, frozen. Later writes are not visible through it.
    pub fn snapshot(&self) -> Arc<PointIndex<T>> {
        Arc::clone(&self.read())
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn table_mut(table: &mut Arc<PointIndex<T>>) -> &mut PointIndex<T> {
        if Arc::strong_count(table) > 1 {
            debug!(entries = table.len(), "copying table held by live snapshots");
        }
        Arc::make_mut(table)
    }

    // No operation leaves the table half-updated, so a poisoned lock still
    // guards a consistent table.
    fn read(&self) -> RwLockReadGuard<'_, Arc<PointIndex<T>>> {
        self.table.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Arc<PointIndex<T>>> {
        self.table.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> Clone for SharedIndex<T> {
    fn clone(&self) -> Self {
        Self {
            table: Arc::clone(&self.table),
        }
    }
}

impl<T: Clone> Default for SharedIndex<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_snapshot_is_isolated_from_writes() {
        let shared = SharedIndex::new();
        shared.add([1.0], "a");
        shared.add([2.0], "b");

        let snapshot = shared.snapshot();
        let mut query = snapshot.query(&[1.5], 1.0);
        let first = query.next();

        shared.add([1.4], "c");
        assert!(shared.remove(&[2.0]));

        let rest: Vec<_> = query.collect();
        assert_eq!(first.into_iter().count() + rest.len(), 2);
        assert_eq!(snapshot.len(), 2);
        assert_eq!(shared.len(), 2);
        assert!(shared.snapshot().contains(&[1.4]));
    }

    #[test]
    fn test_remove_absent() {
        let shared: SharedIndex<u32> = SharedIndex::default();
        assert!(!shared.remove(&[0.0]));
        assert!(shared.is_empty());
    }

    #[test]
    fn test_clones_share_one_table() {
        let shared = SharedIndex::new();
        let other = shared.clone();
        other.add([3.0, 4.0], 7u32);
        assert_eq!(shared.snapshot().get(&[3.0, 4.0]), Some(&7));
    }

    #[test]
    fn test_concurrent_writers_and_readers() {
        let shared = SharedIndex::new();

        let writers: Vec<_> = (0..4)
            .map(|t| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for i in 0..250 {
                        shared.add([t as f64, i as f64], t * 1000 + i);
                    }
                })
            })
            .collect();

        let readers: Vec<_> = (0..2)
            .map(|_| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for _ in 0..50 {
                        let snapshot = shared.snapshot();
                        let counted = snapshot.query(&[], 1.0).count();
                        assert_eq!(counted, snapshot.len());
                    }
                })
            })
            .collect();

        for handle in writers.into_iter().chain(readers) {
            handle.join().unwrap();
        }
        assert_eq!(shared.len(), 1000);
    }
}
