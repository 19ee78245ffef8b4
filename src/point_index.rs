//! Coordinate-keyed store with a linear-scan radius query

use std::collections::hash_map;
use std::collections::HashMap;
use std::iter::FusedIterator;

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::coordinates::{Coordinates, Located};
use crate::distance::{is_within_radius, radius_for_distance};
use crate::index::RadiusIndex;

/// Stores one payload per coordinate vector and answers radius queries by
/// scanning every entry.
///
/// Adding at coordinates that are already present replaces the old payload.
#[derive(Debug, Clone)]
pub struct PointIndex<T> {
    entries: HashMap<Coordinates, T>,
}

impl<T> PointIndex<T> {
    /// Create a new empty index.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Store `payload` at `coords`, returning the payload it replaced.
    pub fn add(&mut self, coords: impl Into<Coordinates>, payload: T) -> Option<T> {
        let coords = coords.into();
        let dimension = coords.dimension();
        let previous = self.entries.insert(coords, payload);
        trace!(dimension, entries = self.entries.len(), "add");
        if previous.is_some() {
            debug!("overwrote existing entry");
        }
        previous
    }

    /// Store a value that carries its own coordinates.
    pub fn insert(&mut self, value: T) -> Option<T>
    where
        T: Located,
    {
        let coords = value.location();
        self.add(coords, value)
    }

    /// Delete the entry at exactly `coords`. No tolerance is applied, so
    /// coordinates that drifted by any amount do not match.
    pub fn remove(&mut self, coords: &[f64]) -> bool {
        let removed = self.entries.remove(&Coordinates::from(coords)).is_some();
        trace!(
            dimension = coords.len(),
            removed,
            entries = self.entries.len(),
            "remove"
        );
        removed
    }

    /// Lazily yield payloads whose squared distance to `coords` is strictly
    /// less than `radius`.
    ///
    /// `radius` is compared against the *squared* distance as given. For a
    /// plain Euclidean distance use [`query_within`](Self::query_within).
    /// Stored points with fewer dimensions than `coords` never match; extra
    /// stored dimensions are ignored. Result order is unspecified.
    pub fn query<'a>(&'a self, coords: &'a [f64], radius: f64) -> Query<'a, T> {
        Query {
            inner: self.query_entries(coords, radius),
        }
    }

    /// Like [`query`](Self::query), yielding each match with its coordinates.
    pub fn query_entries<'a>(&'a self, coords: &'a [f64], radius: f64) -> QueryEntries<'a, T> {
        trace!(
            dimension = coords.len(),
            radius,
            entries = self.entries.len(),
            "query"
        );
        QueryEntries {
            entries: self.entries.iter(),
            center: coords,
            radius,
        }
    }

    /// Query with a conventional Euclidean `distance` rather than a squared
    /// radius. Negative distances match nothing.
    pub fn query_within<'a>(&'a self, coords: &'a [f64], distance: f64) -> Query<'a, T> {
        self.query(coords, radius_for_distance(distance))
    }

    /// Evaluate the same membership test as [`query`](Self::query) across
    /// threads and collect every match.
    pub fn par_query(&self, coords: &[f64], radius: f64) -> Vec<&T>
    where
        T: Sync,
    {
        self.entries
            .par_iter()
            .filter(|(stored, _)| is_within_radius(coords, stored.as_slice(), radius))
            .map(|(_, payload)| payload)
            .collect()
    }

    /// Get the payload stored at exactly `coords`.
    pub fn get(&self, coords: &[f64]) -> Option<&T> {
        self.entries.get(&Coordinates::from(coords))
    }

    /// Whether an entry is stored at exactly `coords`.
    pub fn contains(&self, coords: &[f64]) -> bool {
        self.entries.contains_key(&Coordinates::from(coords))
    }

    /// Iterate over all (coordinates, payload) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&Coordinates, &T)> {
        self.entries.iter()
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// The number of entries in this index.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for PointIndex<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RadiusIndex<T> for PointIndex<T> {
    fn remove(&mut self, coords: &[f64]) -> bool {
        PointIndex::remove(self, coords)
    }

    fn query<'a>(&'a self, coords: &'a [f64], radius: f64) -> Query<'a, T> {
        PointIndex::query(self, coords, radius)
    }

    fn len(&self) -> usize {
        PointIndex::len(self)
    }
}

impl<T> FromIterator<(Coordinates, T)> for PointIndex<T> {
    fn from_iter<I: IntoIterator<Item = (Coordinates, T)>>(iter: I) -> Self {
        let mut index = Self::new();
        index.extend(iter);
        index
    }
}

impl<T> Extend<(Coordinates, T)> for PointIndex<T> {
    fn extend<I: IntoIterator<Item = (Coordinates, T)>>(&mut self, iter: I) {
        for (coords, payload) in iter {
            self.add(coords, payload);
        }
    }
}

/// Lazy radius query over a [`PointIndex`], yielding `(coordinates, payload)`.
///
/// Holds a shared borrow of the index, so the table cannot change while the
/// traversal is live. Dropping it early has no effect on the index.
#[derive(Debug, Clone)]
pub struct QueryEntries<'a, T> {
    entries: hash_map::Iter<'a, Coordinates, T>,
    center: &'a [f64],
    radius: f64,
}

impl<'a, T> Iterator for QueryEntries<'a, T> {
    type Item = (&'a Coordinates, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let (center, radius) = (self.center, self.radius);
        self.entries
            .find(|(stored, _)| is_within_radius(center, stored.as_slice(), radius))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.entries.size_hint().1)
    }
}

impl<T> FusedIterator for QueryEntries<'_, T> {}

/// Lazy radius query over a [`PointIndex`], yielding payloads.
#[derive(Debug, Clone)]
pub struct Query<'a, T> {
    inner: QueryEntries<'a, T>,
}

impl<'a, T> Iterator for Query<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next().map(|(_, payload)| payload)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> FusedIterator for Query<'_, T> {}
