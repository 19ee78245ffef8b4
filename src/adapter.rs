//! Adapter that indexes arbitrary values through an extraction function

use std::fmt;

use crate::coordinates::Coordinates;
use crate::index::RadiusIndex;
use crate::point_index::{PointIndex, Query, QueryEntries};

/// Indexes values that do not carry a coordinate field themselves.
///
/// The extraction function is fixed at construction and must be pure: the
/// same value always maps to the same coordinates. The value is stored
/// untouched, so queries hand back exactly what was added.
///
/// ```rust
/// use vector_space::{Adapter, Coordinates};
///
/// struct Person {
///     name: &'static str,
///     age: f64,
/// }
///
/// let mut people = Adapter::new(|p: &Person| Coordinates::from([p.age]));
/// people.add(Person { name: "Jane", age: 10.0 });
/// people.add(Person { name: "Jack", age: 14.0 });
///
/// let found: Vec<&str> = people.query(&[10.0], 5.0).map(|p| p.name).collect();
/// assert_eq!(found, vec!["Jane"]);
/// ```
pub struct Adapter<T, F> {
    index: PointIndex<T>,
    extract: F,
}

impl<T, F> Adapter<T, F>
where
    F: Fn(&T) -> Coordinates,
{
    /// Create an empty adapter around `extract`.
    pub fn new(extract: F) -> Self {
        Self {
            index: PointIndex::new(),
            extract,
        }
    }

    /// Index `value` at the coordinates the extraction function derives for
    /// it, returning any value previously stored there.
    pub fn add(&mut self, value: T) -> Option<T> {
        let coords = (self.extract)(&value);
        self.index.add(coords, value)
    }

    /// The coordinates `value` would be stored at.
    pub fn coordinates_of(&self, value: &T) -> Coordinates {
        (self.extract)(value)
    }
}

impl<T, F> Adapter<T, F> {
    /// Remove the value stored at exactly `coords`. Returns whether one existed.
    pub fn remove(&mut self, coords: &[f64]) -> bool {
        self.index.remove(coords)
    }

    /// Lazily yield values whose squared distance to `coords` is below `radius`.
    pub fn query<'a>(&'a self, coords: &'a [f64], radius: f64) -> Query<'a, T> {
        self.index.query(coords, radius)
    }

    /// Like [`query`](Self::query), yielding each value with its coordinates.
    pub fn query_entries<'a>(&'a self, coords: &'a [f64], radius: f64) -> QueryEntries<'a, T> {
        self.index.query_entries(coords, radius)
    }

    /// Query with a plain Euclidean `distance` instead of a squared radius.
    pub fn query_within<'a>(&'a self, coords: &'a [f64], distance: f64) -> Query<'a, T> {
        self.index.query_within(coords, distance)
    }

    /// Get the value stored at exactly `coords`.
    pub fn get(&self, coords: &[f64]) -> Option<&T> {
        self.index.get(coords)
    }

    /// Whether a value is stored at exactly `coords`.
    pub fn contains(&self, coords: &[f64]) -> bool {
        self.index.contains(coords)
    }

    /// The number of values in this adapter.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the adapter is empty.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Get a reference to the underlying index.
    pub fn index(&self) -> &PointIndex<T> {
        &self.index
    }

    /// Give up the extraction function and keep the populated index.
    pub fn into_index(self) -> PointIndex<T> {
        self.index
    }
}

impl<T, F> RadiusIndex<T> for Adapter<T, F> {
    fn remove(&mut self, coords: &[f64]) -> bool {
        self.index.remove(coords)
    }

    fn query<'a>(&'a self, coords: &'a [f64], radius: f64) -> Query<'a, T> {
        self.index.query(coords, radius)
    }

    fn len(&self) -> usize {
        self.index.len()
    }
}

impl<T, F> Extend<T> for Adapter<T, F>
where
    F: Fn(&T) -> Coordinates,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Adapter<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Adapter")
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}
