//! Index trait shared by the raw point index and the adapter over it

use crate::point_index::Query;

/// The removal and radius-query surface common to every index in this crate.
///
/// Insertion is deliberately absent: [`PointIndex`](crate::PointIndex) takes
/// explicit coordinates while [`Adapter`](crate::Adapter) derives them from
/// the value.
pub trait RadiusIndex<T> {
    /// Remove the entry stored at exactly `coords`. Returns whether one existed.
    fn remove(&mut self, coords: &[f64]) -> bool;

    /// Lazily yield every payload whose squared distance to `coords` is
    /// strictly below `radius`.
    fn query<'a>(&'a self, coords: &'a [f64], radius: f64) -> Query<'a, T>;

    /// The number of entries in this index.
    fn len(&self) -> usize;

    /// Whether the index is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
