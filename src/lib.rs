//! # Vector Space
//!
//! An exact, in-memory radius index over arbitrary records.
//!
//! This library provides:
//! - Coordinate vectors usable as hash-map keys
//! - A point index with last-write-wins insertion and exact removal
//! - Lazy radius queries over a linear scan
//! - An adapter that derives coordinates from domain values
//! - A thread-safe variant with snapshot queries
//! - Loading records from JSON files
//!
//! ## Radius units
//!
//! [`PointIndex::query`] keeps a point when its *squared* Euclidean distance
//! to the query is strictly less than `radius`. Pass a squared distance, or
//! use [`PointIndex::query_within`] to pass a plain one.
//!
//! ## Example
//!
//! ```rust
//! use vector_space::PointIndex;
//!
//! let mut index = PointIndex::new();
//! index.add([10.0, 4.0], "Jane");
//! index.add([20.0, 4.0], "Jhon");
//! index.add([30.0, 3.0], "Ana");
//!
//! let near: Vec<_> = index.query(&[20.0, 3.0], 10.0).collect();
//! assert_eq!(near, vec![&"Jhon"]);
//!
//! assert!(index.remove(&[30.0, 3.0]));
//! assert_eq!(index.len(), 2);
//! ```

pub mod adapter;
pub mod coordinates;
pub mod distance;
pub mod error;
pub mod index;
pub mod point_index;
pub mod records;
pub mod shared;

pub use adapter::Adapter;
pub use coordinates::{Coordinates, Located};
pub use error::{Result, SpaceError};
pub use index::RadiusIndex;
pub use point_index::{PointIndex, Query, QueryEntries};
pub use records::load_records;
pub use shared::SharedIndex;
