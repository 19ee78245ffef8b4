//! Coordinate vectors and the values that carry them

use crate::error::{Result, SpaceError};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::str::FromStr;

/// A point's position: an ordered sequence of `f64` components.
///
/// Equality and hashing are component-wise through [`OrderedFloat`], so the
/// type can key a hash map without going through a string form. Two
/// consequences follow: `-0.0` equals `0.0`, and every NaN equals every other
/// NaN. Both rules hold for `Eq` and `Hash` alike.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Coordinates {
    data: Vec<f64>,
}

impl Coordinates {
    /// Create coordinates from a Vec<f64>
    pub fn new(data: Vec<f64>) -> Self {
        Self { data }
    }

    /// Number of components
    pub fn dimension(&self) -> usize {
        self.data.len()
    }

    /// Get the underlying components as a slice
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Consume the coordinates, returning the components
    pub fn into_inner(self) -> Vec<f64> {
        self.data
    }
}

impl PartialEq for Coordinates {
    fn eq(&self, other: &Self) -> bool {
        self.data.len() == other.data.len()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| OrderedFloat(*a) == OrderedFloat(*b))
    }
}

impl Eq for Coordinates {}

impl Hash for Coordinates {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.data.len().hash(state);
        for component in &self.data {
            OrderedFloat(*component).hash(state);
        }
    }
}

impl Deref for Coordinates {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.data
    }
}

impl From<Vec<f64>> for Coordinates {
    fn from(data: Vec<f64>) -> Self {
        Self::new(data)
    }
}

impl From<&[f64]> for Coordinates {
    fn from(data: &[f64]) -> Self {
        Self::new(data.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for Coordinates {
    fn from(data: [f64; N]) -> Self {
        Self::new(data.to_vec())
    }
}

impl FromStr for Coordinates {
    type Err = SpaceError;

    /// Parse comma-separated components, optionally wrapped in brackets
    /// (`"20, 3"` or `"[20, 3]"`).
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .unwrap_or(trimmed);

        if inner.trim().is_empty() {
            return Ok(Self::default());
        }

        let data: Result<Vec<f64>> = inner
            .split(',')
            .map(|x| {
                x.trim()
                    .parse::<f64>()
                    .map_err(|_| SpaceError::InvalidCoordinates {
                        reason: format!("Invalid number: {:?}", x.trim()),
                    })
            })
            .collect();
        Ok(Self::new(data?))
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, component) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", component)?;
        }
        write!(f, "]")
    }
}

/// A value that natively knows where it sits in the space.
pub trait Located {
    fn location(&self) -> Coordinates;
}

impl Located for Coordinates {
    fn location(&self) -> Coordinates {
        self.clone()
    }
}
