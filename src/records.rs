//! Loading domain records from JSON files

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::info;

use crate::error::Result;

/// Read a JSON array of records from `path`.
///
/// A missing or unreadable file is an [`IoError`](crate::SpaceError::IoError);
/// content that is not an array of `T` is a
/// [`SerializationError`](crate::SpaceError::SerializationError).
pub fn load_records<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<Vec<T>> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)?;
    let records: Vec<T> = serde_json::from_str(&raw)?;
    info!(count = records.len(), path = %path.display(), "loaded records");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SpaceError;
    use serde::Deserialize;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[derive(Debug, Deserialize, PartialEq)]
    struct Person {
        name: String,
        age: f64,
    }

    #[test]
    fn test_load_records() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"[{{"name": "Ana", "age": 30}}]"#).unwrap();

        let people: Vec<Person> = load_records(file.path()).unwrap();
        assert_eq!(
            people,
            vec![Person {
                name: "Ana".to_string(),
                age: 30.0
            }]
        );
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let result = load_records::<Person>(dir.path().join("absent.json"));
        assert!(matches!(result, Err(SpaceError::IoError(_))));
    }

    #[test]
    fn test_malformed_json_is_serialization_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"name": "not a list"}}"#).unwrap();

        let result = load_records::<Person>(file.path());
        assert!(matches!(result, Err(SpaceError::SerializationError(_))));
    }
}
