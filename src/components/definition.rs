//! Parsed component definitions.

use serde_yaml::{Mapping, Value};
use std::path::Path;

use crate::error::{CirrusError, Result};

/// Structured configuration parsed from a component's definition file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Definition {
    values: Mapping,
}

impl Definition {
    /// Parse definition content read from `path`.
    ///
    /// An empty document yields an empty definition; anything other than a
    /// mapping is rejected.
    pub fn from_yaml(content: &str, path: &Path) -> Result<Self> {
        let blank = content
            .lines()
            .map(str::trim)
            .all(|line| line.is_empty() || line.starts_with('#'));
        if blank {
            return Ok(Self::default());
        }

        let value: Value =
            serde_yaml::from_str(content).map_err(|e| CirrusError::ConfigParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        match value {
            Value::Null => Ok(Self::default()),
            Value::Mapping(values) => Ok(Self { values }),
            _ => Err(CirrusError::ConfigParseError {
                path: path.to_path_buf(),
                message: "expected a mapping at the top level".to_string(),
            }),
        }
    }

    /// Get a raw value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Get a boolean, falling back to `default` when the key is absent.
    ///
    /// Returns `None` when the key holds something other than a boolean.
    pub fn get_bool(&self, key: &str, default: bool) -> Option<bool> {
        match self.values.get(key) {
            None => Some(default),
            Some(value) => value.as_bool(),
        }
    }

    /// Get a string value.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(Value::as_str)
    }

    /// The underlying mapping.
    pub fn as_mapping(&self) -> &Mapping {
        &self.values
    }

    /// Check if the definition holds no keys.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
