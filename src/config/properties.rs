//! Process-wide configuration properties
//!
//! Properties come from the `properties:` map of `mule-app.yaml` and from
//! `-D key=value` flags, later values overriding earlier ones.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Ordered `key -> value` properties
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Properties(BTreeMap<String, String>);

impl Properties {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    #[allow(dead_code)]
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Apply `other` on top of `self`
    pub fn merge(&mut self, other: Properties) {
        self.0.extend(other.0);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for Properties {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Parse a `key=value` definition as given to `-D`
pub fn parse_definition(input: &str) -> Result<(String, String), String> {
    let (key, value) = input
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{input}'"))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing property name in '{input}'"));
    }

    Ok((key.to_string(), value.to_string()))
}
