//! Backend-neutral node and parameter types for the graph store

use std::collections::BTreeMap;

/// Ordered list of string properties.
///
/// Order is kept so that rendered map literals (`{ name: $name, ... }`) come
/// out in the order the caller supplied.
pub type PropertySet = Vec<(String, String)>;

/// A node as read back from the graph
#[derive(Debug, Clone, PartialEq)]
pub struct NodeRecord {
    /// Database-assigned node id (`id(n)`)
    pub id: i64,
    pub labels: Vec<String>,
    pub properties: BTreeMap<String, String>,
}

impl NodeRecord {
    /// Get a string property by key
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// Check whether the node carries the given label
    pub fn has_label(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }
}

/// Value bound to a `$param` placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Text(String),
    Int(i64),
}

impl ParamValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ParamValue::Text(s) => Some(s),
            ParamValue::Int(_) => None,
        }
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::Text(s)
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Text(s.to_string())
    }
}

impl From<i64> for ParamValue {
    fn from(i: i64) -> Self {
        ParamValue::Int(i)
    }
}
