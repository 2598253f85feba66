//! Collection entity and request payloads

use super::NodeEntity;
use crate::neo4j::{NodeRecord, PropertySet};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum length of a collection name, in characters
pub const MAX_NAME_LEN: usize = 200;
/// Maximum length of a collection description, in characters
pub const MAX_DESCRIPTION_LEN: usize = 2000;

/// A named, described grouping stored as a `Collection` node.
///
/// Both fields are optional: a node created without a payload has neither.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Collection {
    pub id: i64,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl NodeEntity for Collection {
    const LABEL: &'static str = "Collection";

    fn from_record(record: NodeRecord) -> Result<Self> {
        Ok(Self {
            id: record.id,
            name: record.property("name").map(str::to_string),
            description: record.property("description").map(str::to_string),
        })
    }
}

/// Payload validation failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name must not be blank")]
    BlankName,

    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },
}

fn check_len(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(())
}

fn check_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::BlankName);
    }
    check_len("name", name, MAX_NAME_LEN)
}

/// Payload for creating a collection
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewCollection {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl NewCollection {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_name(&self.name)?;
        check_len("description", &self.description, MAX_DESCRIPTION_LEN)
    }
}

/// Partial update; absent fields keep their stored value
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CollectionPatch {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl CollectionPatch {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = &self.name {
            check_name(name)?;
        }
        if let Some(description) = &self.description {
            check_len("description", description, MAX_DESCRIPTION_LEN)?;
        }
        Ok(())
    }

    /// Properties to merge, in `name`, `description` order
    pub fn to_properties(&self) -> PropertySet {
        [("name", &self.name), ("description", &self.description)]
            .into_iter()
            .filter_map(|(k, v)| v.as_ref().map(|v| (k.to_string(), v.clone())))
            .collect()
    }
}
