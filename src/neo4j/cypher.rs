//! Cypher statement builders shared by every repository.
//!
//! Labels and property keys are spliced into the statement text, so they must
//! match `[A-Za-z_][A-Za-z0-9_]*`. Values are never spliced; they always travel
//! as `$key` parameters.

use super::models::{ParamValue, PropertySet};
use anyhow::{bail, Result};
use std::collections::BTreeMap;

/// Parameter name used for node ids
const ID_PARAM: &str = "id";

/// A rendered Cypher statement with its bound parameters
#[derive(Debug, Clone, PartialEq)]
pub struct CypherQuery {
    text: String,
    params: BTreeMap<String, ParamValue>,
}

impl CypherQuery {
    /// Create a statement with no parameters
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            params: BTreeMap::new(),
        }
    }

    /// Bind a parameter
    pub fn param(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn params(&self) -> &BTreeMap<String, ParamValue> {
        &self.params
    }

    /// Get a bound parameter by name
    pub fn get_param(&self, key: &str) -> Option<&ParamValue> {
        self.params.get(key)
    }
}

/// Check that `ident` is safe to splice into a statement as a label or key
pub fn validate_identifier(kind: &str, ident: &str) -> Result<()> {
    let mut chars = ident.chars();
    let valid = match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    };
    if !valid {
        bail!("Invalid {} '{}': expected [A-Za-z_][A-Za-z0-9_]*", kind, ident);
    }
    Ok(())
}

fn validate_keys(properties: &PropertySet) -> Result<()> {
    let mut seen = Vec::with_capacity(properties.len());
    for (key, _) in properties {
        validate_identifier("property key", key)?;
        if key == ID_PARAM {
            bail!("Property key 'id' is reserved for the node id");
        }
        if seen.contains(&key) {
            bail!("Duplicate property key '{}'", key);
        }
        seen.push(key);
    }
    Ok(())
}

/// `CREATE (n:<Label> { k: $k, ... }) RETURN n`
///
/// With an empty property set the map literal is omitted.
pub fn create_node(label: &str, properties: &PropertySet) -> Result<CypherQuery> {
    validate_identifier("label", label)?;
    validate_keys(properties)?;

    let text = if properties.is_empty() {
        format!("CREATE (n:{}) RETURN n", label)
    } else {
        let fields = properties
            .iter()
            .map(|(k, _)| format!("{0}: ${0}", k))
            .collect::<Vec<_>>()
            .join(", ");
        format!("CREATE (n:{} {{ {} }}) RETURN n", label, fields)
    };

    Ok(properties
        .iter()
        .fold(CypherQuery::new(text), |q, (k, v)| q.param(k.as_str(), v.as_str())))
}

/// `MATCH (n:<Label>) RETURN n ORDER BY id(n)`
pub fn match_all(label: &str) -> Result<CypherQuery> {
    validate_identifier("label", label)?;
    Ok(CypherQuery::new(format!(
        "MATCH (n:{}) RETURN n ORDER BY id(n)",
        label
    )))
}

/// `MATCH (n:<Label>) WHERE id(n) = $id RETURN n`
pub fn match_by_id(label: &str, id: i64) -> Result<CypherQuery> {
    validate_identifier("label", label)?;
    Ok(
        CypherQuery::new(format!("MATCH (n:{}) WHERE id(n) = $id RETURN n", label))
            .param(ID_PARAM, id),
    )
}

/// Merge properties into an existing node; keys not listed are left untouched.
///
/// An empty property set degrades to a plain match so the caller still gets
/// the current node back.
pub fn set_properties(label: &str, id: i64, properties: &PropertySet) -> Result<CypherQuery> {
    validate_identifier("label", label)?;
    validate_keys(properties)?;

    if properties.is_empty() {
        return match_by_id(label, id);
    }

    let assignments = properties
        .iter()
        .map(|(k, _)| format!("n.{0} = ${0}", k))
        .collect::<Vec<_>>()
        .join(", ");
    let text = format!(
        "MATCH (n:{}) WHERE id(n) = $id SET {} RETURN n",
        label, assignments
    );

    Ok(properties.iter().fold(
        CypherQuery::new(text).param(ID_PARAM, id),
        |q, (k, v)| q.param(k.as_str(), v.as_str()),
    ))
}

/// `MATCH (n:<Label>) WHERE id(n) = $id DETACH DELETE n RETURN count(n) AS deleted`
pub fn delete_by_id(label: &str, id: i64) -> Result<CypherQuery> {
    validate_identifier("label", label)?;
    Ok(CypherQuery::new(format!(
        "MATCH (n:{}) WHERE id(n) = $id DETACH DELETE n RETURN count(n) AS deleted",
        label
    ))
    .param(ID_PARAM, id))
}
