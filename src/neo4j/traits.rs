//! GraphStore trait definition
//!
//! Defines the abstract interface for graph operations used by the
//! repositories. `Neo4jClient` implements it against a live database and
//! `MockGraphStore` implements it in memory for tests.

use crate::neo4j::cypher::CypherQuery;
use crate::neo4j::models::{NodeRecord, PropertySet};
use anyhow::Result;
use async_trait::async_trait;

/// Abstract interface for graph database operations.
///
/// The node operations are generic over the label, so a single store serves
/// every resource type.
#[async_trait]
pub trait GraphStore: Send + Sync {
    // ========================================================================
    // Generic node operations
    // ========================================================================

    /// List every node carrying `label`, ordered by id
    async fn list_nodes(&self, label: &str) -> Result<Vec<NodeRecord>>;

    /// Get a node by id, `None` if no `label` node has that id
    async fn get_node(&self, label: &str, id: i64) -> Result<Option<NodeRecord>>;

    /// Create a node with the given properties (possibly none)
    async fn create_node(&self, label: &str, properties: &PropertySet) -> Result<NodeRecord>;

    /// Merge properties into a node, `None` if it does not exist
    async fn update_node(
        &self,
        label: &str,
        id: i64,
        properties: &PropertySet,
    ) -> Result<Option<NodeRecord>>;

    /// Delete a node and its relationships, `false` if it did not exist
    async fn delete_node(&self, label: &str, id: i64) -> Result<bool>;

    // ========================================================================
    // Raw statements
    // ========================================================================

    /// Run a hand-built write statement, returning the nodes bound to `n`
    async fn write(&self, query: &CypherQuery) -> Result<Vec<NodeRecord>>;

    // ========================================================================
    // Health
    // ========================================================================

    /// Check that the database answers a trivial statement
    async fn health_check(&self) -> Result<bool>;
}
