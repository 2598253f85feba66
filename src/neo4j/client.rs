//! Neo4j client for the collection graph

use super::cypher::{self, CypherQuery};
use super::models::*;
use anyhow::{Context, Result};
use neo4rs::{query, Graph, Query};
use std::sync::Arc;

/// Column every node-returning statement binds its node to
const NODE_COLUMN: &str = "n";

/// Client for Neo4j operations
pub struct Neo4jClient {
    graph: Arc<Graph>,
}

/// Convert a backend-neutral statement into a neo4rs query
fn to_neo4rs(q: &CypherQuery) -> Query {
    q.params()
        .iter()
        .fold(query(q.text()), |acc, (key, value)| match value {
            ParamValue::Text(s) => acc.param(key, s.clone()),
            ParamValue::Int(i) => acc.param(key, *i),
        })
}

/// Helper to convert a Neo4j node to a NodeRecord.
///
/// Only string properties are carried over; the collection graph stores
/// nothing else.
fn node_to_record(node: &neo4rs::Node) -> NodeRecord {
    let properties = node
        .keys()
        .into_iter()
        .filter_map(|key| {
            node.get::<String>(&key)
                .ok()
                .map(|value| (key.to_string(), value))
        })
        .collect();

    NodeRecord {
        id: node.id(),
        labels: node.labels().into_iter().map(String::from).collect(),
        properties,
    }
}

impl Neo4jClient {
    /// Create a new Neo4j client
    pub async fn new(uri: &str, user: &str, password: &str) -> Result<Self> {
        let graph = Graph::new(uri, user, password)
            .await
            .context("Failed to connect to Neo4j")?;

        let client = Self {
            graph: Arc::new(graph),
        };

        // Initialize schema
        client.init_schema().await?;

        Ok(client)
    }

    /// Initialize indexes used by the collection endpoints
    async fn init_schema(&self) -> Result<()> {
        let indexes = vec![
            "CREATE INDEX collection_name IF NOT EXISTS FOR (c:Collection) ON (c.name)",
        ];

        for statement in indexes {
            if let Err(e) = self.graph.run(query(statement)).await {
                tracing::warn!("Failed to create index: {}", e);
            }
        }

        Ok(())
    }

    /// Execute a statement and collect the nodes bound to `n`
    async fn fetch_nodes(&self, q: &CypherQuery) -> Result<Vec<NodeRecord>> {
        tracing::debug!(cypher = q.text(), "executing statement");

        let mut result = self.graph.execute(to_neo4rs(q)).await?;
        let mut nodes = Vec::new();

        while let Some(row) = result.next().await? {
            let node: neo4rs::Node = row.get(NODE_COLUMN)?;
            nodes.push(node_to_record(&node));
        }

        Ok(nodes)
    }

    // ========================================================================
    // Generic node operations
    // ========================================================================

    /// List all nodes with a label
    pub async fn list_nodes(&self, label: &str) -> Result<Vec<NodeRecord>> {
        self.fetch_nodes(&cypher::match_all(label)?).await
    }

    /// Get a node by id
    pub async fn get_node(&self, label: &str, id: i64) -> Result<Option<NodeRecord>> {
        let nodes = self.fetch_nodes(&cypher::match_by_id(label, id)?).await?;
        Ok(nodes.into_iter().next())
    }

    /// Create a node
    pub async fn create_node(&self, label: &str, properties: &PropertySet) -> Result<NodeRecord> {
        let q = cypher::create_node(label, properties)?;
        self.write(&q)
            .await?
            .into_iter()
            .next()
            .with_context(|| format!("CREATE returned no {} node", label))
    }

    /// Merge properties into a node
    pub async fn update_node(
        &self,
        label: &str,
        id: i64,
        properties: &PropertySet,
    ) -> Result<Option<NodeRecord>> {
        let q = cypher::set_properties(label, id, properties)?;
        Ok(self.write(&q).await?.into_iter().next())
    }

    /// Delete a node
    pub async fn delete_node(&self, label: &str, id: i64) -> Result<bool> {
        let q = cypher::delete_by_id(label, id)?;
        tracing::debug!(cypher = q.text(), "executing statement");

        let mut result = self.graph.execute(to_neo4rs(&q)).await?;
        let deleted: i64 = match result.next().await? {
            Some(row) => row.get("deleted")?,
            None => 0,
        };

        Ok(deleted > 0)
    }

    // ========================================================================
    // Raw statements
    // ========================================================================

    /// Run a write statement in its own auto-commit transaction
    pub async fn write(&self, q: &CypherQuery) -> Result<Vec<NodeRecord>> {
        self.fetch_nodes(q).await
    }

    /// Check connectivity
    pub async fn health_check(&self) -> Result<bool> {
        match self.graph.run(query("RETURN 1 AS ping")).await {
            Ok(_) => Ok(true),
            Err(e) => {
                tracing::debug!("Neo4j health check failed: {}", e);
                Ok(false)
            }
        }
    }
}
