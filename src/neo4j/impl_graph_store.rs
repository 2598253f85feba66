//! `GraphStore` implementation for `Neo4jClient`.
//!
//! Every method simply delegates to the corresponding inherent method on `Neo4jClient`.

use async_trait::async_trait;

use super::client::Neo4jClient;
use super::cypher::CypherQuery;
use super::models::*;
use super::traits::GraphStore;

#[async_trait]
impl GraphStore for Neo4jClient {
    async fn list_nodes(&self, label: &str) -> anyhow::Result<Vec<NodeRecord>> {
        self.list_nodes(label).await
    }

    async fn get_node(&self, label: &str, id: i64) -> anyhow::Result<Option<NodeRecord>> {
        self.get_node(label, id).await
    }

    async fn create_node(
        &self,
        label: &str,
        properties: &PropertySet,
    ) -> anyhow::Result<NodeRecord> {
        self.create_node(label, properties).await
    }

    async fn update_node(
        &self,
        label: &str,
        id: i64,
        properties: &PropertySet,
    ) -> anyhow::Result<Option<NodeRecord>> {
        self.update_node(label, id, properties).await
    }

    async fn delete_node(&self, label: &str, id: i64) -> anyhow::Result<bool> {
        self.delete_node(label, id).await
    }

    async fn write(&self, query: &CypherQuery) -> anyhow::Result<Vec<NodeRecord>> {
        self.write(query).await
    }

    async fn health_check(&self) -> anyhow::Result<bool> {
        self.health_check().await
    }
}
