//! In-memory mock implementation of GraphStore for testing.
//!
//! Nodes live in a `tokio::sync::RwLock<BTreeMap<i64, NodeRecord>>` and every
//! trait call is appended to a call log so tests can assert on exactly what
//! reached the store. Conditionally compiled with `#[cfg(test)]`.

use crate::neo4j::cypher::{self, CypherQuery};
use crate::neo4j::models::*;
use crate::neo4j::traits::GraphStore;
use anyhow::{bail, Result};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

/// A recorded call against the mock store
#[derive(Debug, Clone, PartialEq)]
pub enum StoreCall {
    ListNodes {
        label: String,
    },
    GetNode {
        label: String,
        id: i64,
    },
    CreateNode {
        label: String,
        properties: PropertySet,
    },
    UpdateNode {
        label: String,
        id: i64,
        properties: PropertySet,
    },
    DeleteNode {
        label: String,
        id: i64,
    },
    Write(CypherQuery),
}

/// In-memory mock implementation of GraphStore for testing.
pub struct MockGraphStore {
    pub nodes: RwLock<BTreeMap<i64, NodeRecord>>,
    pub calls: RwLock<Vec<StoreCall>>,
    next_id: AtomicI64,
    /// When set, every operation fails with this message (after being logged)
    failure: Option<String>,
    healthy: bool,
}

impl Default for MockGraphStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract `Label` from a statement starting with `CREATE (n:Label`
fn created_label(text: &str) -> Option<&str> {
    let rest = text.strip_prefix("CREATE (n:")?;
    let end = rest.find([' ', ')', '{']).unwrap_or(rest.len());
    Some(&rest[..end])
}

impl MockGraphStore {
    /// Create a new empty MockGraphStore.
    pub fn new() -> Self {
        Self {
            nodes: RwLock::new(BTreeMap::new()),
            calls: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(0),
            failure: None,
            healthy: true,
        }
    }

    /// Make every operation fail with `message`
    pub fn failing(mut self, message: &str) -> Self {
        self.failure = Some(message.to_string());
        self.healthy = false;
        self
    }

    /// Seed a node into the store.
    pub async fn with_node(self, label: &str, properties: &[(&str, &str)]) -> Self {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.nodes.write().await.insert(
            id,
            NodeRecord {
                id,
                labels: vec![label.to_string()],
                properties: properties
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            },
        );
        self
    }

    /// Snapshot of the call log
    pub async fn calls(&self) -> Vec<StoreCall> {
        self.calls.read().await.clone()
    }

    /// Raw statements passed to `write`
    pub async fn writes(&self) -> Vec<CypherQuery> {
        self.calls
            .read()
            .await
            .iter()
            .filter_map(|c| match c {
                StoreCall::Write(q) => Some(q.clone()),
                _ => None,
            })
            .collect()
    }

    async fn record(&self, call: StoreCall) -> Result<()> {
        self.calls.write().await.push(call);
        if let Some(message) = &self.failure {
            bail!("{}", message);
        }
        Ok(())
    }

    async fn insert_node(&self, label: &str, properties: BTreeMap<String, String>) -> NodeRecord {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let node = NodeRecord {
            id,
            labels: vec![label.to_string()],
            properties,
        };
        self.nodes.write().await.insert(id, node.clone());
        node
    }
}

#[async_trait]
impl GraphStore for MockGraphStore {
    async fn list_nodes(&self, label: &str) -> Result<Vec<NodeRecord>> {
        self.record(StoreCall::ListNodes {
            label: label.to_string(),
        })
        .await?;
        cypher::match_all(label)?;

        Ok(self
            .nodes
            .read()
            .await
            .values()
            .filter(|n| n.has_label(label))
            .cloned()
            .collect())
    }

    async fn get_node(&self, label: &str, id: i64) -> Result<Option<NodeRecord>> {
        self.record(StoreCall::GetNode {
            label: label.to_string(),
            id,
        })
        .await?;
        cypher::match_by_id(label, id)?;

        Ok(self
            .nodes
            .read()
            .await
            .get(&id)
            .filter(|n| n.has_label(label))
            .cloned())
    }

    async fn create_node(&self, label: &str, properties: &PropertySet) -> Result<NodeRecord> {
        self.record(StoreCall::CreateNode {
            label: label.to_string(),
            properties: properties.clone(),
        })
        .await?;
        cypher::create_node(label, properties)?;

        Ok(self
            .insert_node(label, properties.iter().cloned().collect())
            .await)
    }

    async fn update_node(
        &self,
        label: &str,
        id: i64,
        properties: &PropertySet,
    ) -> Result<Option<NodeRecord>> {
        self.record(StoreCall::UpdateNode {
            label: label.to_string(),
            id,
            properties: properties.clone(),
        })
        .await?;
        cypher::set_properties(label, id, properties)?;

        let mut nodes = self.nodes.write().await;
        Ok(nodes.get_mut(&id).filter(|n| n.has_label(label)).map(|n| {
            for (k, v) in properties {
                n.properties.insert(k.clone(), v.clone());
            }
            n.clone()
        }))
    }

    async fn delete_node(&self, label: &str, id: i64) -> Result<bool> {
        self.record(StoreCall::DeleteNode {
            label: label.to_string(),
            id,
        })
        .await?;
        cypher::delete_by_id(label, id)?;

        let mut nodes = self.nodes.write().await;
        if nodes.get(&id).is_some_and(|n| n.has_label(label)) {
            nodes.remove(&id);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn write(&self, query: &CypherQuery) -> Result<Vec<NodeRecord>> {
        self.record(StoreCall::Write(query.clone())).await?;

        // Only CREATE statements are materialized; anything else is just logged.
        let Some(label) = created_label(query.text()) else {
            return Ok(Vec::new());
        };
        let properties = query
            .params()
            .iter()
            .filter_map(|(k, v)| v.as_text().map(|s| (k.clone(), s.to_string())))
            .collect();

        Ok(vec![self.insert_node(label, properties).await])
    }

    async fn health_check(&self) -> Result<bool> {
        Ok(self.healthy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_created_label() {
        assert_eq!(
            created_label("CREATE (n:Collection { name: $name }) RETURN n"),
            Some("Collection")
        );
        assert_eq!(created_label("CREATE (n:Collection) RETURN n"), Some("Collection"));
        assert_eq!(created_label("MATCH (n:Collection) RETURN n"), None);
    }

    #[tokio::test]
    async fn test_mock_crud_roundtrip() {
        let store = MockGraphStore::new();
        let initial: PropertySet = vec![("name".into(), "A".into())];
        let created = store
            .create_node("Collection", &initial)
            .await
            .unwrap();

        let fetched = store.get_node("Collection", created.id).await.unwrap();
        assert_eq!(fetched, Some(created.clone()));
        assert!(store.get_node("Other", created.id).await.unwrap().is_none());

        let patch: PropertySet = vec![("name".into(), "B".into())];
        let updated = store
            .update_node("Collection", created.id, &patch)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.property("name"), Some("B"));

        assert!(store.delete_node("Collection", created.id).await.unwrap());
        assert!(!store.delete_node("Collection", created.id).await.unwrap());
        assert!(store.list_nodes("Collection").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failing_store_logs_then_errors() {
        let store = MockGraphStore::new().failing("connection refused");
        let err = store.list_nodes("Collection").await.unwrap_err();
        assert_eq!(err.to_string(), "connection refused");
        assert_eq!(store.calls().await.len(), 1);
        assert!(!store.health_check().await.unwrap());
    }
}
