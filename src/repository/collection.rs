//! Collection repository

use super::models::{Collection, CollectionPatch, NewCollection};
use super::Repository;
use crate::neo4j::{cypher, GraphStore, PropertySet};
use anyhow::{Context, Result};
use std::sync::Arc;

/// Data access for `Collection` nodes.
///
/// Everything but the insert is forwarded to the generic [`Repository`].
/// No validation happens here; payloads are checked at the HTTP boundary.
#[derive(Clone)]
pub struct CollectionRepository {
    base: Repository<Collection>,
}

impl CollectionRepository {
    pub fn new(store: Arc<dyn GraphStore>) -> Self {
        Self {
            base: Repository::new(store),
        }
    }

    pub fn label(&self) -> &'static str {
        self.base.label()
    }

    pub async fn get_collections(&self) -> Result<Vec<Collection>> {
        self.base.get_all().await
    }

    pub async fn get_collection_by_id(&self, id: i64) -> Result<Option<Collection>> {
        self.base.get_by_id(id).await
    }

    /// Insert a collection.
    ///
    /// With a payload, issues a single `CREATE` binding `name` and
    /// `description`. Without one, falls back to the generic empty create.
    pub async fn insert_collection(&self, collection: Option<NewCollection>) -> Result<Collection> {
        let Some(NewCollection { name, description }) = collection else {
            return self.base.create().await;
        };

        let properties: PropertySet = vec![
            ("name".to_string(), name),
            ("description".to_string(), description),
        ];
        let query = cypher::create_node(self.label(), &properties)?;

        let node = self
            .base
            .store()
            .write(&query)
            .await?
            .into_iter()
            .next()
            .context("CREATE returned no Collection node")?;

        tracing::debug!(id = node.id, "inserted collection");
        self.base.decode(node)
    }

    pub async fn update_collection(
        &self,
        id: i64,
        collection: CollectionPatch,
    ) -> Result<Option<Collection>> {
        self.base
            .update_by_id(id, &collection.to_properties())
            .await
    }

    pub async fn delete_collection(&self, id: i64) -> Result<bool> {
        self.base.delete_by_id(id).await
    }
}
