//! Data access for graph-backed resources
//!
//! [`Repository`] carries the CRUD behaviour shared by every resource type.
//! Resource repositories such as [`CollectionRepository`] wrap one and add
//! only what is specific to them.

pub mod collection;
pub mod models;

pub use collection::CollectionRepository;
pub use models::*;

use crate::neo4j::{GraphStore, NodeRecord, PropertySet};
use anyhow::Result;
use std::marker::PhantomData;
use std::sync::Arc;

/// A resource stored as graph nodes under a single label
pub trait NodeEntity: Sized + Send + Sync {
    /// Node label, also used as the resource's storage name
    const LABEL: &'static str;

    /// Build the entity from a node read back from the store
    fn from_record(record: NodeRecord) -> Result<Self>;
}

/// Generic repository over one node label.
///
/// Holds the shared store handle; no entity state is cached.
pub struct Repository<T> {
    store: Arc<dyn GraphStore>,
    _entity: PhantomData<fn() -> T>,
}

impl<T> Clone for Repository<T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            _entity: PhantomData,
        }
    }
}

impl<T: NodeEntity> Repository<T> {
    pub fn new(store: Arc<dyn GraphStore>) -> Self {
        Self {
            store,
            _entity: PhantomData,
        }
    }

    /// Label of the nodes this repository manages
    pub fn label(&self) -> &'static str {
        T::LABEL
    }

    /// The underlying store, for resource-specific statements
    pub fn store(&self) -> &Arc<dyn GraphStore> {
        &self.store
    }

    pub fn decode(&self, record: NodeRecord) -> Result<T> {
        T::from_record(record)
    }

    /// All nodes of this resource, ordered by id
    pub async fn get_all(&self) -> Result<Vec<T>> {
        self.store
            .list_nodes(self.label())
            .await?
            .into_iter()
            .map(T::from_record)
            .collect()
    }

    /// A single node, `None` when the id is unknown
    pub async fn get_by_id(&self, id: i64) -> Result<Option<T>> {
        self.store
            .get_node(self.label(), id)
            .await?
            .map(T::from_record)
            .transpose()
    }

    /// Create a node with no properties
    pub async fn create(&self) -> Result<T> {
        self.create_with(&PropertySet::new()).await
    }

    /// Create a node with the given properties
    pub async fn create_with(&self, properties: &PropertySet) -> Result<T> {
        let record = self.store.create_node(self.label(), properties).await?;
        tracing::debug!(label = self.label(), id = record.id, "created node");
        T::from_record(record)
    }

    /// Merge properties into a node, `None` when the id is unknown
    pub async fn update_by_id(&self, id: i64, properties: &PropertySet) -> Result<Option<T>> {
        self.store
            .update_node(self.label(), id, properties)
            .await?
            .map(T::from_record)
            .transpose()
    }

    /// Delete a node, `false` when the id is unknown
    pub async fn delete_by_id(&self, id: i64) -> Result<bool> {
        let deleted = self.store.delete_node(self.label(), id).await?;
        if deleted {
            tracing::debug!(label = self.label(), id, "deleted node");
        }
        Ok(deleted)
    }
}
