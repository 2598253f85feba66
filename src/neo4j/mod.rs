//! Neo4j client, statement builders and models for the collection graph

pub mod client;
pub mod cypher;
mod impl_graph_store;
pub mod models;
pub mod traits;

pub use client::Neo4jClient;
pub use cypher::CypherQuery;
pub use models::*;
pub use traits::GraphStore;

#[cfg(test)]
pub(crate) mod mock;
