//! Test helper factories and mock state builders
#![allow(dead_code)]

use crate::neo4j::mock::MockGraphStore;
use crate::{AppState, Config};
use std::sync::Arc;

/// Config pointing at unreachable mock endpoints
pub fn mock_config() -> Config {
    Config {
        neo4j_uri: "bolt://mock:7687".to_string(),
        neo4j_user: "neo4j".to_string(),
        neo4j_password: "mock".to_string(),
        server_host: "127.0.0.1".to_string(),
        server_port: 0,
    }
}

/// Create a mock AppState with an empty in-memory graph
pub fn mock_app_state() -> AppState {
    mock_app_state_with(MockGraphStore::new())
}

/// Create a mock AppState with a pre-seeded graph
pub fn mock_app_state_with(graph: MockGraphStore) -> AppState {
    AppState {
        neo4j: Arc::new(graph),
        config: Arc::new(mock_config()),
    }
}
