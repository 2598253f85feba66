//! API route definitions

use super::collection::init_collection;
use super::handlers;
use crate::repository::CollectionRepository;
use crate::AppState;
use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Path prefixes for the API
pub struct ApiPath;

impl ApiPath {
    /// Root every resource is nested under
    pub const ROOT: &'static str = "/api";
    pub const COLLECTIONS: &'static str = "/collections";
}

/// Repositories handed to the route modules at registration time
#[derive(Clone)]
pub struct Services {
    pub collection: CollectionRepository,
}

impl Services {
    /// Build every service on top of the shared graph store
    pub fn from_state(state: &AppState) -> Self {
        Self {
            collection: CollectionRepository::new(state.neo4j.clone()),
        }
    }
}

/// Register every resource route module under its prefix
pub fn init_api(services: Services) -> Router {
    let Services { collection } = services;

    Router::new().nest(ApiPath::COLLECTIONS, init_collection(collection))
}

/// Create the API router
pub fn create_router(state: &AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(handlers::health))
        .with_state(state.neo4j.clone())
        .nest(ApiPath::ROOT, init_api(Services::from_state(state)))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
