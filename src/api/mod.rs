//! HTTP API for collections

pub mod collection;
pub mod handlers;
pub mod query;
pub mod routes;

pub use query::*;
pub use routes::{create_router, init_api, ApiPath, Services};
