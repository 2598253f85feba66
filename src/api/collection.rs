//! Collection API handlers

use super::handlers::AppError;
use super::query::{PaginatedResponse, PaginationParams};
use crate::repository::{Collection, CollectionPatch, CollectionRepository, NewCollection};
use axum::{
    body::Bytes,
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Collection routes, relative to the prefix they are nested under
pub fn init_collection(service: CollectionRepository) -> Router {
    Router::new()
        .route("/", get(list_collections).post(create_collection))
        .route(
            "/{id}",
            get(get_collection)
                .put(update_collection)
                .delete(delete_collection),
        )
        .with_state(service)
}

// ============================================================================
// Body parsing
// ============================================================================

/// JavaScript-style falsiness for a JSON body
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn parse_json(body: &[u8]) -> Result<Value, AppError> {
    serde_json::from_slice(body)
        .map_err(|e| AppError::BadRequest(format!("Invalid JSON body: {}", e)))
}

fn from_value<T: DeserializeOwned>(value: Value) -> Result<T, AppError> {
    serde_json::from_value(value).map_err(|e| AppError::BadRequest(e.to_string()))
}

/// An absent or falsy body means "create an empty collection"
fn parse_insert_payload(body: &[u8]) -> Result<Option<NewCollection>, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    let value = parse_json(body)?;
    if is_falsy(&value) {
        return Ok(None);
    }

    let payload: NewCollection = from_value(value)?;
    payload.validate()?;
    Ok(Some(payload))
}

fn parse_patch_payload(body: &[u8]) -> Result<CollectionPatch, AppError> {
    let patch: CollectionPatch = from_value(parse_json(body)?)?;
    patch.validate()?;
    Ok(patch)
}

// ============================================================================
// Handlers
// ============================================================================

/// List collections
pub async fn list_collections(
    State(service): State<CollectionRepository>,
    query: Result<Query<PaginationParams>, QueryRejection>,
) -> Result<Json<PaginatedResponse<Collection>>, AppError> {
    let Query(query) = query?;
    query.validate().map_err(AppError::BadRequest)?;

    let collections = service.get_collections().await?;
    Ok(Json(query.paginate(collections)))
}

/// Get a collection by id
pub async fn get_collection(
    State(service): State<CollectionRepository>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Collection>, AppError> {
    let Path(id) = id?;
    let collection = service
        .get_collection_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Collection {} not found", id)))?;

    Ok(Json(collection))
}

/// Create a collection
pub async fn create_collection(
    State(service): State<CollectionRepository>,
    body: Bytes,
) -> Result<(StatusCode, Json<Collection>), AppError> {
    let payload = parse_insert_payload(&body)?;
    let collection = service.insert_collection(payload).await?;

    Ok((StatusCode::CREATED, Json(collection)))
}

/// Update a collection
pub async fn update_collection(
    State(service): State<CollectionRepository>,
    id: Result<Path<i64>, PathRejection>,
    body: Bytes,
) -> Result<Json<Collection>, AppError> {
    let Path(id) = id?;
    let patch = parse_patch_payload(&body)?;
    let collection = service
        .update_collection(id, patch)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Collection {} not found", id)))?;

    Ok(Json(collection))
}

/// Delete a collection
pub async fn delete_collection(
    State(service): State<CollectionRepository>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = id?;
    if service.delete_collection(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Collection {} not found", id)))
    }
}
