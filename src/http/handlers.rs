//! `/api/orders` handlers.

use super::{ApiError, ApiResult, SharedStore};
use crate::order::{
    domain::{Order, OrderDraft, OrderId, OrderPatch},
    ports::OrderRepository,
};
use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};
use mockable::Clock;
use serde_json::Value;
use tracing::info;

/// Raw query pairs; repeated keys are kept in order.
type QueryPairs = Vec<(String, String)>;

/// Lists every order in load and creation order.
pub async fn list_orders<R, C>(State(store): State<SharedStore<R, C>>) -> Json<Vec<Order>>
where
    R: OrderRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Json(store.lock().await.orders().to_vec())
}

/// Creates an order from the caller-supplied fields.
///
/// # Errors
///
/// Returns [`ApiError::BadRequest`] for malformed bodies and
/// [`ApiError::Store`] when persisting fails.
pub async fn create_order<R, C>(
    State(store): State<SharedStore<R, C>>,
    body: Result<Json<OrderDraft>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Order>)>
where
    R: OrderRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Json(draft) = body.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let created = store.lock().await.create(draft).await?;
    info!(order_id = %created.id(), "order created over http");
    Ok((StatusCode::CREATED, Json(created)))
}

/// Applies a partial update keyed by the `id` field of the body.
///
/// # Errors
///
/// Returns [`ApiError::BadRequest`] when the id is missing or invalid or a
/// field is unknown, and [`ApiError::Store`] when the order is unknown or
/// persisting fails.
pub async fn update_order<R, C>(
    State(store): State<SharedStore<R, C>>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<Order>>
where
    R: OrderRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Json(value) = body.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let (id, patch) = split_update(value)?;
    let updated = store.lock().await.update(id, patch).await?;
    Ok(Json(updated))
}

/// Deletes the order named by the `id` query parameter.
///
/// When `id` is repeated, the first value is used.
///
/// # Errors
///
/// Returns [`ApiError::BadRequest`] when the query is malformed or the id is
/// missing or invalid, and [`ApiError::Store`] when the order is unknown or
/// persisting fails.
pub async fn delete_order<R, C>(
    State(store): State<SharedStore<R, C>>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> ApiResult<StatusCode>
where
    R: OrderRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Query(pairs) = query.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let id = pairs
        .iter()
        .find(|(key, _)| key == "id")
        .and_then(|(_, value)| parse_id(value))
        .ok_or_else(|| ApiError::BadRequest("missing or invalid id".to_owned()))?;
    store.lock().await.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

fn parse_id(raw: &str) -> Option<OrderId> {
    raw.trim().parse::<i64>().ok().map(OrderId::new)
}

fn id_from_value(value: &Value) -> Option<OrderId> {
    match value {
        Value::Number(number) => number.as_i64().map(OrderId::new),
        Value::String(text) => parse_id(text),
        _ => None,
    }
}

/// Separates the `id` key from the patch fields of a `PUT` body.
fn split_update(value: Value) -> ApiResult<(OrderId, OrderPatch)> {
    let Value::Object(mut fields) = value else {
        return Err(ApiError::BadRequest("expected a JSON object".to_owned()));
    };
    let id = fields
        .remove("id")
        .as_ref()
        .and_then(id_from_value)
        .ok_or_else(|| ApiError::BadRequest("missing or invalid id".to_owned()))?;
    let patch = serde_json::from_value(Value::Object(fields))
        .map_err(|err| ApiError::BadRequest(err.to_string()))?;
    Ok((id, patch))
}
