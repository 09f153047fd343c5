use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};
use tracing::{debug, instrument};

use super::{ApiError, AppState, MenuJson};
use crate::domain::{MenuItem, MenuItemId};

pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// `POST /api/entities`
#[instrument(skip(state, item))]
pub async fn create_menu_item(
    State(state): State<AppState>,
    MenuJson(item): MenuJson<MenuItem>,
) -> Result<(StatusCode, Json<MenuItem>), ApiError> {
    let created = state.menu_client.create_menu_item(item).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `GET /api/entities`
#[instrument(skip(state))]
pub async fn list_menu_items(
    State(state): State<AppState>,
) -> Result<Json<Vec<MenuItem>>, ApiError> {
    Ok(Json(state.menu_client.list_menu_items().await?))
}

/// `GET /api/entities/{id}`
#[instrument(skip(state))]
pub async fn get_menu_item(
    State(state): State<AppState>,
    Path(id): Path<MenuItemId>,
) -> Result<Json<MenuItem>, ApiError> {
    match state.menu_client.get_menu_item(id).await? {
        Some(item) => Ok(Json(item)),
        None => {
            debug!("Menu item not found");
            Err(ApiError::not_found())
        }
    }
}

/// `PUT /api/entities/{id}`
///
/// Unknown ids answer 404; a negative price on an existing item answers 400.
#[instrument(skip(state, item))]
pub async fn update_menu_item(
    State(state): State<AppState>,
    Path(id): Path<MenuItemId>,
    MenuJson(item): MenuJson<MenuItem>,
) -> Result<Json<MenuItem>, ApiError> {
    Ok(Json(state.menu_client.update_menu_item(id, item).await?))
}

/// `DELETE /api/entities/{id}`
#[instrument(skip(state))]
pub async fn delete_menu_item(
    State(state): State<AppState>,
    Path(id): Path<MenuItemId>,
) -> Result<StatusCode, ApiError> {
    state.menu_client.delete_menu_item(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
