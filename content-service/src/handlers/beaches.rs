//! Beach reference-content handlers. Staff-managed, no review workflow.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::error::AppError;
use crate::middleware::Actor;
use crate::models::{Beach, CreateBeachRequest, UpdateBeachRequest};
use crate::services::permissions;
use crate::startup::AppState;

use crate::models::Permission::*;

pub async fn list_beaches(
    State(state): State<AppState>,
    actor: Actor,
) -> Result<impl IntoResponse, AppError> {
    if !permissions::has_permission(actor.role, ViewAllBeaches) {
        return Err(AppError::Forbidden(anyhow::anyhow!(
            "Role {} may not view beaches",
            actor.role
        )));
    }
    let beaches = state.store.list_beaches().await?;
    Ok(Json(beaches))
}

pub async fn create_beach(
    State(state): State<AppState>,
    actor: Actor,
    Json(payload): Json<CreateBeachRequest>,
) -> Result<impl IntoResponse, AppError> {
    if !permissions::has_permission(actor.role, CreateBeaches) {
        return Err(AppError::Forbidden(anyhow::anyhow!(
            "Role {} may not create beaches",
            actor.role
        )));
    }
    payload.validate()?;

    let beach = state.store.insert_beach(Beach::new(payload)).await?;
    Ok((StatusCode::CREATED, Json(beach)))
}

pub async fn update_beach(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateBeachRequest>,
) -> Result<impl IntoResponse, AppError> {
    if !permissions::has_permission(actor.role, EditBeaches) {
        return Err(AppError::Forbidden(anyhow::anyhow!(
            "Role {} may not edit beaches",
            actor.role
        )));
    }
    payload.validate()?;

    let mut beach = state
        .store
        .find_beach(id)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Beach {} not found", id)))?;

    if let Some(name) = payload.name {
        beach.name = name;
    }
    if let Some(description) = payload.description {
        beach.description = Some(description);
    }
    if let Some(location) = payload.location {
        beach.location = Some(location);
    }
    beach.updated_utc = Utc::now();

    let beach = state.store.put_beach(beach).await?;
    Ok(Json(beach))
}

pub async fn delete_beach(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    if !permissions::has_permission(actor.role, DeleteBeaches) {
        return Err(AppError::Forbidden(anyhow::anyhow!(
            "Role {} may not delete beaches",
            actor.role
        )));
    }

    let deleted = state.store.delete_beach(id).await?;
    if !deleted {
        return Err(AppError::NotFound(anyhow::anyhow!("Beach {} not found", id)));
    }

    Ok(Json(json!({ "deleted": true })))
}
