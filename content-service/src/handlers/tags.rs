//! Tag reference-data handlers. Every role may view; only ADMIN mutates.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::error::AppError;
use crate::middleware::Actor;
use crate::models::{CreateTagRequest, Tag, UpdateTagRequest};
use crate::services::permissions;
use crate::startup::AppState;

use crate::models::Permission::*;

pub async fn list_tags(
    State(state): State<AppState>,
    actor: Actor,
) -> Result<impl IntoResponse, AppError> {
    if !permissions::has_permission(actor.role, ViewTags) {
        return Err(AppError::Forbidden(anyhow::anyhow!(
            "Role {} may not view tags",
            actor.role
        )));
    }
    let tags = state.store.list_tags().await?;
    Ok(Json(tags))
}

pub async fn create_tag(
    State(state): State<AppState>,
    actor: Actor,
    Json(payload): Json<CreateTagRequest>,
) -> Result<impl IntoResponse, AppError> {
    if !permissions::has_permission(actor.role, CreateTags) {
        return Err(AppError::Forbidden(anyhow::anyhow!(
            "Role {} may not create tags",
            actor.role
        )));
    }
    payload.validate()?;

    let tag = state.store.insert_tag(Tag::new(payload.name)).await?;
    Ok((StatusCode::CREATED, Json(tag)))
}

pub async fn update_tag(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateTagRequest>,
) -> Result<impl IntoResponse, AppError> {
    if !permissions::has_permission(actor.role, EditTags) {
        return Err(AppError::Forbidden(anyhow::anyhow!(
            "Role {} may not edit tags",
            actor.role
        )));
    }
    payload.validate()?;

    let mut tag = state
        .store
        .find_tag(id)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Tag {} not found", id)))?;

    tag.name = payload.name;

    let tag = state.store.put_tag(tag).await?;
    Ok(Json(tag))
}

pub async fn delete_tag(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    if !permissions::has_permission(actor.role, DeleteTags) {
        return Err(AppError::Forbidden(anyhow::anyhow!(
            "Role {} may not delete tags",
            actor.role
        )));
    }

    let deleted = state.store.delete_tag(id).await?;
    if !deleted {
        return Err(AppError::NotFound(anyhow::anyhow!("Tag {} not found", id)));
    }

    Ok(Json(json!({ "deleted": true })))
}
