//! Tour submission, listing, editing and review handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::error::AppError;
use crate::handlers::{review_action, ListQuery};
use crate::middleware::Actor;
use crate::models::{CreateTourRequest, ReviewRequest, Tour, UpdateTourRequest};
use crate::services::{permissions, review, ReviewAction};
use crate::startup::AppState;

use crate::models::Permission::*;

pub async fn create_tour(
    State(state): State<AppState>,
    actor: Actor,
    Json(payload): Json<CreateTourRequest>,
) -> Result<impl IntoResponse, AppError> {
    if !permissions::has_permission(actor.role, CreateTours) {
        return Err(AppError::Forbidden(anyhow::anyhow!(
            "Role {} may not create tours",
            actor.role
        )));
    }
    payload.validate()?;

    let tour = Tour::new(actor.user_id, payload);
    let tour = state.store.insert_tour(tour).await?;

    tracing::info!(tour_id = %tour.id, owner_id = %tour.owner_id, "Tour submitted");

    Ok((StatusCode::CREATED, Json(tour)))
}

pub async fn list_tours(
    State(state): State<AppState>,
    actor: Actor,
    Query(params): Query<ListQuery>,
) -> Result<impl IntoResponse, AppError> {
    if permissions::has_permission(actor.role, ViewAllTours) {
        let tours = state.store.list_tours(params.status).await?;
        return Ok(Json(tours));
    }
    if permissions::has_permission(actor.role, ManageOwnTours) {
        let own = state.store.list_tours_by_owner(actor.user_id).await?;
        return Ok(Json(own));
    }
    Err(AppError::Forbidden(anyhow::anyhow!(
        "Role {} may not list tours",
        actor.role
    )))
}

pub async fn get_tour(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let tour = state
        .store
        .find_tour(id)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Tour {} not found", id)))?;

    if tour.owner_id != actor.user_id && !permissions::has_permission(actor.role, ViewAllTours) {
        return Err(AppError::Forbidden(anyhow::anyhow!(
            "Not the owner of this tour"
        )));
    }

    Ok(Json(tour))
}

pub async fn update_tour(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateTourRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let mut tour = state
        .store
        .find_tour(id)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Tour {} not found", id)))?;

    // Tours carry no editAny* key; the staff review permission covers
    // trusted staff edits.
    let action = if tour.owner_id == actor.user_id
        && permissions::has_permission(actor.role, ManageOwnTours)
    {
        ReviewAction::OwnerEdit
    } else if permissions::has_permission(actor.role, ApproveTours) {
        ReviewAction::StaffEdit
    } else {
        return Err(AppError::Forbidden(anyhow::anyhow!(
            "Not allowed to edit this tour"
        )));
    };

    let (status, details) = review::apply(tour.status, tour.status_details.as_deref(), action)
        .map_err(|e| AppError::BadRequest(anyhow::anyhow!(e)))?;

    if let Some(title) = payload.title {
        tour.title = title;
    }
    if let Some(description) = payload.description {
        tour.description = Some(description);
    }
    if let Some(beach_id) = payload.beach_id {
        tour.beach_id = Some(beach_id);
    }
    if let Some(price_cents) = payload.price_cents {
        tour.price_cents = Some(price_cents);
    }
    tour.status = status;
    tour.status_details = details;
    tour.updated_utc = Utc::now();

    let tour = state.store.put_tour(tour).await?;

    Ok(Json(tour))
}

pub async fn review_tour(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<Uuid>,
    Json(payload): Json<ReviewRequest>,
) -> Result<impl IntoResponse, AppError> {
    if !permissions::has_permission(actor.role, ApproveTours) {
        return Err(AppError::Forbidden(anyhow::anyhow!(
            "Role {} may not review tours",
            actor.role
        )));
    }

    let mut tour = state
        .store
        .find_tour(id)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Tour {} not found", id)))?;

    let action = review_action(payload);
    let (status, details) = review::apply(tour.status, tour.status_details.as_deref(), action)
        .map_err(|e| AppError::BadRequest(anyhow::anyhow!(e)))?;

    tour.status = status;
    tour.status_details = details;
    tour.updated_utc = Utc::now();

    let tour = state.store.put_tour(tour).await?;

    tracing::info!(tour_id = %tour.id, status = %tour.status, "Tour reviewed");

    Ok(Json(tour))
}

pub async fn delete_tour(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    if !permissions::has_permission(actor.role, DeleteTours) {
        return Err(AppError::Forbidden(anyhow::anyhow!(
            "Role {} may not delete tours",
            actor.role
        )));
    }

    let deleted = state.store.delete_tour(id).await?;
    if !deleted {
        return Err(AppError::NotFound(anyhow::anyhow!("Tour {} not found", id)));
    }

    Ok(Json(json!({ "deleted": true })))
}
