//! Agency registration, listing, editing and review handlers.

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
use crate::models::{Agency, CreateAgencyRequest, ReviewRequest, UpdateAgencyRequest};
use crate::services::{permissions, review, ReviewAction};
use crate::startup::AppState;

use crate::models::Permission::*;

pub async fn create_agency(
    State(state): State<AppState>,
    actor: Actor,
    Json(payload): Json<CreateAgencyRequest>,
) -> Result<impl IntoResponse, AppError> {
    if !permissions::has_permission(actor.role, CreateAgency) {
        return Err(AppError::Forbidden(anyhow::anyhow!(
            "Role {} may not register agencies",
            actor.role
        )));
    }
    payload.validate()?;

    let agency = Agency::new(actor.user_id, payload);
    let agency = state.store.insert_agency(agency).await?;

    tracing::info!(agency_id = %agency.id, owner_id = %agency.owner_id, "Agency registered");

    Ok((StatusCode::CREATED, Json(agency)))
}

pub async fn list_agencies(
    State(state): State<AppState>,
    actor: Actor,
    Query(params): Query<ListQuery>,
) -> Result<impl IntoResponse, AppError> {
    if permissions::has_permission(actor.role, ViewAllAgencies) {
        let agencies = state.store.list_agencies(params.status).await?;
        return Ok(Json(agencies));
    }
    if permissions::has_permission(actor.role, ManageOwnAgency) {
        let own = state.store.find_agency_by_owner(actor.user_id).await?;
        return Ok(Json(own.into_iter().collect::<Vec<_>>()));
    }
    Err(AppError::Forbidden(anyhow::anyhow!(
        "Role {} may not list agencies",
        actor.role
    )))
}

pub async fn get_agency(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let agency = state
        .store
        .find_agency(id)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Agency {} not found", id)))?;

    if agency.owner_id != actor.user_id
        && !permissions::has_permission(actor.role, ViewAllAgencies)
    {
        return Err(AppError::Forbidden(anyhow::anyhow!(
            "Not the owner of this agency"
        )));
    }

    Ok(Json(agency))
}

pub async fn update_agency(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateAgencyRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let mut agency = state
        .store
        .find_agency(id)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Agency {} not found", id)))?;

    let action = if agency.owner_id == actor.user_id
        && permissions::has_permission(actor.role, ManageOwnAgency)
    {
        ReviewAction::OwnerEdit
    } else if permissions::has_permission(actor.role, EditAnyAgency) {
        ReviewAction::StaffEdit
    } else {
        return Err(AppError::Forbidden(anyhow::anyhow!(
            "Not allowed to edit this agency"
        )));
    };

    let (status, details) = review::apply(agency.status, agency.status_details.as_deref(), action)
        .map_err(|e| AppError::BadRequest(anyhow::anyhow!(e)))?;

    if let Some(name) = payload.name {
        agency.name = name;
    }
    if let Some(description) = payload.description {
        agency.description = Some(description);
    }
    if let Some(cadastur) = payload.cadastur {
        agency.cadastur = Some(cadastur);
    }
    if let Some(tag_ids) = payload.tag_ids {
        agency.tag_ids = tag_ids;
    }
    agency.status = status;
    agency.status_details = details;
    agency.updated_utc = Utc::now();

    let agency = state.store.put_agency(agency).await?;

    Ok(Json(agency))
}

pub async fn review_agency(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<Uuid>,
    Json(payload): Json<ReviewRequest>,
) -> Result<impl IntoResponse, AppError> {
    if !permissions::has_permission(actor.role, ApproveAgencies) {
        return Err(AppError::Forbidden(anyhow::anyhow!(
            "Role {} may not review agencies",
            actor.role
        )));
    }

    let mut agency = state
        .store
        .find_agency(id)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Agency {} not found", id)))?;

    let action = review_action(payload);
    let (status, details) = review::apply(agency.status, agency.status_details.as_deref(), action)
        .map_err(|e| AppError::BadRequest(anyhow::anyhow!(e)))?;

    agency.status = status;
    agency.status_details = details;
    agency.updated_utc = Utc::now();

    let agency = state.store.put_agency(agency).await?;

    tracing::info!(agency_id = %agency.id, status = %agency.status, "Agency reviewed");

    Ok(Json(agency))
}

pub async fn delete_agency(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    if !permissions::has_permission(actor.role, DeleteAgencies) {
        return Err(AppError::Forbidden(anyhow::anyhow!(
            "Role {} may not delete agencies",
            actor.role
        )));
    }

    let deleted = state.store.delete_agency(id).await?;
    if !deleted {
        return Err(AppError::NotFound(anyhow::anyhow!(
            "Agency {} not found",
            id
        )));
    }

    Ok(Json(json!({ "deleted": true })))
}
