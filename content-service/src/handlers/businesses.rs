//! Business submission, listing, editing and review handlers.

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
use crate::models::{
    Business, BusinessCategory, CreateBusinessRequest, ReviewRequest, Role,
    UpdateBusinessRequest,
};
use crate::services::{permissions, review, ReviewAction};
use crate::startup::AppState;

use crate::models::Permission::*;

/// A BUSINESS_* owner may only submit the category matching their role.
fn check_category(role: Role, category: BusinessCategory) -> Result<(), AppError> {
    let valid = match role {
        Role::BusinessFood => category == BusinessCategory::Food,
        Role::BusinessAccommodation => category == BusinessCategory::Accommodation,
        _ => true,
    };
    if valid {
        Ok(())
    } else {
        Err(AppError::BadRequest(anyhow::anyhow!(
            "Invalid category {} for role {}",
            category.as_str(),
            role
        )))
    }
}

pub async fn create_business(
    State(state): State<AppState>,
    actor: Actor,
    Json(payload): Json<CreateBusinessRequest>,
) -> Result<impl IntoResponse, AppError> {
    if !permissions::has_permission(actor.role, CreateBusiness) {
        return Err(AppError::Forbidden(anyhow::anyhow!(
            "Role {} may not create businesses",
            actor.role
        )));
    }
    payload.validate()?;
    check_category(actor.role, payload.category)?;

    let business = Business::new(actor.user_id, payload);
    let business = state.store.insert_business(business).await?;

    tracing::info!(business_id = %business.id, owner_id = %business.owner_id, "Business submitted");

    Ok((StatusCode::CREATED, Json(business)))
}

pub async fn list_businesses(
    State(state): State<AppState>,
    actor: Actor,
    Query(params): Query<ListQuery>,
) -> Result<impl IntoResponse, AppError> {
    if permissions::has_permission(actor.role, ViewAllBusinesses) {
        let businesses = state.store.list_businesses(params.status).await?;
        return Ok(Json(businesses));
    }
    if permissions::has_permission(actor.role, ManageOwnBusiness) {
        let own = state.store.find_business_by_owner(actor.user_id).await?;
        return Ok(Json(own.into_iter().collect::<Vec<_>>()));
    }
    Err(AppError::Forbidden(anyhow::anyhow!(
        "Role {} may not list businesses",
        actor.role
    )))
}

pub async fn get_business(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let business = state
        .store
        .find_business(id)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Business {} not found", id)))?;

    if business.owner_id != actor.user_id
        && !permissions::has_permission(actor.role, ViewAllBusinesses)
    {
        return Err(AppError::Forbidden(anyhow::anyhow!(
            "Not the owner of this business"
        )));
    }

    Ok(Json(business))
}

pub async fn update_business(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateBusinessRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let mut business = state
        .store
        .find_business(id)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Business {} not found", id)))?;

    // Owner edits go back to the review queue; staff edits are trusted and
    // leave the review state alone.
    let action = if business.owner_id == actor.user_id
        && permissions::has_permission(actor.role, ManageOwnBusiness)
    {
        ReviewAction::OwnerEdit
    } else if permissions::has_permission(actor.role, EditAnyBusiness) {
        ReviewAction::StaffEdit
    } else {
        return Err(AppError::Forbidden(anyhow::anyhow!(
            "Not allowed to edit this business"
        )));
    };

    let (status, details) = review::apply(business.status, business.status_details.as_deref(), action)
        .map_err(|e| AppError::BadRequest(anyhow::anyhow!(e)))?;

    if let Some(name) = payload.name {
        business.name = name;
    }
    if let Some(description) = payload.description {
        business.description = Some(description);
    }
    if let Some(address) = payload.address {
        business.address = Some(address);
    }
    if let Some(cadastur) = payload.cadastur {
        business.cadastur = Some(cadastur);
    }
    if let Some(tag_ids) = payload.tag_ids {
        business.tag_ids = tag_ids;
    }
    business.status = status;
    business.status_details = details;
    business.updated_utc = Utc::now();

    let business = state.store.put_business(business).await?;

    Ok(Json(business))
}

pub async fn review_business(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<Uuid>,
    Json(payload): Json<ReviewRequest>,
) -> Result<impl IntoResponse, AppError> {
    if !permissions::has_permission(actor.role, ApproveBusinesses) {
        return Err(AppError::Forbidden(anyhow::anyhow!(
            "Role {} may not review businesses",
            actor.role
        )));
    }

    let mut business = state
        .store
        .find_business(id)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Business {} not found", id)))?;

    let action = review_action(payload);
    let (status, details) = review::apply(business.status, business.status_details.as_deref(), action)
        .map_err(|e| AppError::BadRequest(anyhow::anyhow!(e)))?;

    business.status = status;
    business.status_details = details;
    business.updated_utc = Utc::now();

    let business = state.store.put_business(business).await?;

    tracing::info!(business_id = %business.id, status = %business.status, "Business reviewed");

    Ok(Json(business))
}

pub async fn delete_business(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    if !permissions::has_permission(actor.role, DeleteBusinesses) {
        return Err(AppError::Forbidden(anyhow::anyhow!(
            "Role {} may not delete businesses",
            actor.role
        )));
    }

    let deleted = state.store.delete_business(id).await?;
    if !deleted {
        return Err(AppError::NotFound(anyhow::anyhow!(
            "Business {} not found",
            id
        )));
    }

    Ok(Json(json!({ "deleted": true })))
}
