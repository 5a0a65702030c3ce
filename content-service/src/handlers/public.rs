//! Public read surface. No identity required; only approved content leaks.

use axum::{Json, extract::State, response::IntoResponse};

use crate::error::AppError;
use crate::models::ReviewStatus;
use crate::startup::AppState;

pub async fn public_businesses(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let businesses = state
        .store
        .list_businesses(Some(ReviewStatus::Approved))
        .await?;
    Ok(Json(businesses))
}

pub async fn public_agencies(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let agencies = state
        .store
        .list_agencies(Some(ReviewStatus::Approved))
        .await?;
    Ok(Json(agencies))
}

pub async fn public_beaches(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let beaches = state.store.list_beaches().await?;
    Ok(Json(beaches))
}
