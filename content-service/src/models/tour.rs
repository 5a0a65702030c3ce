//! Tour model - guided tour requests submitted for review.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::ReviewStatus;

/// Tour request subject to the review workflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tour {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub beach_id: Option<Uuid>,
    /// Price in cents; absent means "on request".
    pub price_cents: Option<i64>,
    pub status: ReviewStatus,
    pub status_details: Option<String>,
    pub created_utc: DateTime<Utc>,
    pub updated_utc: DateTime<Utc>,
}

impl Tour {
    pub fn new(owner_id: Uuid, input: CreateTourRequest) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            owner_id,
            title: input.title,
            description: input.description,
            beach_id: input.beach_id,
            price_cents: input.price_cents,
            status: ReviewStatus::Pending,
            status_details: None,
            created_utc: now,
            updated_utc: now,
        }
    }
}

/// Request to submit a new tour.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTourRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub description: Option<String>,
    pub beach_id: Option<Uuid>,
    pub price_cents: Option<i64>,
}

/// Content edit for an existing tour.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateTourRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub beach_id: Option<Uuid>,
    pub price_cents: Option<i64>,
}
