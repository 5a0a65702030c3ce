//! Business model - food and accommodation listings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::ReviewStatus;

/// Business category. A BUSINESS_* owner may only submit the category
/// matching their role; staff may submit either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BusinessCategory {
    Food,
    Accommodation,
}

impl BusinessCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            BusinessCategory::Food => "FOOD",
            BusinessCategory::Accommodation => "ACCOMMODATION",
        }
    }
}

/// Business listing subject to the review workflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Business {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub category: BusinessCategory,
    pub description: Option<String>,
    pub address: Option<String>,
    /// Cadastur registry number, if the business holds one.
    pub cadastur: Option<String>,
    pub tag_ids: Vec<Uuid>,
    pub status: ReviewStatus,
    pub status_details: Option<String>,
    pub created_utc: DateTime<Utc>,
    pub updated_utc: DateTime<Utc>,
}

impl Business {
    /// Create a new business submission. New submissions always start PENDING.
    pub fn new(owner_id: Uuid, input: CreateBusinessRequest) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            owner_id,
            name: input.name,
            category: input.category,
            description: input.description,
            address: input.address,
            cadastur: input.cadastur,
            tag_ids: input.tag_ids.unwrap_or_default(),
            status: ReviewStatus::Pending,
            status_details: None,
            created_utc: now,
            updated_utc: now,
        }
    }
}

/// Request to submit a new business.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBusinessRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub category: BusinessCategory,
    pub description: Option<String>,
    pub address: Option<String>,
    pub cadastur: Option<String>,
    pub tag_ids: Option<Vec<Uuid>>,
}

/// Content edit for an existing business. Only provided fields change.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateBusinessRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub cadastur: Option<String>,
    pub tag_ids: Option<Vec<Uuid>>,
}
