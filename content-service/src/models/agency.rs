//! Agency model - tour guide/agency registrations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::ReviewStatus;

/// Guide agency registration subject to the review workflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agency {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    /// Cadastur registry number, if the agency holds one.
    pub cadastur: Option<String>,
    pub tag_ids: Vec<Uuid>,
    pub status: ReviewStatus,
    pub status_details: Option<String>,
    pub created_utc: DateTime<Utc>,
    pub updated_utc: DateTime<Utc>,
}

impl Agency {
    pub fn new(owner_id: Uuid, input: CreateAgencyRequest) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            owner_id,
            name: input.name,
            description: input.description,
            cadastur: input.cadastur,
            tag_ids: input.tag_ids.unwrap_or_default(),
            status: ReviewStatus::Pending,
            status_details: None,
            created_utc: now,
            updated_utc: now,
        }
    }
}

/// Request to register a new agency.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAgencyRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub description: Option<String>,
    pub cadastur: Option<String>,
    pub tag_ids: Option<Vec<Uuid>>,
}

/// Content edit for an existing agency.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateAgencyRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub cadastur: Option<String>,
    pub tag_ids: Option<Vec<Uuid>>,
}
