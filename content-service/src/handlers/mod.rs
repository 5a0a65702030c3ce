pub mod agencies;
pub mod authz;
pub mod beaches;
pub mod businesses;
pub mod health;
pub mod public;
pub mod tags;
pub mod tours;

pub use health::health_check;

use serde::Deserialize;

use crate::models::{ReviewDecision, ReviewRequest, ReviewStatus};
use crate::services::ReviewAction;

/// Shared list-filter query for the submittable collections.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub status: Option<ReviewStatus>,
}

/// Translate a review request body into a state-machine action. Reason
/// presence is validated by the state machine itself, not here.
pub(crate) fn review_action(req: ReviewRequest) -> ReviewAction {
    match req.decision {
        ReviewDecision::Approve => ReviewAction::Approve { note: req.details },
        ReviewDecision::Reject => ReviewAction::Reject {
            reason: req.details.unwrap_or_default(),
        },
    }
}
