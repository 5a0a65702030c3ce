//! Content review state machine.
//!
//! Encodes the status transitions for submittable content (businesses,
//! agencies, tours). Authorization is NOT re-derived here: handlers gate with
//! the permission engine first and only then apply a transition, which keeps
//! this module testable without the permission table.

use crate::models::ReviewStatus;

/// Note attached when an owner edit sends approved/rejected content back to
/// the review queue.
pub const RESUBMITTED_DETAILS: &str = "Awaiting re-approval after owner edits";

/// An action against a submittable entity, after authorization has passed.
#[derive(Debug, Clone)]
pub enum ReviewAction {
    /// Staff approval, with an optional observational note.
    Approve { note: Option<String> },
    /// Staff rejection. The reason is mandatory and must be non-blank.
    Reject { reason: String },
    /// Content edit by the owning non-staff user.
    OwnerEdit,
    /// Content edit by staff; trusted, leaves the review state alone.
    StaffEdit,
}

/// Errors related to review transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewError {
    /// Rejection submitted without a usable reason.
    EmptyReason,
}

impl std::fmt::Display for ReviewError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReviewError::EmptyReason => {
                write!(f, "A rejection reason is required and must not be blank")
            }
        }
    }
}

impl std::error::Error for ReviewError {}

/// Apply `action` to an entity currently at (`status`, `details`).
///
/// Returns the new (status, status_details) pair. On error nothing may be
/// mutated by the caller; the entity stays exactly as it was.
pub fn apply(
    status: ReviewStatus,
    details: Option<&str>,
    action: ReviewAction,
) -> Result<(ReviewStatus, Option<String>), ReviewError> {
    match action {
        ReviewAction::Approve { note } => Ok((ReviewStatus::Approved, note)),
        ReviewAction::Reject { reason } => {
            if reason.trim().is_empty() {
                return Err(ReviewError::EmptyReason);
            }
            Ok((ReviewStatus::Rejected, Some(reason)))
        }
        ReviewAction::OwnerEdit => Ok((
            ReviewStatus::Pending,
            Some(RESUBMITTED_DETAILS.to_string()),
        )),
        ReviewAction::StaffEdit => Ok((status, details.map(str::to_string))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approve_from_any_status() {
        for status in [
            ReviewStatus::Pending,
            ReviewStatus::Approved,
            ReviewStatus::Rejected,
        ] {
            let (next, details) = apply(
                status,
                None,
                ReviewAction::Approve {
                    note: Some("Aprovado pela administração".to_string()),
                },
            )
            .unwrap();
            assert_eq!(next, ReviewStatus::Approved);
            assert_eq!(details.as_deref(), Some("Aprovado pela administração"));
        }
    }

    #[test]
    fn approve_note_is_optional() {
        let (next, details) =
            apply(ReviewStatus::Pending, None, ReviewAction::Approve { note: None }).unwrap();
        assert_eq!(next, ReviewStatus::Approved);
        assert!(details.is_none());
    }

    #[test]
    fn reject_requires_reason() {
        let result = apply(
            ReviewStatus::Pending,
            None,
            ReviewAction::Reject {
                reason: String::new(),
            },
        );
        assert_eq!(result, Err(ReviewError::EmptyReason));
    }

    #[test]
    fn whitespace_only_reason_is_rejected() {
        let result = apply(
            ReviewStatus::Approved,
            Some("ok"),
            ReviewAction::Reject {
                reason: "   \t".to_string(),
            },
        );
        assert_eq!(result, Err(ReviewError::EmptyReason));
    }

    #[test]
    fn reject_records_reason() {
        let (next, details) = apply(
            ReviewStatus::Approved,
            Some("looks fine"),
            ReviewAction::Reject {
                reason: "Cadastur inválido".to_string(),
            },
        )
        .unwrap();
        assert_eq!(next, ReviewStatus::Rejected);
        assert_eq!(details.as_deref(), Some("Cadastur inválido"));
    }

    #[test]
    fn owner_edit_resets_to_pending() {
        for status in [
            ReviewStatus::Pending,
            ReviewStatus::Approved,
            ReviewStatus::Rejected,
        ] {
            let (next, details) = apply(status, Some("old note"), ReviewAction::OwnerEdit).unwrap();
            assert_eq!(next, ReviewStatus::Pending);
            assert_eq!(details.as_deref(), Some(RESUBMITTED_DETAILS));
        }
    }

    #[test]
    fn staff_edit_preserves_state() {
        let (next, details) = apply(
            ReviewStatus::Approved,
            Some("Aprovado pela administração"),
            ReviewAction::StaffEdit,
        )
        .unwrap();
        assert_eq!(next, ReviewStatus::Approved);
        assert_eq!(details.as_deref(), Some("Aprovado pela administração"));

        let (next, details) = apply(ReviewStatus::Rejected, None, ReviewAction::StaffEdit).unwrap();
        assert_eq!(next, ReviewStatus::Rejected);
        assert!(details.is_none());
    }
}
