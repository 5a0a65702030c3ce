//! Authorization introspection handlers.
//!
//! The BFF calls these to decide which dashboard sections to render and to
//! gate navigation before a page loads. Decisions come straight from the
//! permission engine; nothing here touches the store.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;
use crate::middleware::Actor;
use crate::models::{Permission, Role};
use crate::services::permissions;
use crate::startup::AppState;

/// How a multi-permission check aggregates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CheckMode {
    #[default]
    All,
    Any,
}

/// Permission check request.
#[derive(Debug, Deserialize)]
pub struct CheckRequest {
    pub permissions: Vec<Permission>,
    #[serde(default)]
    pub mode: CheckMode,
}

/// Single permission decision.
#[derive(Debug, Serialize)]
pub struct PermissionDecision {
    pub permission: Permission,
    pub allowed: bool,
}

/// Permission check response.
#[derive(Debug, Serialize)]
pub struct CheckResponse {
    pub user_id: Uuid,
    pub role: Role,
    pub allowed: bool,
    pub decisions: Vec<PermissionDecision>,
}

/// Route access check request.
#[derive(Debug, Deserialize)]
pub struct RouteCheckRequest {
    pub path: String,
}

/// Route access check response.
#[derive(Debug, Serialize)]
pub struct RouteCheckResponse {
    pub role: Role,
    pub path: String,
    pub allowed: bool,
}

/// Evaluate a set of permission keys for the current actor.
///
/// POST /authz/check
pub async fn check(
    State(_state): State<AppState>,
    actor: Actor,
    Json(req): Json<CheckRequest>,
) -> Result<Json<CheckResponse>, AppError> {
    let decisions: Vec<PermissionDecision> = req
        .permissions
        .iter()
        .map(|p| PermissionDecision {
            permission: *p,
            allowed: permissions::has_permission(actor.role, *p),
        })
        .collect();

    let allowed = match req.mode {
        CheckMode::All => permissions::has_all_permissions(actor.role, &req.permissions),
        CheckMode::Any => permissions::has_any_permission(actor.role, &req.permissions),
    };

    Ok(Json(CheckResponse {
        user_id: actor.user_id,
        role: actor.role,
        allowed,
        decisions,
    }))
}

/// Evaluate dashboard route access for the current actor.
///
/// POST /authz/route
pub async fn check_route(
    State(_state): State<AppState>,
    actor: Actor,
    Json(req): Json<RouteCheckRequest>,
) -> Result<Json<RouteCheckResponse>, AppError> {
    let allowed = permissions::can_access_route(actor.role, &req.path);
    Ok(Json(RouteCheckResponse {
        role: actor.role,
        path: req.path,
        allowed,
    }))
}
