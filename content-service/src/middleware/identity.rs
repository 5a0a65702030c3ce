use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::Role;

/// Verified actor identity for the current request.
///
/// The BFF (secure-frontend) authenticates the session and propagates the
/// result via `X-User-Id` / `X-User-Role` headers; this service never
/// authenticates, it only consumes the already-verified identity. The
/// signature middleware at the edge guarantees the headers are trustworthy.
#[derive(Debug, Clone, Copy)]
pub struct Actor {
    pub user_id: Uuid,
    pub role: Role,
}

#[async_trait]
impl<S> FromRequestParts<S> for Actor
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = parts
            .headers
            .get("X-User-Id")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::AuthError(anyhow::anyhow!("Missing X-User-Id header")))?;
        let user_id = Uuid::parse_str(user_id)
            .map_err(|_| AppError::AuthError(anyhow::anyhow!("Invalid X-User-Id header")))?;

        let role = parts
            .headers
            .get("X-User-Role")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::AuthError(anyhow::anyhow!("Missing X-User-Role header")))?;
        let role: Role = role
            .parse()
            .map_err(|e: String| AppError::AuthError(anyhow::anyhow!(e)))?;

        // Add to tracing span for observability
        tracing::Span::current().record("user_id", tracing::field::display(user_id));

        Ok(Actor { user_id, role })
    }
}
