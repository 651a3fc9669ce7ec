use std::sync::Arc;

use axum::Json;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::{StatusCode, header};

use crate::domain::entities::VerifiedIdentity;
use crate::domain::errors::AuthError;
use crate::interface_adapters::handlers::map_auth_error;
use crate::interface_adapters::protocol::ErrorResponse;
use crate::interface_adapters::state::AppState;

// Verified caller identity taken from the Authorization header. Listing
// this extractor before the body extractor rejects bad credentials before
// any payload is read.
#[derive(Debug, Clone)]
pub struct Identity(pub VerifiedIdentity);

impl FromRequestParts<Arc<AppState>> for Identity {
    type Rejection = (StatusCode, Json<ErrorResponse>);

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts).ok_or_else(|| map_auth_error(&AuthError::MissingToken))?;

        let identity = state.verifier.verify(token).await.map_err(|err| {
            tracing::warn!(error = ?err, "credential verification failed");
            map_auth_error(&err)
        })?;

        Ok(Identity(identity))
    }
}

fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
