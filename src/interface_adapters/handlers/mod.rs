pub mod accounts;
pub mod assets;
pub mod ownership;
pub mod sessions;

use axum::Json;
use axum::http::StatusCode;

use crate::domain::errors::{ActionError, AuthError, UpstreamError};
use crate::interface_adapters::protocol::{ErrorResponse, HealthResponse};
use crate::interface_adapters::state::AppState;
use crate::use_cases::resolve_player::ResolvePlayerUseCase;

// Liveness probe for deploy tooling.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

// Helper to build a JSON error response.
pub(crate) fn error_response(status: StatusCode, message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
            upstream_status: None,
        }),
    )
}

// Credential failures are the caller's problem except when the key set
// itself could not be fetched.
pub(crate) fn map_auth_error(err: &AuthError) -> (StatusCode, Json<ErrorResponse>) {
    match err {
        AuthError::MissingToken => error_response(
            StatusCode::UNAUTHORIZED,
            "authorization bearer token is required",
        ),
        AuthError::MalformedToken => {
            error_response(StatusCode::UNAUTHORIZED, "malformed bearer token")
        }
        AuthError::UnknownKeyId => error_response(
            StatusCode::UNAUTHORIZED,
            "token is signed with an unknown key",
        ),
        AuthError::AlgorithmRejected => error_response(
            StatusCode::UNAUTHORIZED,
            "token signing algorithm is not accepted",
        ),
        AuthError::TokenExpired => error_response(StatusCode::UNAUTHORIZED, "token has expired"),
        AuthError::TokenRejected => {
            error_response(StatusCode::UNAUTHORIZED, "token verification failed")
        }
        AuthError::KeySetUnavailable => error_response(
            StatusCode::BAD_GATEWAY,
            "identity provider key set is unavailable",
        ),
    }
}

// Action failures either reject the input or relay the upstream failure.
// address_field names the request field for the invalid-address message.
pub(crate) fn map_action_error(
    err: ActionError,
    address_field: &str,
) -> (StatusCode, Json<ErrorResponse>) {
    match err {
        ActionError::InvalidAddress => error_response(
            StatusCode::BAD_REQUEST,
            &format!("{address_field} must be a 0x-prefixed 20-byte hex address"),
        ),
        ActionError::MissingSignatures => error_response(
            StatusCode::BAD_REQUEST,
            "guardian_signatures must contain at least one signature",
        ),
        ActionError::Upstream(err) => map_upstream_error(err),
    }
}

pub(crate) fn map_upstream_error(err: UpstreamError) -> (StatusCode, Json<ErrorResponse>) {
    tracing::error!(error = %err, "wallet api call failed");
    match err {
        UpstreamError::Status { status, message } => (
            StatusCode::BAD_GATEWAY,
            Json(ErrorResponse {
                error: message.unwrap_or_else(|| "wallet api request failed".to_string()),
                upstream_status: Some(status),
            }),
        ),
        UpstreamError::Transport(_) => {
            error_response(StatusCode::BAD_GATEWAY, "wallet api is unreachable")
        }
        UpstreamError::Decode(_) => error_response(
            StatusCode::BAD_GATEWAY,
            "wallet api returned an unexpected payload",
        ),
    }
}

// Every privileged route resolves the caller's player first; build the
// use case from shared state here so the handlers stay uniform.
pub(crate) fn resolver(state: &AppState) -> ResolvePlayerUseCase {
    ResolvePlayerUseCase {
        wallet: state.wallet.clone(),
        locks: state.locks.clone(),
        chain_id: state.actions.chain_id,
    }
}
