use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::address::validate_eth_address;
use crate::domain::entities::SessionKeyRecord;
use crate::interface_adapters::extract::Identity;
use crate::interface_adapters::handlers::{map_action_error, resolver};
use crate::interface_adapters::protocol::{DataEnvelope, ErrorResponse, SessionKeyBody};
use crate::interface_adapters::state::AppState;
use crate::use_cases::grant_session::GrantSessionUseCase;
use crate::use_cases::revoke_session::RevokeSessionUseCase;

// Grants a session key scoped to the caller's player. The validity
// window starts now and spans the configured TTL.
#[tracing::instrument(name = "grant_session", skip_all, fields(subject = %identity.subject))]
pub async fn grant_session(
    State(state): State<Arc<AppState>>,
    Identity(identity): Identity,
    Json(body): Json<SessionKeyBody>,
) -> Result<Json<DataEnvelope<SessionKeyRecord>>, (StatusCode, Json<ErrorResponse>)> {
    // Validate the address first; resolving makes upstream calls.
    let session_address = validate_eth_address(&body.session_address)
        .map_err(|err| map_action_error(err, "session_address"))?;

    let resolved = resolver(&state)
        .execute(&identity.subject, identity.label(), None)
        .await
        .map_err(|err| map_action_error(err, "session_address"))?;

    let use_case = GrantSessionUseCase {
        wallet: state.wallet.clone(),
        clock: state.clock.clone(),
    };
    let session = use_case
        .execute(&resolved, &session_address, &state.actions)
        .await
        .map_err(|err| map_action_error(err, "session_address"))?;

    tracing::info!(player = %resolved.player_id, session = %session.id, "session key granted");

    Ok(Json(DataEnvelope { data: session }))
}

// Revokes a session key previously granted to the caller's player.
#[tracing::instrument(name = "revoke_session", skip_all, fields(subject = %identity.subject))]
pub async fn revoke_session(
    State(state): State<Arc<AppState>>,
    Identity(identity): Identity,
    Json(body): Json<SessionKeyBody>,
) -> Result<Json<DataEnvelope<SessionKeyRecord>>, (StatusCode, Json<ErrorResponse>)> {
    let session_address = validate_eth_address(&body.session_address)
        .map_err(|err| map_action_error(err, "session_address"))?;

    let resolved = resolver(&state)
        .execute(&identity.subject, identity.label(), None)
        .await
        .map_err(|err| map_action_error(err, "session_address"))?;

    let use_case = RevokeSessionUseCase {
        wallet: state.wallet.clone(),
    };
    let session = use_case
        .execute(&resolved, &session_address, &state.actions)
        .await
        .map_err(|err| map_action_error(err, "session_address"))?;

    tracing::info!(player = %resolved.player_id, session = %session.id, "session key revoked");

    Ok(Json(DataEnvelope { data: session }))
}
