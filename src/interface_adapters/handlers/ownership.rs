use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::address::validate_eth_address;
use crate::domain::entities::{AccountRecord, TransactionIntentRecord};
use crate::domain::errors::ActionError;
use crate::interface_adapters::extract::Identity;
use crate::interface_adapters::handlers::{map_action_error, resolver};
use crate::interface_adapters::protocol::{
    CompleteRecoveryBody, DataEnvelope, ErrorResponse, NewOwnerBody,
};
use crate::interface_adapters::state::AppState;
use crate::use_cases::recover_account::{CompleteRecoveryUseCase, StartRecoveryUseCase};
use crate::use_cases::transfer_ownership::TransferOwnershipUseCase;

// Transfers the caller's account to an externally held key and relays
// the transaction intent executing the transfer.
#[tracing::instrument(name = "transfer_ownership", skip_all, fields(subject = %identity.subject))]
pub async fn transfer_ownership(
    State(state): State<Arc<AppState>>,
    Identity(identity): Identity,
    Json(body): Json<NewOwnerBody>,
) -> Result<Json<DataEnvelope<TransactionIntentRecord>>, (StatusCode, Json<ErrorResponse>)> {
    let new_owner_address = validate_eth_address(&body.new_owner_address)
        .map_err(|err| map_action_error(err, "new_owner_address"))?;

    let resolved = resolver(&state)
        .execute(&identity.subject, identity.label(), None)
        .await
        .map_err(|err| map_action_error(err, "new_owner_address"))?;

    let use_case = TransferOwnershipUseCase {
        wallet: state.wallet.clone(),
    };
    let intent = use_case
        .execute(&resolved, &new_owner_address, &state.actions)
        .await
        .map_err(|err| map_action_error(err, "new_owner_address"))?;

    tracing::info!(player = %resolved.player_id, intent = %intent.id, "ownership transfer submitted");

    Ok(Json(DataEnvelope { data: intent }))
}

// Opens the recovery window that will rotate the account's owner.
#[tracing::instrument(name = "start_recovery", skip_all, fields(subject = %identity.subject))]
pub async fn start_recovery(
    State(state): State<Arc<AppState>>,
    Identity(identity): Identity,
    Json(body): Json<NewOwnerBody>,
) -> Result<Json<DataEnvelope<AccountRecord>>, (StatusCode, Json<ErrorResponse>)> {
    let new_owner_address = validate_eth_address(&body.new_owner_address)
        .map_err(|err| map_action_error(err, "new_owner_address"))?;

    let resolved = resolver(&state)
        .execute(&identity.subject, identity.label(), None)
        .await
        .map_err(|err| map_action_error(err, "new_owner_address"))?;

    let use_case = StartRecoveryUseCase {
        wallet: state.wallet.clone(),
    };
    let account = use_case
        .execute(&resolved, &new_owner_address)
        .await
        .map_err(|err| map_action_error(err, "new_owner_address"))?;

    tracing::info!(player = %resolved.player_id, account = %account.id, "recovery started");

    Ok(Json(DataEnvelope { data: account }))
}

// Completes recovery once the guardians have signed off.
#[tracing::instrument(name = "complete_recovery", skip_all, fields(subject = %identity.subject))]
pub async fn complete_recovery(
    State(state): State<Arc<AppState>>,
    Identity(identity): Identity,
    Json(body): Json<CompleteRecoveryBody>,
) -> Result<Json<DataEnvelope<AccountRecord>>, (StatusCode, Json<ErrorResponse>)> {
    let new_owner_address = validate_eth_address(&body.new_owner_address)
        .map_err(|err| map_action_error(err, "new_owner_address"))?;
    if body.guardian_signatures.is_empty() {
        return Err(map_action_error(
            ActionError::MissingSignatures,
            "new_owner_address",
        ));
    }

    let resolved = resolver(&state)
        .execute(&identity.subject, identity.label(), None)
        .await
        .map_err(|err| map_action_error(err, "new_owner_address"))?;

    let use_case = CompleteRecoveryUseCase {
        wallet: state.wallet.clone(),
    };
    let account = use_case
        .execute(&resolved, &new_owner_address, body.guardian_signatures)
        .await
        .map_err(|err| map_action_error(err, "new_owner_address"))?;

    tracing::info!(player = %resolved.player_id, account = %account.id, "recovery completed");

    Ok(Json(DataEnvelope { data: account }))
}
