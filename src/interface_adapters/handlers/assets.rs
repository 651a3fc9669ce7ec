use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::entities::TransactionIntentRecord;
use crate::interface_adapters::extract::Identity;
use crate::interface_adapters::handlers::{map_action_error, resolver};
use crate::interface_adapters::protocol::{DataEnvelope, ErrorResponse};
use crate::interface_adapters::state::AppState;
use crate::use_cases::mint_asset::MintAssetUseCase;

// Mints the configured asset into the caller's account and relays the
// transaction intent the upstream service created for it.
#[tracing::instrument(name = "mint_asset", skip_all, fields(subject = %identity.subject))]
pub async fn mint_asset(
    State(state): State<Arc<AppState>>,
    Identity(identity): Identity,
) -> Result<Json<DataEnvelope<TransactionIntentRecord>>, (StatusCode, Json<ErrorResponse>)> {
    let resolved = resolver(&state)
        .execute(&identity.subject, identity.label(), None)
        .await
        .map_err(|err| map_action_error(err, "owner_address"))?;

    let use_case = MintAssetUseCase {
        wallet: state.wallet.clone(),
    };
    let intent = use_case
        .execute(&resolved, &state.actions)
        .await
        .map_err(|err| map_action_error(err, "owner_address"))?;

    tracing::info!(player = %resolved.player_id, intent = %intent.id, "mint intent created");

    Ok(Json(DataEnvelope { data: intent }))
}
