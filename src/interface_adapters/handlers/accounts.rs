use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::interface_adapters::extract::Identity;
use crate::interface_adapters::handlers::{map_action_error, resolver};
use crate::interface_adapters::protocol::{
    CreateAccountBody, DataEnvelope, ErrorResponse, ResolvedPlayerResponse,
};
use crate::interface_adapters::state::AppState;

// Resolves the caller's player and chain account, creating either on
// first contact. Safe to call repeatedly.
#[tracing::instrument(name = "create_account", skip_all, fields(subject = %identity.subject))]
pub async fn create_account(
    State(state): State<Arc<AppState>>,
    Identity(identity): Identity,
    Json(body): Json<CreateAccountBody>,
) -> Result<Json<DataEnvelope<ResolvedPlayerResponse>>, (StatusCode, Json<ErrorResponse>)> {
    let resolved = resolver(&state)
        .execute(
            &identity.subject,
            identity.label(),
            body.owner_address.as_deref(),
        )
        .await
        .map_err(|err| map_action_error(err, "owner_address"))?;

    Ok(Json(DataEnvelope {
        data: ResolvedPlayerResponse {
            player_id: resolved.player_id,
            account_id: resolved.account_id,
            account_address: resolved.account_address,
        },
    }))
}
