use std::sync::Arc;

use crate::domain::address::validate_eth_address;
use crate::domain::entities::{ActionSettings, ResolvedPlayer, RevokeSessionRequest, SessionKeyRecord};
use crate::domain::errors::ActionError;
use crate::domain::ports::WalletApi;

// Revokes a previously granted session key for the player.
pub struct RevokeSessionUseCase {
    pub wallet: Arc<dyn WalletApi>,
}

impl RevokeSessionUseCase {
    pub async fn execute(
        &self,
        player: &ResolvedPlayer,
        session_address: &str,
        settings: &ActionSettings,
    ) -> Result<SessionKeyRecord, ActionError> {
        let session_address = validate_eth_address(session_address)?;

        Ok(self
            .wallet
            .revoke_session_key(RevokeSessionRequest {
                player_id: player.player_id.clone(),
                chain_id: settings.chain_id,
                policy_id: settings.policy_id.clone(),
                session_address,
            })
            .await?)
    }
}
