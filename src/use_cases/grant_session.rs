use std::sync::Arc;

use crate::domain::address::validate_eth_address;
use crate::domain::entities::{ActionSettings, GrantSessionRequest, ResolvedPlayer, SessionKeyRecord};
use crate::domain::errors::ActionError;
use crate::domain::ports::{Clock, WalletApi};

// Registers a session key for the player, valid from now until the
// configured TTL elapses.
pub struct GrantSessionUseCase {
    pub wallet: Arc<dyn WalletApi>,
    pub clock: Arc<dyn Clock>,
}

impl GrantSessionUseCase {
    pub async fn execute(
        &self,
        player: &ResolvedPlayer,
        session_address: &str,
        settings: &ActionSettings,
    ) -> Result<SessionKeyRecord, ActionError> {
        let session_address = validate_eth_address(session_address)?;

        let valid_after = self.clock.now_epoch_seconds();
        let valid_until = valid_after + settings.session_ttl_seconds;

        Ok(self
            .wallet
            .grant_session_key(GrantSessionRequest {
                player_id: player.player_id.clone(),
                chain_id: settings.chain_id,
                policy_id: settings.policy_id.clone(),
                session_address,
                valid_after,
                valid_until,
            })
            .await?)
    }
}
