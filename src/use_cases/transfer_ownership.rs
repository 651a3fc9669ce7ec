use std::sync::Arc;

use crate::domain::address::validate_eth_address;
use crate::domain::entities::{
    ActionSettings, ResolvedPlayer, TransactionIntentRecord, TransferOwnershipRequest,
};
use crate::domain::errors::ActionError;
use crate::domain::ports::WalletApi;

// Hands the player's account over to an externally held key. The upstream
// service answers with the transaction intent executing the transfer.
pub struct TransferOwnershipUseCase {
    pub wallet: Arc<dyn WalletApi>,
}

impl TransferOwnershipUseCase {
    pub async fn execute(
        &self,
        player: &ResolvedPlayer,
        new_owner_address: &str,
        settings: &ActionSettings,
    ) -> Result<TransactionIntentRecord, ActionError> {
        let new_owner_address = validate_eth_address(new_owner_address)?;

        Ok(self
            .wallet
            .transfer_ownership(TransferOwnershipRequest {
                account_id: player.account_id.clone(),
                policy_id: settings.policy_id.clone(),
                new_owner_address,
            })
            .await?)
    }
}
