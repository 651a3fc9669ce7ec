use std::sync::Arc;

use crate::domain::entities::{
    ActionSettings, Interaction, ResolvedPlayer, TransactionIntentRecord,
    TransactionIntentRequest,
};
use crate::domain::errors::ActionError;
use crate::domain::ports::WalletApi;

// Submits a sponsored mint intent targeting the player's own account.
pub struct MintAssetUseCase {
    pub wallet: Arc<dyn WalletApi>,
}

impl MintAssetUseCase {
    pub async fn execute(
        &self,
        player: &ResolvedPlayer,
        settings: &ActionSettings,
    ) -> Result<TransactionIntentRecord, ActionError> {
        let request = TransactionIntentRequest {
            player_id: player.player_id.clone(),
            chain_id: settings.chain_id,
            policy_id: settings.policy_id.clone(),
            interactions: vec![Interaction {
                contract: settings.contract_address.clone(),
                function_name: settings.mint_function.clone(),
                function_args: vec![player.account_address.clone()],
            }],
        };

        Ok(self.wallet.create_transaction_intent(request).await?)
    }
}
