use std::sync::Arc;

use crate::domain::address::validate_eth_address;
use crate::domain::entities::{
    AccountRecord, CompleteRecoveryRequest, ResolvedPlayer, StartRecoveryRequest,
};
use crate::domain::errors::ActionError;
use crate::domain::ports::WalletApi;

// Begins the recovery window that will rotate the account to a new owner.
pub struct StartRecoveryUseCase {
    pub wallet: Arc<dyn WalletApi>,
}

impl StartRecoveryUseCase {
    pub async fn execute(
        &self,
        player: &ResolvedPlayer,
        new_owner_address: &str,
    ) -> Result<AccountRecord, ActionError> {
        let new_owner_address = validate_eth_address(new_owner_address)?;

        Ok(self
            .wallet
            .start_recovery(StartRecoveryRequest {
                account_id: player.account_id.clone(),
                new_owner_address,
            })
            .await?)
    }
}

// Finishes recovery once enough guardians have signed off.
pub struct CompleteRecoveryUseCase {
    pub wallet: Arc<dyn WalletApi>,
}

impl CompleteRecoveryUseCase {
    pub async fn execute(
        &self,
        player: &ResolvedPlayer,
        new_owner_address: &str,
        guardian_signatures: Vec<String>,
    ) -> Result<AccountRecord, ActionError> {
        let new_owner_address = validate_eth_address(new_owner_address)?;
        if guardian_signatures.is_empty() {
            return Err(ActionError::MissingSignatures);
        }

        Ok(self
            .wallet
            .complete_recovery(CompleteRecoveryRequest {
                account_id: player.account_id.clone(),
                new_owner_address,
                guardian_signatures,
            })
            .await?)
    }
}
