use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::domain::address::validate_eth_address;
use crate::domain::entities::{CreateAccountRequest, CreatePlayerRequest, ResolvedPlayer};
use crate::domain::errors::ActionError;
use crate::domain::ports::WalletApi;

// Registry of per-subject locks. Requests for the same subject take the
// same lock, requests for different subjects proceed in parallel.
#[derive(Clone, Default)]
pub struct SubjectLocks {
    inner: Arc<Mutex<HashMap<String, Arc<Mutex<()>>>>>,
}

impl SubjectLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn acquire(&self, subject: &str) -> OwnedMutexGuard<()> {
        let slot = {
            let mut slots = self.inner.lock().await;
            // A slot referenced only by this map has no holder or waiter
            // left; sweep those so the registry stays bounded by in-flight
            // subjects.
            slots.retain(|_, slot| Arc::strong_count(slot) > 1);
            slots.entry(subject.to_string()).or_default().clone()
        };
        slot.lock_owned().await
    }
}

// Idempotent get-or-create of the caller's player and chain account.
pub struct ResolvePlayerUseCase {
    pub wallet: Arc<dyn WalletApi>,
    pub locks: SubjectLocks,
    pub chain_id: u64,
}

impl ResolvePlayerUseCase {
    pub async fn execute(
        &self,
        subject: &str,
        display_name: Option<&str>,
        owner_address: Option<&str>,
    ) -> Result<ResolvedPlayer, ActionError> {
        let owner_address = owner_address.map(validate_eth_address).transpose()?;

        // Hold the subject lock across lookup-then-create so concurrent
        // first-time requests cannot create duplicate players.
        let _guard = self.locks.acquire(subject).await;

        let player = match self.wallet.find_player(subject).await? {
            Some(player) => player,
            None => {
                let created = self
                    .wallet
                    .create_player(CreatePlayerRequest {
                        name: subject.to_string(),
                        description: display_name.map(str::to_string),
                    })
                    .await?;
                tracing::info!(player = %created.id, "created upstream player");
                created
            }
        };

        // Reuse the chain account when one exists. An earlier request may
        // have failed between player and account creation, so a player
        // without an account gets one here.
        if let Some(account) = player
            .accounts
            .iter()
            .find(|account| account.chain_id == self.chain_id)
        {
            return Ok(ResolvedPlayer {
                player_id: player.id.clone(),
                account_id: account.id.clone(),
                account_address: account.address.clone(),
            });
        }

        let account = self
            .wallet
            .create_account(CreateAccountRequest {
                player_id: player.id.clone(),
                chain_id: self.chain_id,
                external_owner_address: owner_address,
            })
            .await?;
        tracing::info!(player = %player.id, account = %account.id, "created chain account");

        Ok(ResolvedPlayer {
            player_id: player.id,
            account_id: account.id,
            account_address: account.address,
        })
    }
}
