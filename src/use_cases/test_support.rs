// Shared fakes for use-case and route tests.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::entities::{
    AccountRecord, CompleteRecoveryRequest, CreateAccountRequest, CreatePlayerRequest,
    GrantSessionRequest, PlayerRecord, RevokeSessionRequest, SessionKeyRecord,
    StartRecoveryRequest, TransactionIntentRecord, TransactionIntentRequest,
    TransferOwnershipRequest, VerifiedIdentity,
};
use crate::domain::errors::{AuthError, UpstreamError};
use crate::domain::ports::{Clock, TokenVerifier, WalletApi};

// Fixed time source for deterministic session windows.
pub(crate) struct FixedClock(pub(crate) u64);

impl Clock for FixedClock {
    fn now_epoch_seconds(&self) -> u64 {
        self.0
    }
}

// Verifier fake that accepts exactly one bearer token.
pub(crate) struct StaticVerifier {
    token: String,
    identity: VerifiedIdentity,
}

impl StaticVerifier {
    pub(crate) fn accepting(token: &str, subject: &str) -> Self {
        Self {
            token: token.to_string(),
            identity: VerifiedIdentity {
                subject: subject.to_string(),
                email: Some(subject.to_string()),
                display_name: None,
            },
        }
    }
}

#[async_trait]
impl TokenVerifier for StaticVerifier {
    async fn verify(&self, token: &str) -> Result<VerifiedIdentity, AuthError> {
        if token == self.token {
            Ok(self.identity.clone())
        } else {
            Err(AuthError::TokenRejected)
        }
    }
}

// Per-call failure toggles for negative-path tests.
#[derive(Clone, Copy, Default)]
pub(crate) struct UpstreamFailures {
    pub find_player: bool,
    pub create_player: bool,
    pub create_account: bool,
    pub create_transaction_intent: bool,
    pub grant_session_key: bool,
    pub revoke_session_key: bool,
    pub transfer_ownership: bool,
    pub start_recovery: bool,
    pub complete_recovery: bool,
}

#[derive(Default)]
struct WalletTable {
    players: Vec<PlayerRecord>,
    next_id: u64,
    find_calls: usize,
    created_players: usize,
    created_accounts: usize,
    intents: Vec<TransactionIntentRequest>,
    grants: Vec<GrantSessionRequest>,
    revocations: Vec<RevokeSessionRequest>,
    transfers: Vec<TransferOwnershipRequest>,
    recovery_starts: Vec<StartRecoveryRequest>,
    recovery_completions: Vec<CompleteRecoveryRequest>,
}

// In-memory wallet API fake that records every upstream call. Clones share
// the same table, so tests can hand one clone to the code under test and
// keep another for assertions.
#[derive(Clone, Default)]
pub(crate) struct RecordingWallet {
    table: Arc<Mutex<WalletTable>>,
    failures: UpstreamFailures,
    find_delay: Option<Duration>,
}

impl RecordingWallet {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_failures(mut self, failures: UpstreamFailures) -> Self {
        self.failures = failures;
        self
    }

    // Delays find_player after the lookup has been taken, so two unguarded
    // callers both observe the pre-create state.
    pub(crate) fn with_find_delay(mut self, delay: Duration) -> Self {
        self.find_delay = Some(delay);
        self
    }

    pub(crate) fn seed_player(&self, player: PlayerRecord) {
        self.lock_table().players.push(player);
    }

    pub(crate) fn players(&self) -> Vec<PlayerRecord> {
        self.lock_table().players.clone()
    }

    pub(crate) fn player_count(&self) -> usize {
        self.lock_table().players.len()
    }

    pub(crate) fn find_calls(&self) -> usize {
        self.lock_table().find_calls
    }

    pub(crate) fn created_players(&self) -> usize {
        self.lock_table().created_players
    }

    pub(crate) fn created_accounts(&self) -> usize {
        self.lock_table().created_accounts
    }

    pub(crate) fn intents(&self) -> Vec<TransactionIntentRequest> {
        self.lock_table().intents.clone()
    }

    pub(crate) fn grants(&self) -> Vec<GrantSessionRequest> {
        self.lock_table().grants.clone()
    }

    pub(crate) fn revocations(&self) -> Vec<RevokeSessionRequest> {
        self.lock_table().revocations.clone()
    }

    pub(crate) fn transfers(&self) -> Vec<TransferOwnershipRequest> {
        self.lock_table().transfers.clone()
    }

    pub(crate) fn recovery_starts(&self) -> Vec<StartRecoveryRequest> {
        self.lock_table().recovery_starts.clone()
    }

    pub(crate) fn recovery_completions(&self) -> Vec<CompleteRecoveryRequest> {
        self.lock_table().recovery_completions.clone()
    }

    pub(crate) fn upstream_calls(&self) -> usize {
        let table = self.lock_table();
        table.find_calls
            + table.created_players
            + table.created_accounts
            + table.intents.len()
            + table.grants.len()
            + table.revocations.len()
            + table.transfers.len()
            + table.recovery_starts.len()
            + table.recovery_completions.len()
    }

    fn lock_table(&self) -> std::sync::MutexGuard<'_, WalletTable> {
        self.table.lock().expect("wallet table poisoned")
    }
}

fn unavailable() -> UpstreamError {
    UpstreamError::Status {
        status: 503,
        message: Some("service unavailable".to_string()),
    }
}

#[async_trait]
impl WalletApi for RecordingWallet {
    async fn find_player(&self, name: &str) -> Result<Option<PlayerRecord>, UpstreamError> {
        if self.failures.find_player {
            return Err(unavailable());
        }
        // Take the snapshot before sleeping so delayed callers race on it.
        let found = {
            let mut table = self.lock_table();
            table.find_calls += 1;
            table.players.iter().find(|p| p.name == name).cloned()
        };
        if let Some(delay) = self.find_delay {
            tokio::time::sleep(delay).await;
        }
        Ok(found)
    }

    async fn create_player(
        &self,
        request: CreatePlayerRequest,
    ) -> Result<PlayerRecord, UpstreamError> {
        if self.failures.create_player {
            return Err(unavailable());
        }
        let mut table = self.lock_table();
        table.next_id += 1;
        table.created_players += 1;
        let player = PlayerRecord {
            id: format!("p_{}", table.next_id),
            name: request.name,
            accounts: Vec::new(),
        };
        table.players.push(player.clone());
        Ok(player)
    }

    async fn create_account(
        &self,
        request: CreateAccountRequest,
    ) -> Result<AccountRecord, UpstreamError> {
        if self.failures.create_account {
            return Err(unavailable());
        }
        let mut table = self.lock_table();
        table.next_id += 1;
        table.created_accounts += 1;
        let account = AccountRecord {
            id: format!("acc_{}", table.next_id),
            address: format!("0x{:040x}", table.next_id),
            chain_id: request.chain_id,
            owner_address: request.external_owner_address,
        };
        if let Some(player) = table.players.iter_mut().find(|p| p.id == request.player_id) {
            player.accounts.push(account.clone());
        }
        Ok(account)
    }

    async fn create_transaction_intent(
        &self,
        request: TransactionIntentRequest,
    ) -> Result<TransactionIntentRecord, UpstreamError> {
        if self.failures.create_transaction_intent {
            return Err(unavailable());
        }
        let mut table = self.lock_table();
        table.next_id += 1;
        let record = TransactionIntentRecord {
            id: format!("ti_{}", table.next_id),
            chain_id: request.chain_id,
            user_operation_hash: Some(format!("0x{:064x}", table.next_id)),
        };
        table.intents.push(request);
        Ok(record)
    }

    async fn grant_session_key(
        &self,
        request: GrantSessionRequest,
    ) -> Result<SessionKeyRecord, UpstreamError> {
        if self.failures.grant_session_key {
            return Err(unavailable());
        }
        let mut table = self.lock_table();
        table.next_id += 1;
        let record = SessionKeyRecord {
            id: format!("ses_{}", table.next_id),
            address: request.session_address.clone(),
            valid_after: request.valid_after,
            valid_until: request.valid_until,
            revoked: false,
        };
        table.grants.push(request);
        Ok(record)
    }

    async fn revoke_session_key(
        &self,
        request: RevokeSessionRequest,
    ) -> Result<SessionKeyRecord, UpstreamError> {
        if self.failures.revoke_session_key {
            return Err(unavailable());
        }
        let mut table = self.lock_table();
        table.next_id += 1;
        let record = SessionKeyRecord {
            id: format!("ses_{}", table.next_id),
            address: request.session_address.clone(),
            valid_after: 0,
            valid_until: 0,
            revoked: true,
        };
        table.revocations.push(request);
        Ok(record)
    }

    async fn transfer_ownership(
        &self,
        request: TransferOwnershipRequest,
    ) -> Result<TransactionIntentRecord, UpstreamError> {
        if self.failures.transfer_ownership {
            return Err(unavailable());
        }
        let mut table = self.lock_table();
        table.next_id += 1;
        let record = TransactionIntentRecord {
            id: format!("ti_{}", table.next_id),
            chain_id: 0,
            user_operation_hash: None,
        };
        table.transfers.push(request);
        Ok(record)
    }

    async fn start_recovery(
        &self,
        request: StartRecoveryRequest,
    ) -> Result<AccountRecord, UpstreamError> {
        if self.failures.start_recovery {
            return Err(unavailable());
        }
        let mut table = self.lock_table();
        let account = table
            .players
            .iter()
            .flat_map(|p| p.accounts.iter())
            .find(|a| a.id == request.account_id)
            .cloned()
            .ok_or(UpstreamError::Status {
                status: 404,
                message: Some("account not found".to_string()),
            })?;
        table.recovery_starts.push(request);
        Ok(account)
    }

    async fn complete_recovery(
        &self,
        request: CompleteRecoveryRequest,
    ) -> Result<AccountRecord, UpstreamError> {
        if self.failures.complete_recovery {
            return Err(unavailable());
        }
        let mut table = self.lock_table();
        let account = table
            .players
            .iter_mut()
            .flat_map(|p| p.accounts.iter_mut())
            .find(|a| a.id == request.account_id)
            .ok_or(UpstreamError::Status {
                status: 404,
                message: Some("account not found".to_string()),
            })?;
        account.owner_address = Some(request.new_owner_address.clone());
        let updated = account.clone();
        table.recovery_completions.push(request);
        Ok(updated)
    }
}
