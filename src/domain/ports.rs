use async_trait::async_trait;

use crate::domain::entities::{
    AccountRecord, CompleteRecoveryRequest, CreateAccountRequest, CreatePlayerRequest,
    GrantSessionRequest, PlayerRecord, RevokeSessionRequest, SessionKeyRecord,
    StartRecoveryRequest, TransactionIntentRecord, TransactionIntentRequest,
    TransferOwnershipRequest, VerifiedIdentity,
};
use crate::domain::errors::{AuthError, UpstreamError};

// Port for credential verification at the HTTP boundary.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> Result<VerifiedIdentity, AuthError>;
}

// Port for the hosted wallet-infrastructure API. Handlers and use cases
// depend on this trait, never on the concrete reqwest client.
#[async_trait]
pub trait WalletApi: Send + Sync {
    async fn find_player(&self, name: &str) -> Result<Option<PlayerRecord>, UpstreamError>;

    async fn create_player(
        &self,
        request: CreatePlayerRequest,
    ) -> Result<PlayerRecord, UpstreamError>;

    async fn create_account(
        &self,
        request: CreateAccountRequest,
    ) -> Result<AccountRecord, UpstreamError>;

    async fn create_transaction_intent(
        &self,
        request: TransactionIntentRequest,
    ) -> Result<TransactionIntentRecord, UpstreamError>;

    async fn grant_session_key(
        &self,
        request: GrantSessionRequest,
    ) -> Result<SessionKeyRecord, UpstreamError>;

    async fn revoke_session_key(
        &self,
        request: RevokeSessionRequest,
    ) -> Result<SessionKeyRecord, UpstreamError>;

    async fn transfer_ownership(
        &self,
        request: TransferOwnershipRequest,
    ) -> Result<TransactionIntentRecord, UpstreamError>;

    async fn start_recovery(
        &self,
        request: StartRecoveryRequest,
    ) -> Result<AccountRecord, UpstreamError>;

    async fn complete_recovery(
        &self,
        request: CompleteRecoveryRequest,
    ) -> Result<AccountRecord, UpstreamError>;
}

// Port for retrieving the current time.
pub trait Clock: Send + Sync {
    fn now_epoch_seconds(&self) -> u64;
}
