use serde::{Deserialize, Serialize};

// Identity extracted from a verified credential.
#[derive(Debug, Clone)]
pub struct VerifiedIdentity {
    pub subject: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
}

impl VerifiedIdentity {
    // Preferred human-readable label for upstream player records.
    pub fn label(&self) -> Option<&str> {
        self.display_name.as_deref().or(self.email.as_deref())
    }
}

// The records below are parsed from upstream responses at the client
// boundary and re-serialized into response envelopes, so they carry serde
// derives even though they live in the domain layer.

// Player record owned by the upstream wallet service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub accounts: Vec<AccountRecord>,
}

// Chain account attached to a player record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountRecord {
    pub id: String,
    pub address: String,
    pub chain_id: u64,
    #[serde(default)]
    pub owner_address: Option<String>,
}

// Sponsored transaction submitted to the upstream service for execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionIntentRecord {
    pub id: String,
    pub chain_id: u64,
    #[serde(default)]
    pub user_operation_hash: Option<String>,
}

// Scoped signing credential delegated to an address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionKeyRecord {
    pub id: String,
    pub address: String,
    pub valid_after: u64,
    pub valid_until: u64,
    #[serde(default)]
    pub revoked: bool,
}

// Player identity resolved against the upstream service for one request.
#[derive(Debug, Clone)]
pub struct ResolvedPlayer {
    pub player_id: String,
    pub account_id: String,
    pub account_address: String,
}

// Static action configuration resolved once at startup.
#[derive(Debug, Clone)]
pub struct ActionSettings {
    pub chain_id: u64,
    pub policy_id: String,
    pub contract_address: String,
    pub mint_function: String,
    pub session_ttl_seconds: u64,
}

// Inputs for the upstream wallet API, one value per privileged call.

#[derive(Debug, Clone)]
pub struct CreatePlayerRequest {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CreateAccountRequest {
    pub player_id: String,
    pub chain_id: u64,
    pub external_owner_address: Option<String>,
}

#[derive(Debug, Clone)]
pub struct TransactionIntentRequest {
    pub player_id: String,
    pub chain_id: u64,
    pub policy_id: String,
    pub interactions: Vec<Interaction>,
}

// One contract call inside a transaction intent.
#[derive(Debug, Clone)]
pub struct Interaction {
    pub contract: String,
    pub function_name: String,
    pub function_args: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct GrantSessionRequest {
    pub player_id: String,
    pub chain_id: u64,
    pub policy_id: String,
    pub session_address: String,
    pub valid_after: u64,
    pub valid_until: u64,
}

#[derive(Debug, Clone)]
pub struct RevokeSessionRequest {
    pub player_id: String,
    pub chain_id: u64,
    pub policy_id: String,
    pub session_address: String,
}

#[derive(Debug, Clone)]
pub struct TransferOwnershipRequest {
    pub account_id: String,
    pub policy_id: String,
    pub new_owner_address: String,
}

#[derive(Debug, Clone)]
pub struct StartRecoveryRequest {
    pub account_id: String,
    pub new_owner_address: String,
}

#[derive(Debug, Clone)]
pub struct CompleteRecoveryRequest {
    pub account_id: String,
    pub new_owner_address: String,
    pub guardian_signatures: Vec<String>,
}
