use serde::{Deserialize, Serialize};

// Success envelope wrapping the relayed upstream payload.
#[derive(Debug, Serialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

// Error envelope. upstream_status is set when the upstream call failed,
// so callers can tell a gateway rejection from a relayed one.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upstream_status: Option<u16>,
}

// Request payload for account resolution.
#[derive(Debug, Deserialize)]
pub struct CreateAccountBody {
    #[serde(default)]
    pub owner_address: Option<String>,
}

// Request payload for granting or revoking a session key.
#[derive(Debug, Deserialize)]
pub struct SessionKeyBody {
    pub session_address: String,
}

// Request payload for ownership transfer and recovery start.
#[derive(Debug, Deserialize)]
pub struct NewOwnerBody {
    pub new_owner_address: String,
}

// Request payload for completing account recovery.
#[derive(Debug, Deserialize)]
pub struct CompleteRecoveryBody {
    pub new_owner_address: String,
    pub guardian_signatures: Vec<String>,
}

// Response payload for account resolution.
#[derive(Debug, Serialize)]
pub struct ResolvedPlayerResponse {
    pub player_id: String,
    pub account_id: String,
    pub account_address: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
