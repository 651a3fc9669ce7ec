use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{
    AccountRecord, CompleteRecoveryRequest, CreateAccountRequest, CreatePlayerRequest,
    GrantSessionRequest, PlayerRecord, RevokeSessionRequest, SessionKeyRecord,
    StartRecoveryRequest, TransactionIntentRecord, TransactionIntentRequest,
    TransferOwnershipRequest,
};
use crate::domain::errors::UpstreamError;
use crate::domain::ports::WalletApi;

// Error payload shape the wallet API uses for non-success statuses.
#[derive(Debug, Deserialize)]
struct WalletErrorBody {
    message: String,
}

// Envelope for collection endpoints.
#[derive(Debug, Deserialize)]
struct ListBody<T> {
    data: Vec<T>,
}

// Wire bodies for the outbound calls. Kept private to this client so the
// upstream field names never leak into the domain types.

#[derive(Debug, Serialize)]
struct CreatePlayerBody<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct CreateAccountBody<'a> {
    player: &'a str,
    chain_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    external_owner_address: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct TransactionIntentBody<'a> {
    player: &'a str,
    chain_id: u64,
    policy: &'a str,
    interactions: Vec<InteractionBody<'a>>,
}

#[derive(Debug, Serialize)]
struct InteractionBody<'a> {
    contract: &'a str,
    function_name: &'a str,
    function_args: &'a [String],
}

// Shared by grant and revoke; revoke sends no validity window.
#[derive(Debug, Serialize)]
struct SessionBody<'a> {
    player: &'a str,
    chain_id: u64,
    policy: &'a str,
    address: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    valid_after: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    valid_until: Option<u64>,
}

#[derive(Debug, Serialize)]
struct OwnershipBody<'a> {
    policy: &'a str,
    new_owner_address: &'a str,
}

#[derive(Debug, Serialize)]
struct RecoveryBody<'a> {
    new_owner_address: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    guardian_signatures: Option<&'a [String]>,
}

// Thin reqwest adapter for the hosted wallet-infrastructure API. Every
// call authenticates with the service secret, never with caller tokens.
#[derive(Clone)]
pub struct WalletClient {
    http: reqwest::Client,
    base_url: String,
    secret_key: String,
}

impl WalletClient {
    pub fn new(
        base_url: impl Into<String>,
        secret_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            secret_key: secret_key.into(),
        })
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, UpstreamError>
    where
        B: Serialize + Sync,
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .post(url)
            .bearer_auth(&self.secret_key)
            .json(body)
            .send()
            .await
            .map_err(|err| UpstreamError::Transport(err.to_string()))?;

        decode_response(response).await
    }
}

// Keep the upstream status and message so handlers can relay what
// actually failed instead of a generic error.
async fn decode_response<T>(response: reqwest::Response) -> Result<T, UpstreamError>
where
    T: serde::de::DeserializeOwned,
{
    let status = response.status();
    if !status.is_success() {
        let message = response
            .json::<WalletErrorBody>()
            .await
            .ok()
            .map(|payload| payload.message);
        return Err(UpstreamError::Status {
            status: status.as_u16(),
            message,
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|err| UpstreamError::Decode(err.to_string()))
}

#[async_trait]
impl WalletApi for WalletClient {
    async fn find_player(&self, name: &str) -> Result<Option<PlayerRecord>, UpstreamError> {
        let url = format!("{}/v1/players", self.base_url);
        let response = self
            .http
            .get(url)
            .bearer_auth(&self.secret_key)
            .query(&[("name", name)])
            .send()
            .await
            .map_err(|err| UpstreamError::Transport(err.to_string()))?;

        let listed: ListBody<PlayerRecord> = decode_response(response).await?;
        // The service filters by name; match exactly in case it returns
        // prefix matches.
        Ok(listed.data.into_iter().find(|player| player.name == name))
    }

    async fn create_player(
        &self,
        request: CreatePlayerRequest,
    ) -> Result<PlayerRecord, UpstreamError> {
        self.post_json(
            "/v1/players",
            &CreatePlayerBody {
                name: &request.name,
                description: request.description.as_deref(),
            },
        )
        .await
    }

    async fn create_account(
        &self,
        request: CreateAccountRequest,
    ) -> Result<AccountRecord, UpstreamError> {
        self.post_json(
            "/v1/accounts",
            &CreateAccountBody {
                player: &request.player_id,
                chain_id: request.chain_id,
                external_owner_address: request.external_owner_address.as_deref(),
            },
        )
        .await
    }

    async fn create_transaction_intent(
        &self,
        request: TransactionIntentRequest,
    ) -> Result<TransactionIntentRecord, UpstreamError> {
        let interactions = request
            .interactions
            .iter()
            .map(|interaction| InteractionBody {
                contract: &interaction.contract,
                function_name: &interaction.function_name,
                function_args: &interaction.function_args,
            })
            .collect();

        self.post_json(
            "/v1/transaction_intents",
            &TransactionIntentBody {
                player: &request.player_id,
                chain_id: request.chain_id,
                policy: &request.policy_id,
                interactions,
            },
        )
        .await
    }

    async fn grant_session_key(
        &self,
        request: GrantSessionRequest,
    ) -> Result<SessionKeyRecord, UpstreamError> {
        self.post_json(
            "/v1/sessions",
            &SessionBody {
                player: &request.player_id,
                chain_id: request.chain_id,
                policy: &request.policy_id,
                address: &request.session_address,
                valid_after: Some(request.valid_after),
                valid_until: Some(request.valid_until),
            },
        )
        .await
    }

    async fn revoke_session_key(
        &self,
        request: RevokeSessionRequest,
    ) -> Result<SessionKeyRecord, UpstreamError> {
        self.post_json(
            "/v1/sessions/revoke",
            &SessionBody {
                player: &request.player_id,
                chain_id: request.chain_id,
                policy: &request.policy_id,
                address: &request.session_address,
                valid_after: None,
                valid_until: None,
            },
        )
        .await
    }

    async fn transfer_ownership(
        &self,
        request: TransferOwnershipRequest,
    ) -> Result<TransactionIntentRecord, UpstreamError> {
        let path = format!("/v1/accounts/{}/transfer_ownership", request.account_id);
        self.post_json(
            &path,
            &OwnershipBody {
                policy: &request.policy_id,
                new_owner_address: &request.new_owner_address,
            },
        )
        .await
    }

    async fn start_recovery(
        &self,
        request: StartRecoveryRequest,
    ) -> Result<AccountRecord, UpstreamError> {
        let path = format!("/v1/accounts/{}/start_recovery", request.account_id);
        self.post_json(
            &path,
            &RecoveryBody {
                new_owner_address: &request.new_owner_address,
                guardian_signatures: None,
            },
        )
        .await
    }

    async fn complete_recovery(
        &self,
        request: CompleteRecoveryRequest,
    ) -> Result<AccountRecord, UpstreamError> {
        let path = format!("/v1/accounts/{}/complete_recovery", request.account_id);
        self.post_json(
            &path,
            &RecoveryBody {
                new_owner_address: &request.new_owner_address,
                guardian_signatures: Some(&request.guardian_signatures),
            },
        )
        .await
    }
}
