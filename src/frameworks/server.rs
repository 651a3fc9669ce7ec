use std::io::Result;
use std::net::SocketAddr;
use std::sync::Arc;

use url::Url;

use crate::domain::address::validate_eth_address;
use crate::domain::entities::ActionSettings;
use crate::frameworks::config;
use crate::interface_adapters::clients::jwks::JwksVerifier;
use crate::interface_adapters::clients::wallet::WalletClient;
use crate::interface_adapters::routes;
use crate::interface_adapters::state::{AppState, SystemClock};
use crate::use_cases::resolve_player::SubjectLocks;

fn init_runtime() {
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

// Serve the gateway on an existing listener. Split from run_with_config
// so tests can bind an ephemeral port.
pub async fn run(listener: tokio::net::TcpListener) -> Result<()> {
    let address = listener.local_addr()?;
    let state = build_state()?;

    let app = routes::app(state);

    tracing::info!(%address, "listening");

    // Serve app and report errors rather than panicking.
    axum::serve(listener, app).await.inspect_err(|e| {
        tracing::error!(error = %e, "server error");
    })
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let address = SocketAddr::from(([0, 0, 0, 0], config::http_port()));

    // Bind TCP listener with error handling.
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .inspect_err(|e| {
            tracing::error!(%address, error = %e, "failed to bind");
        })?;

    run(listener).await
}

fn build_state() -> Result<Arc<AppState>> {
    let wallet_api_url = required_endpoint("WALLET_API_URL")?;
    let wallet_api_secret = required_var("WALLET_API_SECRET")?;
    let jwks_url = required_endpoint("JWKS_URL")?;
    let token_issuer = required_var("TOKEN_ISSUER")?;
    let token_audience = required_var("TOKEN_AUDIENCE")?;
    let policy_id = required_var("POLICY_ID")?;
    let contract_address = required_var("CONTRACT_ADDRESS")?;

    if validate_eth_address(&contract_address).is_err() {
        tracing::error!("CONTRACT_ADDRESS is not a valid chain address");
        return Err(std::io::Error::other("CONTRACT_ADDRESS must be a 0x-prefixed hex address"));
    }

    let wallet = WalletClient::new(
        wallet_api_url.clone(),
        wallet_api_secret,
        config::wallet_api_timeout(),
    )
    .map_err(|e| std::io::Error::other(format!("failed to initialize wallet client: {e}")))?;
    tracing::debug!(%wallet_api_url, "wallet client configured");

    let verifier = JwksVerifier::new(
        jwks_url.clone(),
        token_issuer,
        token_audience,
        config::jwks_fetch_timeout(),
        config::jwks_cache_ttl(),
    )
    .map_err(|e| std::io::Error::other(format!("failed to initialize token verifier: {e}")))?;
    tracing::debug!(%jwks_url, "token verifier configured");

    let actions = ActionSettings {
        chain_id: config::chain_id(),
        policy_id,
        contract_address,
        mint_function: config::mint_function(),
        session_ttl_seconds: config::session_key_ttl_seconds(),
    };

    Ok(Arc::new(AppState {
        verifier: Arc::new(verifier),
        wallet: Arc::new(wallet),
        clock: Arc::new(SystemClock),
        locks: SubjectLocks::new(),
        actions,
    }))
}

// Required variables fail startup loudly instead of defaulting.
fn required_var(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => {
            tracing::error!(%name, "required environment variable is not set");
            Err(std::io::Error::other(format!("{name} must be set")))
        }
    }
}

// Endpoint variables are parse-checked so a typo fails at startup, not
// on the first request.
fn required_endpoint(name: &str) -> Result<String> {
    let value = required_var(name)?;
    if let Err(e) = Url::parse(&value) {
        tracing::error!(%name, error = %e, "environment variable is not a valid url");
        return Err(std::io::Error::other(format!("{name} must be a valid url")));
    }
    Ok(value)
}
