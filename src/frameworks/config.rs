use std::env;
use std::time::Duration;

// Default chain for account creation and intents (Polygon Amoy testnet).
pub const DEFAULT_CHAIN_ID: u64 = 80_002;

pub fn http_port() -> u16 {
    env::var("WALLET_GATEWAY_PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(3003)
}

pub fn chain_id() -> u64 {
    env::var("CHAIN_ID")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(DEFAULT_CHAIN_ID)
}

pub fn mint_function() -> String {
    env::var("MINT_FUNCTION").unwrap_or_else(|_| "mint".to_string())
}

pub fn session_key_ttl_seconds() -> u64 {
    env::var("SESSION_KEY_TTL_SECONDS")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(3_600)
}

pub fn wallet_api_timeout() -> Duration {
    let millis = env::var("WALLET_API_TIMEOUT_MS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(5_000);
    Duration::from_millis(millis)
}

pub fn jwks_fetch_timeout() -> Duration {
    let millis = env::var("JWKS_FETCH_TIMEOUT_MS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(1_500);
    Duration::from_millis(millis)
}

pub fn jwks_cache_ttl() -> Duration {
    let seconds = env::var("JWKS_CACHE_TTL_SECONDS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(300);
    Duration::from_secs(seconds)
}
