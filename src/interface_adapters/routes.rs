use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};

use crate::interface_adapters::handlers::{self, accounts, assets, ownership, sessions};
use crate::interface_adapters::state::AppState;

// Wire the HTTP routes to their handlers.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/wallet/accounts", post(accounts::create_account))
        .route("/wallet/mint", post(assets::mint_asset))
        .route("/wallet/sessions", post(sessions::grant_session))
        .route("/wallet/sessions/revoke", post(sessions::revoke_session))
        .route(
            "/wallet/transfer-ownership",
            post(ownership::transfer_ownership),
        )
        .route("/wallet/recovery/start", post(ownership::start_recovery))
        .route(
            "/wallet/recovery/complete",
            post(ownership::complete_recovery),
        )
        .with_state(state)
}
