use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::domain::entities::ActionSettings;
use crate::domain::ports::{Clock, TokenVerifier, WalletApi};
use crate::use_cases::resolve_player::SubjectLocks;

// Shared application state for the HTTP handlers.
// We use Arc<dyn Trait> to hold any implementation (dependency injection).
pub struct AppState {
    pub verifier: Arc<dyn TokenVerifier>,
    pub wallet: Arc<dyn WalletApi>,
    pub clock: Arc<dyn Clock>,
    pub locks: SubjectLocks,
    pub actions: ActionSettings,
}

// System clock adapter for session-key windows.
#[derive(Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_epoch_seconds(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    }
}
