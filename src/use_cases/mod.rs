pub mod grant_session;
pub mod mint_asset;
pub mod recover_account;
pub mod resolve_player;
pub mod revoke_session;
pub mod transfer_ownership;

#[cfg(test)]
pub(crate) mod test_support;
