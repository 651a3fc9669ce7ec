// The clients defined here wrap reqwest calls to external services.

pub mod jwks;
pub mod wallet;
