use std::fmt;

// Credential verification failures surfaced by the token verifier.
#[derive(Debug)]
pub enum AuthError {
    MissingToken,
    MalformedToken,
    UnknownKeyId,
    AlgorithmRejected,
    TokenExpired,
    TokenRejected,
    KeySetUnavailable,
}

// Upstream wallet API failures, kept detailed enough to relay to callers.
#[derive(Debug)]
pub enum UpstreamError {
    // Could not reach the service at all.
    Transport(String),
    // The service answered with a non-success status.
    Status { status: u16, message: Option<String> },
    // The service answered 2xx but the payload did not parse.
    Decode(String),
}

impl fmt::Display for UpstreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpstreamError::Transport(detail) => {
                write!(f, "wallet api transport error: {detail}")
            }
            UpstreamError::Status {
                status,
                message: Some(message),
            } => {
                write!(f, "wallet api returned status {status}: {message}")
            }
            UpstreamError::Status {
                status,
                message: None,
            } => {
                write!(f, "wallet api returned status {status}")
            }
            UpstreamError::Decode(detail) => {
                write!(f, "wallet api response decode error: {detail}")
            }
        }
    }
}

impl std::error::Error for UpstreamError {}

// Failures of the privileged wallet actions.
#[derive(Debug)]
pub enum ActionError {
    InvalidAddress,
    MissingSignatures,
    Upstream(UpstreamError),
}

impl From<UpstreamError> for ActionError {
    fn from(err: UpstreamError) -> Self {
        ActionError::Upstream(err)
    }
}
