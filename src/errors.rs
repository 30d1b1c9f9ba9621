use std::fmt;

/// SDK error types.
#[derive(Debug)]
pub enum Error {
    /// Client misconfiguration (missing/empty API key, malformed base URL).
    /// Raised at construction, never at the first network call.
    Configuration(String),
    /// The server rejected a parameter. Carries the offending wire field
    /// name when the error body identified one.
    Validation {
        /// Wire name of the invalid parameter, if the server reported it.
        param: Option<String>,
        /// Human-readable message from the server.
        message: String,
    },
    /// Bad or revoked credentials.
    Authentication(String),
    /// Unknown resource ID.
    NotFound(String),
    /// The account is being throttled.
    RateLimit(String),
    /// Unexpected server failure, or an error body that could not be parsed.
    Server {
        /// HTTP status code returned by the server.
        status: u16,
        /// Response body or a description of it.
        message: String,
    },
    /// A success response whose body could not be deserialized into the
    /// expected entity.
    Decode(String),
    /// Network-level failure, surfaced from the HTTP layer without
    /// reinterpretation.
    Transport(reqwest::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Configuration(msg) => write!(f, "Configuration error: {}", msg),
            Error::Validation { param, message } => match param {
                Some(param) => write!(f, "Invalid parameter '{}': {}", param, message),
                None => write!(f, "Invalid request: {}", message),
            },
            Error::Authentication(msg) => write!(f, "Authentication failed: {}", msg),
            Error::NotFound(msg) => write!(f, "Not found: {}", msg),
            Error::RateLimit(msg) => write!(f, "Rate limited: {}", msg),
            Error::Server { status, message } => {
                write!(f, "Server error ({}): {}", status, message)
            }
            Error::Decode(msg) => write!(f, "Decode error: {}", msg),
            Error::Transport(e) => write!(f, "Transport error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Transport(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(err)
    }
}

impl Error {
    /// Wire name of the invalid parameter, when the server reported one.
    pub fn invalid_param(&self) -> Option<&str> {
        match self {
            Error::Validation { param, .. } => param.as_deref(),
            _ => None,
        }
    }
}
