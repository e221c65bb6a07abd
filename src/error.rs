//! Error taxonomy shared by REST calls, identity operations, and form checks.
//!
//! ERROR HANDLING
//! ==============
//! Every variant is caught at the page boundary and turned into a transient
//! notice. Nothing here is retried or treated as fatal.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Errors surfaced by client operations.
///
/// `Clone + PartialEq` so values can live inside reactive signals.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    /// The request never completed (transport failure, CORS, offline).
    #[error("network request failed: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("server responded with {status}: {message}")]
    Server { status: u16, message: String },

    /// Client-side input check failed before anything was sent.
    #[error("{0}")]
    Validation(String),

    /// The federated consent flow was dismissed.
    #[error("sign-in was cancelled")]
    UserCancelled,

    /// The identity provider rejected the email/password pair.
    #[error("invalid email or password")]
    InvalidCredentials,
}

impl AppError {
    /// Stable machine-readable code for logs.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Network(_) => "E_NETWORK",
            Self::Server { .. } => "E_SERVER",
            Self::Validation(_) => "E_VALIDATION",
            Self::UserCancelled => "E_USER_CANCELLED",
            Self::InvalidCredentials => "E_INVALID_CREDENTIALS",
        }
    }

    /// Text shown to the user.
    ///
    /// Server and validation messages are shown verbatim; transport failures
    /// fall back to the caller's screen-specific wording.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Server { message, .. } if !message.trim().is_empty() => message.clone(),
            Self::Validation(message) => message.clone(),
            Self::UserCancelled | Self::InvalidCredentials => self.to_string(),
            Self::Server { .. } | Self::Network(_) => fallback.to_owned(),
        }
    }

    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

/// Extract a human message from a non-success response body.
///
/// Prefers a JSON `{"message": ...}` payload, then the raw body text, then
/// the bare status.
pub fn server_error(status: u16, body: &str) -> AppError {
    #[derive(serde::Deserialize)]
    struct MessageBody {
        message: String,
    }

    let message = match serde_json::from_str::<MessageBody>(body) {
        Ok(parsed) => parsed.message,
        Err(_) if !body.trim().is_empty() => body.trim().to_owned(),
        Err(_) => format!("request failed with status {status}"),
    };
    AppError::Server { status, message }
}
