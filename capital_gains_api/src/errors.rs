//! Error type for the calculate client.

/// Message used when a rejected request carries no usable reason.
pub const CALCULATION_FAILED: &str = "Calculation failed";
/// Message used when a failure carries no message of its own.
pub const INVOKE_FAILED: &str = "Error Invoking Calculate API";

/// Broad category of a failed calculate call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request never completed: connection refused, DNS, TLS, body read.
    Network,
    /// The server answered with a non-success status.
    ServerRejected,
    /// Anything else, including a missing or malformed base URL.
    Unknown,
}

/// Errors that can occur when invoking the calculate endpoint.
///
/// Every variant renders as a single human-readable message; the kind and
/// status are kept for callers that want to branch on them.
#[derive(thiserror::Error, Debug)]
#[error("{message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    status: Option<u16>,
}

impl Error {
    pub(crate) fn network(message: String) -> Self {
        Self {
            kind: ErrorKind::Network,
            message: or_fallback(Some(message), INVOKE_FAILED),
            status: None,
        }
    }

    pub(crate) fn rejected(status: u16, message: Option<String>) -> Self {
        Self {
            kind: ErrorKind::ServerRejected,
            message: or_fallback(message, CALCULATION_FAILED),
            status: Some(status),
        }
    }

    pub(crate) fn unknown(message: Option<String>) -> Self {
        Self {
            kind: ErrorKind::Unknown,
            message: or_fallback(message, INVOKE_FAILED),
            status: None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The human-readable message. Never empty.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// HTTP status of a rejected request, `None` for every other kind.
    pub fn status(&self) -> Option<u16> {
        self.status
    }
}

fn or_fallback(message: Option<String>, fallback: &str) -> String {
    match message {
        Some(m) if !m.is_empty() => m,
        _ => fallback.to_string(),
    }
}
