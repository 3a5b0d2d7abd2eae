//! HTTP client for the capital gains `calculate` endpoint.

use reqwest::multipart::Form;
use serde::Deserialize;
use url::Url;

use crate::{
    config::{ApiConfig, BuildMode, BASE_URL_ENV_VAR},
    Blob, CalculateRequest, Error,
};

/// Client for the capital gains backend.
///
/// Holds the resolved configuration only. Each call builds a fresh
/// `reqwest::Client`, sends exactly one request, and never retries. No
/// timeout is applied.
pub struct Client {
    config: ApiConfig,
}

impl Client {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    /// Creates a client with a fixed base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self::new(ApiConfig::with_base_url(BuildMode::current(), base_url))
    }

    fn calculate_url(&self) -> Result<Url, Error> {
        let Some(url) = self.config.calculate_url() else {
            tracing::error!(
                "No base URL resolved ({} unset in {} mode)",
                BASE_URL_ENV_VAR,
                self.config.mode()
            );
            return Err(Error::unknown(None));
        };
        Url::parse(&url).map_err(|e| {
            tracing::error!("Invalid URL constructed '{}': {}", url, e);
            Error::unknown(None)
        })
    }

    /// Posts `form` to `{base_url}/calculate` and returns the response body.
    ///
    /// A non-success status fails with the server's `message` (or `error`)
    /// field, or "Calculation failed" when the body has neither. Transport
    /// failures carry the transport error's message.
    pub async fn calculate(&self, form: Form) -> Result<Blob, Error> {
        let url = self.calculate_url()?;
        let client = reqwest::Client::builder().build().map_err(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            Error::unknown(None)
        })?;

        tracing::debug!("POST {}", url);
        let resp = client.post(url).multipart(form).send().await.map_err(|e| {
            tracing::error!("Failed to reach calculate endpoint: {}", e);
            Error::network(e.to_string())
        })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_else(|e| {
                tracing::warn!("Failed to read error body: {}", e);
                String::new()
            });
            tracing::error!(
                "Calculate failed with status {}: {}",
                status,
                truncate_body(&body)
            );
            return Err(Error::rejected(status.as_u16(), server_message(&body)));
        }

        let headers = resp.headers().clone();
        let data = resp.bytes().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::network(e.to_string())
        })?;
        tracing::debug!("Received {} bytes", data.len());

        Ok(Blob::from_parts(&headers, data.to_vec()))
    }

    /// Builds the form from `request` and calls [`Client::calculate`].
    pub async fn calculate_request(&self, request: CalculateRequest) -> Result<Blob, Error> {
        self.calculate(request.into_form()).await
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

/// First non-empty `message` or `error` string in a JSON error body.
fn server_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    parsed
        .message
        .filter(|m| !m.is_empty())
        .or(parsed.error.filter(|e| !e.is_empty()))
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    match body.char_indices().nth(MAX) {
        Some((cut, _)) => format!("{}...[truncated]", &body[..cut]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_prefers_message_field() {
        let body = r#"{"message": "Invalid date range", "error": "other"}"#;
        assert_eq!(server_message(body).as_deref(), Some("Invalid date range"));
    }

    #[test]
    fn server_message_falls_back_to_error_field() {
        let body = r#"{"error": "Transactions file not provided"}"#;
        assert_eq!(
            server_message(body).as_deref(),
            Some("Transactions file not provided")
        );
        let body = r#"{"message": "", "error": "Invalid file type for fmv file"}"#;
        assert_eq!(
            server_message(body).as_deref(),
            Some("Invalid file type for fmv file")
        );
    }

    #[test]
    fn server_message_none_for_unusable_bodies() {
        assert_eq!(server_message("{}"), None);
        assert_eq!(server_message("<html>Bad Gateway</html>"), None);
        assert_eq!(server_message(""), None);
        assert_eq!(server_message("null"), None);
        assert_eq!(server_message(r#"{"message": 42}"#), None);
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        let short = "short body";
        assert_eq!(truncate_body(short), short);

        let long = "é".repeat(2500);
        let truncated = truncate_body(&long);
        assert!(truncated.ends_with("...[truncated]"));
        assert_eq!(truncated.chars().filter(|c| *c == 'é').count(), 2000);
    }

    #[test]
    fn missing_base_url_fails_before_sending() {
        let client = Client::new(ApiConfig::resolve(BuildMode::Production, |_| None));
        let err = client.calculate_url().unwrap_err();
        assert_eq!(err.message(), crate::errors::INVOKE_FAILED);
    }
}
