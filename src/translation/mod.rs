//! Translation client: one request to the provider per call, decoded into the
//! translated text.
//!
//! The provider-specific wire contracts live in `deepl` and `yandex`; this
//! module owns the shared error type, status handling and the rule that a
//! successful result is never an empty string.

mod deepl;
mod yandex;

use crate::catalog::LanguageCode;
use crate::provider::{Endpoint, Provider};
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Failure of a single language's translation.
#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    /// Built with the request URL stripped; Yandex carries the key in the query string.
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("{provider} API error ({status}): {body}")]
    HttpStatus {
        provider: Provider,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("failed to decode {provider} response: {source}")]
    Decode {
        provider: Provider,
        #[source]
        source: serde_json::Error,
    },

    #[error("no translation available")]
    EmptyTranslation,

    /// The task running the request panicked or was torn down.
    #[error("translation task failed: {0}")]
    Task(String),
}

impl From<reqwest::Error> for TranslateError {
    fn from(e: reqwest::Error) -> Self {
        TranslateError::Network(e.without_url())
    }
}

/// Longest response body kept in an `HttpStatus` error
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Collapse an error body onto one line and cap its length, so each failed
/// language prints exactly one line.
fn single_line_body(body: &str) -> String {
    let collapsed = body.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= MAX_ERROR_BODY_CHARS {
        return collapsed;
    }
    let mut truncated: String = collapsed.chars().take(MAX_ERROR_BODY_CHARS).collect();
    truncated.push_str("...");
    truncated
}

/// Translate `text` from English into `target`.
///
/// Makes exactly one request. Non-success statuses, unparsable bodies and
/// empty translations are all errors; nothing is retried.
pub async fn translate(
    client: &reqwest::Client,
    endpoint: &Endpoint,
    text: &str,
    target: LanguageCode,
    credential: &str,
) -> Result<String, TranslateError> {
    debug!(
        "Requesting {} translation into {} from {}",
        endpoint.provider, target, endpoint.url
    );

    let translated = match endpoint.provider {
        Provider::DeepL => deepl::translate(client, &endpoint.url, text, target, credential).await?,
        Provider::Yandex => {
            yandex::translate(client, &endpoint.url, text, target, credential).await?
        }
    };

    translated
        .filter(|t| !t.is_empty())
        .ok_or(TranslateError::EmptyTranslation)
}

/// Check the status and parse the body of a provider response.
async fn decode_response<T: DeserializeOwned>(
    provider: Provider,
    response: reqwest::Response,
) -> Result<T, TranslateError> {
    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|e| format!("<failed to read body: {}>", e.without_url()));
        return Err(TranslateError::HttpStatus {
            provider,
            status,
            body: single_line_body(&body),
        });
    }

    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|source| TranslateError::Decode { provider, source })
}

/// One language's unit of work within a fan-out.
#[derive(Clone)]
pub struct TranslationRequest {
    pub text: Arc<str>,
    pub target: LanguageCode,
    pub credential: Arc<str>,
}

impl fmt::Debug for TranslationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranslationRequest")
            .field("text", &self.text)
            .field("target", &self.target)
            .field("credential", &"<redacted>")
            .finish()
    }
}

impl TranslationRequest {
    pub async fn execute(self, client: &reqwest::Client, endpoint: &Endpoint) -> TranslationResult {
        let outcome = translate(client, endpoint, &self.text, self.target, &self.credential).await;
        TranslationResult {
            language: self.target,
            outcome,
        }
    }
}

/// Outcome of one language's translation.
#[derive(Debug)]
pub struct TranslationResult {
    pub language: LanguageCode,
    pub outcome: Result<String, TranslateError>,
}

impl TranslationResult {
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }
}
