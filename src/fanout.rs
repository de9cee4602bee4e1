//! Fan-out coordinator: one task per target language, outcomes in completion
//! order, finished only when every task has reported.

use crate::catalog::LanguageCode;
use crate::config::Config;
use crate::provider::Endpoint;
use crate::translation::{TranslateError, TranslationRequest, TranslationResult};
use anyhow::{Context, Result};
use futures::stream::{FuturesUnordered, Stream, StreamExt};
use std::io::Write;
use std::sync::Arc;
use tracing::{debug, info};

/// Counts for one invocation of `run`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FanOutReport {
    pub succeeded: usize,
    pub failed: usize,
}

impl FanOutReport {
    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }

    fn record(&mut self, result: &TranslationResult) {
        if result.is_success() {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
    }
}

/// Translate `text` into every language in `targets` concurrently.
///
/// All requests are spawned before this returns, so they overlap on the
/// network whether or not the caller is polling yet. The returned stream
/// yields one `TranslationResult` per target in the order they complete and
/// ends only once all of them have been yielded. A failing language never
/// cancels the others.
///
/// Must be called from within a Tokio runtime.
pub fn translate_all(
    client: &reqwest::Client,
    endpoint: &Endpoint,
    text: &str,
    targets: &[LanguageCode],
    credential: &str,
) -> impl Stream<Item = TranslationResult> + Unpin {
    let text: Arc<str> = Arc::from(text);
    let credential: Arc<str> = Arc::from(credential);
    let endpoint = Arc::new(endpoint.clone());

    info!(
        "Dispatching {} translation requests to {}",
        targets.len(),
        endpoint.provider
    );

    targets
        .iter()
        .map(|&target| {
            let request = TranslationRequest {
                text: Arc::clone(&text),
                target,
                credential: Arc::clone(&credential),
            };
            let client = client.clone();
            let endpoint = Arc::clone(&endpoint);

            let handle = tokio::spawn(async move { request.execute(&client, &endpoint).await });

            async move {
                match handle.await {
                    Ok(result) => result,
                    Err(e) => TranslationResult {
                        language: target,
                        outcome: Err(TranslateError::Task(e.to_string())),
                    },
                }
            }
        })
        .collect::<FuturesUnordered<_>>()
}

/// Format a successful translation as its standard output line.
pub fn format_success(language: LanguageCode, translated: &str) -> String {
    format!("{}\t{}", language, translated)
}

/// Format a failed translation as its standard error line.
pub fn format_failure(language: LanguageCode, error: &TranslateError) -> String {
    format!("Error: {}: {}", language, error)
}

/// Run a full invocation: fan out, then write each outcome as it arrives.
///
/// Successes go to `out` as `<code>\t<text>`, failures to `err`, one line
/// each. Per-language failures are counted in the report, not returned as an
/// error; only client construction or write failures abort the run.
pub async fn run<O: Write, E: Write>(config: &Config, out: &mut O, err: &mut E) -> Result<FanOutReport> {
    let client = reqwest::Client::builder()
        .timeout(config.request_timeout)
        .build()
        .context("Failed to build HTTP client")?;

    let targets = config.group.languages(config.endpoint.provider);
    let mut outcomes = translate_all(
        &client,
        &config.endpoint,
        &config.text,
        targets,
        &config.credential,
    );

    let mut report = FanOutReport::default();
    while let Some(result) = outcomes.next().await {
        report.record(&result);
        match &result.outcome {
            Ok(translated) => {
                writeln!(out, "{}", format_success(result.language, translated))
                    .context("Failed to write translation to output")?;
            }
            Err(e) => {
                debug!("Translation into {} failed: {:?}", result.language, e);
                writeln!(err, "{}", format_failure(result.language, e))
                    .context("Failed to write error output")?;
            }
        }
    }

    info!(
        "Translation complete: {} successful, {} failed",
        report.succeeded, report.failed
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::Provider;
    use std::collections::HashSet;
    use std::time::{Duration, Instant};
    use wiremock::{
        matchers::{body_string_contains, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    const GERMANIC: [LanguageCode; 4] = [
        LanguageCode::new("NL"),
        LanguageCode::new("DA"),
        LanguageCode::new("DE"),
        LanguageCode::new("SV"),
    ];

    fn deepl_response(text: &str) -> serde_json::Value {
        serde_json::json!({ "translations": [{ "text": text }] })
    }

    async fn mount_translation(server: &MockServer, code: &str, text: &str) {
        Mock::given(method("POST"))
            .and(path("/v2/translate"))
            .and(body_string_contains(format!("target_lang={}", code)))
            .respond_with(ResponseTemplate::new(200).set_body_json(deepl_response(text)))
            .expect(1)
            .mount(server)
            .await;
    }

    fn endpoint(server: &MockServer) -> Endpoint {
        Endpoint::with_url(Provider::DeepL, format!("{}/v2/translate", server.uri()))
    }

    #[tokio::test]
    async fn test_translate_all_yields_one_outcome_per_target() {
        let mock_server = MockServer::start().await;
        mount_translation(&mock_server, "NL", "taal").await;
        mount_translation(&mock_server, "DA", "sprog").await;
        mount_translation(&mock_server, "DE", "Sprache").await;
        mount_translation(&mock_server, "SV", "språk").await;

        let client = reqwest::Client::new();
        let results: Vec<_> =
            translate_all(&client, &endpoint(&mock_server), "language", &GERMANIC, "key")
                .collect()
                .await;

        assert_eq!(results.len(), 4);
        let languages: HashSet<_> = results.iter().map(|r| r.language).collect();
        let expected: HashSet<_> = GERMANIC.iter().copied().collect();
        assert_eq!(languages, expected);
        assert!(results.iter().all(|r| r.is_success()));

        let german = results
            .iter()
            .find(|r| r.language == LanguageCode::new("DE"))
            .expect("DE outcome");
        assert_eq!(german.outcome.as_ref().unwrap(), "Sprache");
    }

    #[tokio::test]
    async fn test_one_failure_does_not_affect_others() {
        let mock_server = MockServer::start().await;
        mount_translation(&mock_server, "NL", "taal").await;
        mount_translation(&mock_server, "DA", "sprog").await;
        mount_translation(&mock_server, "SV", "språk").await;

        Mock::given(method("POST"))
            .and(path("/v2/translate"))
            .and(body_string_contains("target_lang=DE"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = reqwest::Client::new();
        let results: Vec<_> =
            translate_all(&client, &endpoint(&mock_server), "language", &GERMANIC, "key")
                .collect()
                .await;

        assert_eq!(results.len(), 4);
        let failed: Vec<_> = results.iter().filter(|r| !r.is_success()).collect();
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].language, LanguageCode::new("DE"));
        assert!(matches!(
            failed[0].outcome,
            Err(TranslateError::HttpStatus { .. })
        ));
    }

    #[tokio::test]
    async fn test_requests_run_concurrently() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v2/translate"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(deepl_response("x"))
                    .set_delay(Duration::from_secs(1)),
            )
            .expect(4)
            .mount(&mock_server)
            .await;

        let client = reqwest::Client::new();
        let start = Instant::now();
        let results: Vec<_> =
            translate_all(&client, &endpoint(&mock_server), "language", &GERMANIC, "key")
                .collect()
                .await;
        let elapsed = start.elapsed();

        assert_eq!(results.len(), 4);
        // Sequential calls would take at least 4s
        assert!(
            elapsed < Duration::from_secs(3),
            "Requests should overlap, took {:?}",
            elapsed
        );
    }

    #[tokio::test]
    async fn test_slow_language_is_still_awaited() {
        let mock_server = MockServer::start().await;
        mount_translation(&mock_server, "NL", "taal").await;

        Mock::given(method("POST"))
            .and(path("/v2/translate"))
            .and(body_string_contains("target_lang=DE"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(deepl_response("Sprache"))
                    .set_delay(Duration::from_millis(300)),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let targets = [LanguageCode::new("DE"), LanguageCode::new("NL")];
        let client = reqwest::Client::new();
        let results: Vec<_> =
            translate_all(&client, &endpoint(&mock_server), "language", &targets, "key")
                .collect()
                .await;

        assert_eq!(results.len(), 2);
        // The fast language completes first
        assert_eq!(results[0].language, LanguageCode::new("NL"));
        assert_eq!(results[1].language, LanguageCode::new("DE"));
    }

    #[tokio::test]
    async fn test_empty_target_list_yields_nothing() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let client = reqwest::Client::new();
        let results: Vec<_> =
            translate_all(&client, &endpoint(&mock_server), "language", &[], "key")
                .collect()
                .await;

        assert!(results.is_empty());
    }

    #[test]
    fn test_format_success_uses_tab() {
        assert_eq!(
            format_success(LanguageCode::new("DE"), "Sprache"),
            "DE\tSprache"
        );
    }

    #[test]
    fn test_format_failure_names_language() {
        let line = format_failure(LanguageCode::new("SV"), &TranslateError::EmptyTranslation);
        assert_eq!(line, "Error: SV: no translation available");
    }

    #[test]
    fn test_report_total() {
        let report = FanOutReport {
            succeeded: 3,
            failed: 1,
        };
        assert_eq!(report.total(), 4);
    }
}
