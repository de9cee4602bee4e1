use super::{decode_response, TranslateError};
use crate::catalog::LanguageCode;
use crate::provider::Provider;
use serde::Deserialize;

/// Body of a Yandex.Translate `tr.json/translate` response
#[derive(Debug, Deserialize)]
struct TranslateResponse {
    text: Vec<String>,
}

pub(super) async fn translate(
    client: &reqwest::Client,
    url: &str,
    text: &str,
    target: LanguageCode,
    credential: &str,
) -> Result<Option<String>, TranslateError> {
    // Direction is "<from>-<to>", the source is always English
    let lang = format!("en-{}", target);

    let response = client
        .get(url)
        .query(&[("key", credential), ("text", text), ("lang", lang.as_str())])
        .send()
        .await?;

    let body: TranslateResponse = decode_response(Provider::Yandex, response).await?;

    Ok(body.text.into_iter().next())
}
