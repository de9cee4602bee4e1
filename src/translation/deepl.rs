use super::{decode_response, TranslateError};
use crate::catalog::LanguageCode;
use crate::provider::Provider;
use serde::{Deserialize, Serialize};

/// Form body of a DeepL `/v2/translate` call
#[derive(Debug, Serialize)]
struct TranslateForm<'a> {
    text: &'a str,
    source_lang: &'static str,
    target_lang: &'a str,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    translations: Vec<Translation>,
}

#[derive(Debug, Deserialize)]
struct Translation {
    text: String,
}

pub(super) async fn translate(
    client: &reqwest::Client,
    url: &str,
    text: &str,
    target: LanguageCode,
    credential: &str,
) -> Result<Option<String>, TranslateError> {
    let form = TranslateForm {
        text,
        source_lang: "EN",
        target_lang: target.as_str(),
    };

    let response = client
        .post(url)
        .header("Authorization", format!("DeepL-Auth-Key {}", credential))
        .form(&form)
        .send()
        .await?;

    let body: TranslateResponse = decode_response(Provider::DeepL, response).await?;

    Ok(body.translations.into_iter().next().map(|t| t.text))
}
