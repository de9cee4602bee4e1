//! Translation providers and the endpoints they are reached at.

use std::fmt;

/// The external machine-translation service a run talks to.
///
/// The binding is chosen once per invocation (flag or `TRANSLATE_PROVIDER`)
/// and decides the wire contract, the default URL, the credential variable
/// and which catalog table is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum Provider {
    /// DeepL v2 API: form-encoded POST, key in the `Authorization` header
    #[default]
    #[value(name = "deepl")]
    DeepL,
    /// Yandex.Translate v1.5 API: GET with key, text and lang in the query string
    Yandex,
}

impl Provider {
    pub fn name(&self) -> &'static str {
        match self {
            Provider::DeepL => "DeepL",
            Provider::Yandex => "Yandex.Translate",
        }
    }

    /// Environment variable the credential is read from.
    pub fn credential_var(&self) -> &'static str {
        match self {
            Provider::DeepL => "DEEPL_TRANSLATE_TOKEN",
            Provider::Yandex => "YANDEX_TRANSLATE_TOKEN",
        }
    }

    pub fn default_url(&self) -> &'static str {
        match self {
            Provider::DeepL => "https://api-free.deepl.com/v2/translate",
            Provider::Yandex => "https://translate.yandex.net/api/v1.5/tr.json/translate",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A provider together with the URL its translate call is sent to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub provider: Provider,
    pub url: String,
}

impl Endpoint {
    /// Endpoint at the provider's public URL.
    pub fn new(provider: Provider) -> Self {
        Self {
            provider,
            url: provider.default_url().to_string(),
        }
    }

    /// Endpoint at a custom URL (self-hosted proxy, paid DeepL tier, mock server).
    pub fn with_url(provider: Provider, url: impl Into<String>) -> Self {
        Self {
            provider,
            url: url.into(),
        }
    }
}
