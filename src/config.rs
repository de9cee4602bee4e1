use crate::catalog::{LanguageGroup, UnknownGroup};
use crate::cli::Cli;
use crate::provider::Endpoint;
use std::time::Duration;

/// Validated settings for one invocation. Built once at startup, never mutated.
#[derive(Clone)]
pub struct Config {
    pub group: LanguageGroup,
    pub text: String,
    pub credential: String,
    pub endpoint: Endpoint,
    pub request_timeout: Duration,
}

/// Problems that stop a run before any request is sent.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("language group is not provided")]
    MissingGroup,

    #[error(transparent)]
    UnknownGroup(#[from] UnknownGroup),

    #[error("text to translate is not provided")]
    EmptyText,

    #[error("API token missing, set it as the value of the {var} environment variable")]
    MissingCredential { var: &'static str },
}

impl ConfigError {
    /// Whether the usage text should follow the error message.
    pub fn shows_usage(&self) -> bool {
        !matches!(self, ConfigError::MissingCredential { .. })
    }
}

impl Config {
    /// Build a config from parsed flags, reading the credential from the
    /// provider's environment variable.
    pub fn from_env(cli: &Cli) -> Result<Self, ConfigError> {
        let credential = std::env::var(cli.provider.credential_var()).ok();
        Self::new(cli, credential)
    }

    /// Build a config from parsed flags and an already looked-up credential.
    ///
    /// The credential is checked first, then the group, then the text.
    pub fn new(cli: &Cli, credential: Option<String>) -> Result<Self, ConfigError> {
        let credential = credential
            .filter(|c| !c.trim().is_empty())
            .ok_or(ConfigError::MissingCredential {
                var: cli.provider.credential_var(),
            })?;

        let group = match cli.group.as_deref() {
            None | Some("") => return Err(ConfigError::MissingGroup),
            Some(selector) => LanguageGroup::from_selector(selector)?,
        };

        let text = match cli.text.as_deref() {
            Some(text) if !text.trim().is_empty() => text.to_string(),
            _ => return Err(ConfigError::EmptyText),
        };

        let endpoint = match &cli.api_url {
            Some(url) if !url.is_empty() => Endpoint::with_url(cli.provider, url.clone()),
            _ => Endpoint::new(cli.provider),
        };

        Ok(Self {
            group,
            text,
            credential,
            endpoint,
            request_timeout: Duration::from_secs(cli.timeout_secs),
        })
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("group", &self.group)
            .field("text", &self.text)
            .field("credential", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}
