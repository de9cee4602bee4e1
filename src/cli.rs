use crate::config::ConfigError;
use crate::provider::Provider;
use clap::{CommandFactory, Parser};
use std::io::Write;

/// Exit status for a run rejected before any request was sent
pub const CONFIG_ERROR_EXIT: u8 = 1;

/// Translate English text into every language of a language family.
///
/// The API token is read from DEEPL_TRANSLATE_TOKEN or YANDEX_TRANSLATE_TOKEN,
/// depending on the provider. Each translation is printed as
/// `<language code><TAB><text>` as soon as it arrives.
#[derive(Debug, Clone, Parser)]
#[command(name = "family-translate", version)]
pub struct Cli {
    /// Language group - choose from germanic (g), slavic (s), romance (r)
    #[arg(short, long)]
    pub group: Option<String>,

    /// English text to translate
    #[arg(short, long, visible_alias = "word")]
    pub text: Option<String>,

    /// Translation provider
    #[arg(short, long, value_enum, env = "TRANSLATE_PROVIDER", default_value_t = Provider::DeepL)]
    pub provider: Provider,

    /// Override the provider's translate endpoint URL
    #[arg(long, env = "TRANSLATE_API_URL")]
    pub api_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(
        long = "timeout",
        env = "TRANSLATE_TIMEOUT_SECS",
        default_value_t = 30,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_secs: u64,
}

/// Write a configuration error (and the usage text where it helps) to `out`.
///
/// Returns the process exit status to use.
pub fn report_config_error<W: Write>(error: &ConfigError, out: &mut W) -> u8 {
    let _ = writeln!(out, "Error: {}", error);
    if error.shows_usage() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", Cli::command().render_help());
    }
    CONFIG_ERROR_EXIT
}
