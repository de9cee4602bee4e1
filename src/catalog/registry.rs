//! Static language table: single source of truth for which codes a
//! `(provider, group)` pair expands to.
//!
//! Each provider names languages in its own vocabulary (DeepL uses upper-case
//! codes and regional variants like `PT-PT`, Yandex uses lower-case ISO 639-1),
//! so the table is keyed by both.

use crate::catalog::{LanguageGroup, UnknownGroup};
use crate::provider::Provider;
use std::fmt;

/// A target language code in the provider's vocabulary (e.g. "DE", "ru").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LanguageCode(&'static str);

impl LanguageCode {
    pub const fn new(code: &'static str) -> Self {
        LanguageCode(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

const fn codes<const N: usize>(raw: [&'static str; N]) -> [LanguageCode; N] {
    let mut out = [LanguageCode(""); N];
    let mut i = 0;
    while i < N {
        out[i] = LanguageCode(raw[i]);
        i += 1;
    }
    out
}

static DEEPL_GERMANIC: [LanguageCode; 4] = codes(["NL", "DA", "DE", "SV"]);
static DEEPL_SLAVIC: [LanguageCode; 9] =
    codes(["RU", "BG", "PL", "CS", "LT", "LV", "SL", "SK", "UK"]);
static DEEPL_ROMANCE: [LanguageCode; 5] = codes(["IT", "PT-PT", "RO", "FR", "ES"]);

static YANDEX_GERMANIC: [LanguageCode; 7] = codes(["af", "nl", "da", "is", "de", "no", "sv"]);
static YANDEX_SLAVIC: [LanguageCode; 12] = codes([
    "ru", "be", "bg", "bs", "mk", "pl", "sr", "sk", "sl", "cs", "hr", "uk",
]);
static YANDEX_ROMANCE: [LanguageCode; 6] = codes(["it", "pt", "ro", "fr", "es", "ca"]);

impl LanguageGroup {
    /// Target languages of this group for the given provider.
    pub fn languages(&self, provider: Provider) -> &'static [LanguageCode] {
        match (provider, self) {
            (Provider::DeepL, LanguageGroup::Germanic) => &DEEPL_GERMANIC,
            (Provider::DeepL, LanguageGroup::Slavic) => &DEEPL_SLAVIC,
            (Provider::DeepL, LanguageGroup::Romance) => &DEEPL_ROMANCE,
            (Provider::Yandex, LanguageGroup::Germanic) => &YANDEX_GERMANIC,
            (Provider::Yandex, LanguageGroup::Slavic) => &YANDEX_SLAVIC,
            (Provider::Yandex, LanguageGroup::Romance) => &YANDEX_ROMANCE,
        }
    }
}

/// Resolve a group selector to the provider's target languages.
///
/// # Returns
/// * `Ok(codes)` for `g`/`germanic`, `s`/`slavic`, `r`/`romance`
/// * `Err(UnknownGroup)` for anything else
pub fn resolve(provider: Provider, selector: &str) -> Result<&'static [LanguageCode], UnknownGroup> {
    LanguageGroup::from_selector(selector).map(|group| group.languages(provider))
}
