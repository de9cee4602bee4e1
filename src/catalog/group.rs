//! Language family tag and the spellings accepted for it on the command line.

use std::fmt;
use std::str::FromStr;

/// A family of related languages translated together in one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LanguageGroup {
    Germanic,
    Slavic,
    Romance,
}

/// Selector that matches none of the known groups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("language group '{0}' is not supported, choose from germanic (g), slavic (s), romance (r)")]
pub struct UnknownGroup(pub String);

impl LanguageGroup {
    pub const ALL: [LanguageGroup; 3] = [
        LanguageGroup::Germanic,
        LanguageGroup::Slavic,
        LanguageGroup::Romance,
    ];

    /// Parse a group selector.
    ///
    /// Accepts the one-letter code or the full lower-case name. Matching is
    /// case-sensitive: `"G"` and `"Germanic"` are rejected.
    pub fn from_selector(selector: &str) -> Result<Self, UnknownGroup> {
        match selector {
            "g" | "germanic" => Ok(LanguageGroup::Germanic),
            "s" | "slavic" => Ok(LanguageGroup::Slavic),
            "r" | "romance" => Ok(LanguageGroup::Romance),
            other => Err(UnknownGroup(other.to_string())),
        }
    }

    pub fn short_code(&self) -> &'static str {
        match self {
            LanguageGroup::Germanic => "g",
            LanguageGroup::Slavic => "s",
            LanguageGroup::Romance => "r",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            LanguageGroup::Germanic => "germanic",
            LanguageGroup::Slavic => "slavic",
            LanguageGroup::Romance => "romance",
        }
    }
}

impl FromStr for LanguageGroup {
    type Err = UnknownGroup;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_selector(s)
    }
}

impl fmt::Display for LanguageGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
