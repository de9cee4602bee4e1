//! Language catalog: which target languages belong to which family.
//!
//! # Architecture
//!
//! - `group`: the `LanguageGroup` tag and selector parsing
//! - `registry`: the static `(provider, group)` table of `LanguageCode`s
//!
//! Everything here is a pure lookup. Resolving a selector never touches the
//! network, so a bad `--group` is rejected before any request is made.
//!
//! ```rust,ignore
//! use family_translate::catalog;
//! use family_translate::provider::Provider;
//!
//! let codes = catalog::resolve(Provider::DeepL, "g")?;
//! assert_eq!(codes.len(), 4);
//! ```

mod group;
mod registry;

pub use group::{LanguageGroup, UnknownGroup};
pub use registry::{resolve, LanguageCode};
