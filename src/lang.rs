pub(crate) mod behaviour;
pub mod data;

use crate::ENG;
use std::{fmt, str::FromStr};
use thiserror::Error;

pub use behaviour::LocaleBehavior;
pub use data::{DEFAULT_SYMBOLS, LANG_TABLE, all_langs, from_code};

/// A built-in substitution language.
///
/// Only the constants exported from [`data`] exist; there is no way to build a
/// `Lang` for an unknown code outside this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lang {
    pub(crate) code: &'static str,
    pub(crate) name: &'static str,
}

impl Lang {
    #[inline(always)]
    pub const fn code(&self) -> &'static str {
        self.code
    }
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Lenient lookup used by the slug pipeline: unknown codes become English.
    pub fn resolve(code: &str) -> Lang {
        from_code(code).unwrap_or_else(|| {
            tracing::debug!(code, fallback = DEFAULT_LANG.code, "unknown language, falling back");
            DEFAULT_LANG
        })
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LangError {
    #[error("unknown language code `{0}`")]
    Unknown(String),
}

impl FromStr for Lang {
    type Err = LangError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        from_code(s).ok_or_else(|| LangError::Unknown(s.to_owned()))
    }
}

pub const DEFAULT_LANG: Lang = ENG;

/// Static per-language data. `symbols` holds the language's own entries
/// merged with every [`DEFAULT_SYMBOLS`] entry.
#[derive(Clone, Copy, Debug)]
pub struct LangEntry {
    pub symbols: &'static phf::Map<char, &'static str>,
}

impl LangEntry {
    #[inline]
    pub fn symbol(&self, c: char) -> Option<&'static str> {
        self.symbols.get(&c).copied()
    }
}
