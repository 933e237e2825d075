//! Turn free-form, multilingual labels into ASCII column names.
//!
//! ```
//! assert_eq!(cleancolumns::make("Hellö Wörld хелло ворлд"), "hello_world_khello_vorld");
//! assert_eq!(cleancolumns::make_lang("Diese & Dass", "de"), "diese_und_dass");
//! ```
//!
//! A slug only contains `[a-z0-9_-]`, never starts or ends with `_` and never
//! holds `__` or `--`. Nothing here fails: the worst case is an empty string.
//!
//! [`make`] and [`make_lang`] read the process-wide [`config`]. Use
//! [`make_with`] or a [`Slugger`] to pass configuration explicitly.

pub mod config;
pub mod context;
pub mod lang;
pub mod process;
pub mod slugger;
pub mod stage;
pub mod substitute;
#[doc(hidden)]
pub mod testing;

pub use config::{SlugConfig, Substitution};
pub use lang::Lang;
pub use lang::data::{DEU, ENG, POL, SPA};
pub use slugger::{Slugger, SluggerBuilder};
pub use stage::custom_sub::{CustomOrdered, CustomRunes, CustomSubstitutions};
pub use stage::language_symbols::LanguageSymbols;
pub use stage::lower_case::LowerCase;
pub use stage::normalize_separators::{NormalizeSeparators, normalize};
pub use stage::smart_truncate::{SmartTruncate, smart_truncate};
pub use stage::transliterate::Transliterate;
pub use stage::trim_whitespace::TrimWhitespace;
pub use substitute::{RuneTable, substitute, substitute_ordered, substitute_rune};

use context::Context;
use process::{Process, SLUG_PROCESS};
use std::borrow::Cow;

/// Slug for `text` with English symbols and the process-wide configuration.
pub fn make(text: &str) -> String {
    make_lang(text, lang::DEFAULT_LANG.code())
}

/// Slug for `text` using the symbols of `lang` (`"de"`, `"en"`, `"pl"`,
/// `"es"`; anything else means English) and the process-wide configuration.
pub fn make_lang(text: &str, lang: &str) -> String {
    let config = config::read_global();
    make_with(text, Lang::resolve(lang), &config)
}

/// Slug for `text` with an explicit language and configuration.
pub fn make_with(text: &str, lang: Lang, config: &SlugConfig) -> String {
    let ctx = Context::new(lang, config);
    SLUG_PROCESS.process(Cow::Borrowed(text), &ctx).into_owned()
}
