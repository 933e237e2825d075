// src/context.rs
// Everything a stage may read during one slug call. Cheap to copy: a language
// constant, its static table and a borrowed configuration.

use crate::{
    config::SlugConfig,
    lang::{DEFAULT_LANG, Lang, LangEntry, LocaleBehavior},
};

/// Runtime context passed to every stage.
///
/// - `lang`: the substitution language (already resolved, never unknown)
/// - `lang_entry`: the static symbol table of `lang`
/// - `config`: custom substitutions and the length limit for this call
#[derive(Debug, Clone, Copy)]
pub struct Context<'c> {
    pub lang: Lang,
    pub lang_entry: &'static LangEntry,
    pub config: &'c SlugConfig,
}

static EMPTY_CONFIG: SlugConfig = SlugConfig::new();

impl Default for Context<'static> {
    #[inline(always)]
    fn default() -> Self {
        Self::new(DEFAULT_LANG, &EMPTY_CONFIG)
    }
}

impl<'c> Context<'c> {
    #[inline(always)]
    pub fn new(lang: Lang, config: &'c SlugConfig) -> Self {
        Self {
            lang,
            lang_entry: lang.entry(),
            config,
        }
    }

    /// Context with no custom substitutions and no length limit.
    #[inline(always)]
    pub fn for_lang(lang: Lang) -> Context<'static> {
        Context::new(lang, &EMPTY_CONFIG)
    }
}
