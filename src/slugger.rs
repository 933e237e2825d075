use crate::{
    config::{SlugConfig, Substitution},
    context::Context,
    lang::{DEFAULT_LANG, Lang},
    process::{Process, SLUG_PROCESS},
};
use std::borrow::Cow;

/// A slug maker bound to one language and one configuration.
///
/// Unlike [`crate::make`] it never touches the process-wide configuration, so
/// any number of `Slugger`s can be used from any number of threads.
#[derive(Debug, Clone)]
pub struct Slugger {
    lang: Lang,
    config: SlugConfig,
}

impl Default for Slugger {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Slugger {
    pub fn builder() -> SluggerBuilder {
        SluggerBuilder::default()
    }

    pub fn make(&self, text: &str) -> String {
        self.make_cow(text).into_owned()
    }

    /// Like [`Self::make`], but borrows `text` when it is already a slug that
    /// the configuration leaves alone.
    pub fn make_cow<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let ctx = Context::new(self.lang, &self.config);
        SLUG_PROCESS.process(Cow::Borrowed(text), &ctx)
    }

    pub fn lang(&self) -> Lang {
        self.lang
    }

    pub fn config(&self) -> &SlugConfig {
        &self.config
    }
}

pub struct SluggerBuilder {
    lang: Lang,
    config: SlugConfig,
}

impl Default for SluggerBuilder {
    fn default() -> Self {
        Self {
            lang: DEFAULT_LANG,
            config: SlugConfig::new(),
        }
    }
}

impl SluggerBuilder {
    pub fn lang(mut self, lang: Lang) -> Self {
        self.lang = lang;
        self
    }

    /// Language by code; unknown codes fall back to English.
    pub fn lang_code(self, code: &str) -> Self {
        self.lang(Lang::resolve(code))
    }

    pub fn config(mut self, config: SlugConfig) -> Self {
        self.config = config;
        self
    }

    pub fn rune_sub(mut self, from: char, to: impl Into<String>) -> Self {
        self.config = self.config.rune_sub(from, to);
        self
    }

    pub fn sub(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.config = self.config.sub(from, to);
        self
    }

    pub fn sub_ordered(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.config = self.config.sub_ordered(from, to);
        self
    }

    pub fn sub_ordered_list(mut self, list: impl IntoIterator<Item = Substitution>) -> Self {
        self.config.sub_ordered.extend(list);
        self
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.config = self.config.max_length(max_length);
        self
    }

    pub fn build(self) -> Slugger {
        Slugger {
            lang: self.lang,
            config: self.config,
        }
    }
}
