//! Process abstraction.
//!
//! A [`Process`] runs text through stages in order. [`DynamicProcess`] keeps
//! its stages in a `SmallVec` of trait objects and skips every stage whose
//! `needs_apply` says there is nothing to do.
use crate::{
    context::Context,
    stage::{
        Stage,
        custom_sub::{CustomOrdered, CustomRunes, CustomSubstitutions},
        language_symbols::LanguageSymbols,
        lower_case::LowerCase,
        normalize_separators::NormalizeSeparators,
        smart_truncate::SmartTruncate,
        transliterate::Transliterate,
        trim_whitespace::TrimWhitespace,
    },
};
use smallvec::SmallVec;
use std::{borrow::Cow, sync::Arc, sync::LazyLock};

pub trait Process {
    fn process<'a>(&self, text: Cow<'a, str>, ctx: &Context<'_>) -> Cow<'a, str>;
}

pub struct EmptyProcess;
impl Process for EmptyProcess {
    #[inline(always)]
    fn process<'a>(&self, text: Cow<'a, str>, _ctx: &Context<'_>) -> Cow<'a, str> {
        text
    }
}

#[derive(Default)]
pub struct DynamicProcess {
    pub(crate) stages: SmallVec<[Arc<dyn Stage + Send + Sync>; 12]>,
}

impl DynamicProcess {
    #[inline(always)]
    pub fn new() -> Self {
        Self::default()
    }
    #[inline(always)]
    pub fn push<T: Stage + Send + Sync + 'static>(mut self, stage: T) -> Self {
        self.stages.push(Arc::new(stage));
        self
    }

    pub fn stage_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.stages.iter().map(|s| s.name())
    }

    /// The full slug pipeline, in order:
    /// trim → custom runes → custom ordered → custom unordered → language
    /// symbols → transliterate → lowercase → normalize → truncate.
    pub fn slug() -> Self {
        Self::new()
            .push(TrimWhitespace)
            .push(CustomRunes)
            .push(CustomOrdered)
            .push(CustomSubstitutions)
            .push(LanguageSymbols)
            .push(Transliterate)
            .push(LowerCase)
            .push(NormalizeSeparators)
            .push(SmartTruncate)
    }
}

impl Process for DynamicProcess {
    #[inline(always)]
    fn process<'a>(&self, mut text: Cow<'a, str>, ctx: &Context<'_>) -> Cow<'a, str> {
        for stage in &self.stages {
            if !stage.needs_apply(&text, ctx) {
                continue;
            }
            text = stage.apply(text, ctx);
            tracing::trace!(stage = stage.name(), len = text.len(), "stage applied");
        }
        text
    }
}

/// Shared instance of [`DynamicProcess::slug`]; stages are stateless.
pub(crate) static SLUG_PROCESS: LazyLock<DynamicProcess> = LazyLock::new(DynamicProcess::slug);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DEU, SlugConfig};

    #[test]
    fn slug_pipeline_order() {
        let names: Vec<_> = DynamicProcess::slug().stage_names().collect();
        assert_eq!(
            names,
            [
                "trim_ws",
                "custom_runes",
                "custom_ordered",
                "custom_sub",
                "language_symbols",
                "transliterate",
                "lowercase",
                "normalize_separators",
                "smart_truncate",
            ]
        );
    }

    #[test]
    fn empty_process_is_identity() {
        let out = EmptyProcess.process(Cow::Borrowed("As Is"), &Context::default());
        assert!(matches!(out, Cow::Borrowed("As Is")));
    }

    #[test]
    fn partial_process() {
        let p = DynamicProcess::new().push(TrimWhitespace).push(LowerCase);
        assert_eq!(p.process(Cow::Borrowed("  MiXeD "), &Context::default()), "mixed");
    }

    #[test]
    fn slug_process_borrows_finished_slugs() {
        let input = "already_a_slug";
        let out = SLUG_PROCESS.process(Cow::Borrowed(input), &Context::default());
        assert!(matches!(out, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }

    #[test]
    fn custom_runes_run_before_language_table() {
        // The custom table wins because it sees `&` first
        let cfg = SlugConfig::new().rune_sub('&', "plus");
        let ctx = Context::new(DEU, &cfg);
        assert_eq!(SLUG_PROCESS.process(Cow::Borrowed("A & B"), &ctx), "a_plus_b");
    }
}
