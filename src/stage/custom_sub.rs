//! Caller-supplied substitutions, read from [`SlugConfig`](crate::SlugConfig).
//!
//! Three stages, one per table, always run in this order inside the pipeline:
//! [`CustomRunes`] → [`CustomOrdered`] → [`CustomSubstitutions`].
use crate::{
    context::Context,
    stage::{Stage, rebind},
    substitute::{substitute, substitute_ordered, substitute_rune},
};
use std::borrow::Cow;

/// `SlugConfig::rune_sub`, one pass per char.
pub struct CustomRunes;

impl Stage for CustomRunes {
    fn name(&self) -> &'static str {
        "custom_runes"
    }

    #[inline]
    fn needs_apply(&self, text: &str, ctx: &Context<'_>) -> bool {
        let table = &ctx.config.rune_sub;
        !table.is_empty() && text.chars().any(|c| table.contains_key(&c))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context<'_>) -> Cow<'a, str> {
        rebind(text, |s| substitute_rune(s, &ctx.config.rune_sub))
    }
}

/// `SlugConfig::sub_ordered`, pairs applied in list order.
pub struct CustomOrdered;

impl Stage for CustomOrdered {
    fn name(&self) -> &'static str {
        "custom_ordered"
    }

    #[inline]
    fn needs_apply(&self, _text: &str, ctx: &Context<'_>) -> bool {
        // An earlier pair may create a match for a later one, so a
        // per-pattern scan of the input would not be enough.
        !ctx.config.sub_ordered.is_empty()
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context<'_>) -> Cow<'a, str> {
        rebind(text, |s| substitute_ordered(s, &ctx.config.sub_ordered))
    }
}

/// `SlugConfig::sub`, keys applied in ascending order.
pub struct CustomSubstitutions;

impl Stage for CustomSubstitutions {
    fn name(&self) -> &'static str {
        "custom_sub"
    }

    #[inline]
    fn needs_apply(&self, _text: &str, ctx: &Context<'_>) -> bool {
        !ctx.config.sub.is_empty()
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context<'_>) -> Cow<'a, str> {
        rebind(text, |s| substitute(s, &ctx.config.sub))
    }
}
