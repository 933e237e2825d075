//! Core pipeline stage abstraction.
//!
//! A slug is produced by running a fixed list of [`Stage`]s over a
//! `Cow<str>`. Each stage gets a cheap pre-check ([`Stage::needs_apply`]) so
//! that text which needs no work passes through without allocating.
//!
//! Stages never fail: unmappable input is dropped or turned into a separator.

pub mod custom_sub;
pub mod language_symbols;
pub mod lower_case;
pub mod normalize_separators;
pub mod smart_truncate;
pub mod transliterate;
pub mod trim_whitespace;

use crate::context::Context;
use std::borrow::Cow;

/// A single slug transformation step.
pub trait Stage: Send + Sync {
    /// Human-readable name, used in trace output.
    fn name(&self) -> &'static str;

    /// Fast pre-check. Returning `false` skips the stage; it must only do so
    /// when `apply` would return the text unchanged.
    fn needs_apply(&self, text: &str, ctx: &Context<'_>) -> bool;

    /// Allocation-aware transformation. Must always be correct, even when
    /// `needs_apply` would have returned `false`.
    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context<'_>) -> Cow<'a, str>;
}

/// Run a `&str → Cow<str>` transform on an owned-or-borrowed input, keeping
/// the original buffer when the transform returns it whole.
#[inline]
pub(crate) fn rebind<'a>(
    text: Cow<'a, str>,
    f: impl for<'b> FnOnce(&'b str) -> Cow<'b, str>,
) -> Cow<'a, str> {
    match text {
        Cow::Borrowed(s) => f(s),
        Cow::Owned(s) => {
            let replaced = match f(&s) {
                Cow::Borrowed(b) if b.len() == s.len() => None,
                Cow::Borrowed(b) => Some(b.to_owned()),
                Cow::Owned(o) => Some(o),
            };
            Cow::Owned(replaced.unwrap_or(s))
        }
    }
}
