//! stage/transliterate.rs – **Any script → ASCII (lossy)**
//! * Delegates to `unidecode`: per-char, context free
//! * One code point may become zero or more ASCII chars (`影` → `Ying `)
//! * Unmappable chars are dropped, never rejected
//! * Zero-copy when the text is already ASCII
use crate::{context::Context, stage::Stage};
use std::borrow::Cow;
use unidecode::unidecode;

/// Public stage – zero-sized, stateless.
pub struct Transliterate;

impl Stage for Transliterate {
    fn name(&self) -> &'static str {
        "transliterate"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context<'_>) -> bool {
        !text.is_ascii()
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context<'_>) -> Cow<'a, str> {
        if text.is_ascii() {
            return text;
        }
        Cow::Owned(unidecode(&text))
    }
}
