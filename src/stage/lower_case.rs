use crate::{context::Context, stage::Stage};
use std::borrow::Cow;

/// ASCII lowercasing. Runs after transliteration, so the text is ASCII by then;
/// any non-ASCII char is left as is.
pub struct LowerCase;

impl Stage for LowerCase {
    fn name(&self) -> &'static str {
        "lowercase"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context<'_>) -> bool {
        text.bytes().any(|b| b.is_ascii_uppercase())
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context<'_>) -> Cow<'a, str> {
        if !self.needs_apply(&text, ctx) {
            return text;
        }
        let mut owned = text.into_owned();
        owned.make_ascii_lowercase();
        Cow::Owned(owned)
    }
}
