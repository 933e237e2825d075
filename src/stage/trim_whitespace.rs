use crate::{
    context::Context,
    stage::{Stage, rebind},
};
use std::borrow::Cow;

/// Strip leading and trailing Unicode whitespace.
pub struct TrimWhitespace;

impl Stage for TrimWhitespace {
    fn name(&self) -> &'static str {
        "trim_ws"
    }

    fn needs_apply(&self, text: &str, _: &Context<'_>) -> bool {
        // Fast path for ASCII
        let b = text.as_bytes();
        if b.first().is_some_and(u8::is_ascii_whitespace)
            || b.last().is_some_and(u8::is_ascii_whitespace)
        {
            return true;
        }

        // Fallback for Unicode whitespace
        text.chars().next().is_some_and(char::is_whitespace)
            || text.chars().next_back().is_some_and(char::is_whitespace)
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context<'_>) -> Cow<'a, str> {
        rebind(text, |s| Cow::Borrowed(s.trim()))
    }
}
