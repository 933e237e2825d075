use crate::{
    context::Context,
    lang::LocaleBehavior,
    stage::{Stage, rebind},
};
use std::borrow::Cow;

/// Replace `&`, `@` and typographic punctuation using the context language.
///
/// The table is the language's own symbols layered over the shared default
/// set (quotes are dropped, long dashes become `_`).
pub struct LanguageSymbols;

impl Stage for LanguageSymbols {
    fn name(&self) -> &'static str {
        "language_symbols"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, ctx: &Context<'_>) -> bool {
        ctx.lang.contains_symbols(text)
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context<'_>) -> Cow<'a, str> {
        rebind(text, |s| {
            let (count, out_len) = ctx.lang.count_symbol_bytes(s);
            if count == 0 {
                return Cow::Borrowed(s); // Zero-copy when no actual replacements
            }

            let mut out = String::with_capacity(out_len);
            for c in s.chars() {
                match ctx.lang_entry.symbol(c) {
                    Some(to) => out.push_str(to),
                    None => out.push(c),
                }
            }
            Cow::Owned(out)
        })
    }
}
