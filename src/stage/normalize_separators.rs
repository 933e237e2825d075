//! stage/normalize_separators.rs – **Fold everything into `[a-z0-9_-]`**
//!
//! Expects lowercased ASCII input (the output of `Transliterate` + `LowerCase`)
//! but is total over any `&str`. In one pass it:
//!
//! 1. turns every run of chars outside `[a-z0-9_-]` into one `_`
//! 2. turns every run of two or more `-` into `_` (a single `-` survives)
//! 3. collapses runs of `_`
//! 4. trims `_` at both ends
use crate::{context::Context, stage::Stage};
use std::borrow::Cow;

pub struct NormalizeSeparators;

#[inline(always)]
fn is_word_byte(b: u8) -> bool {
    b.is_ascii_lowercase() || b.is_ascii_digit()
}

/// Already in normal form: only allowed bytes, no `--`, no `__`, no `_` at
/// either end.
pub fn is_normalized(text: &str) -> bool {
    let b = text.as_bytes();
    if b.first() == Some(&b'_') || b.last() == Some(&b'_') {
        return false;
    }
    let mut prev = 0u8;
    for &c in b {
        let allowed = is_word_byte(c) || c == b'-' || c == b'_';
        if !allowed || (c == prev && (c == b'-' || c == b'_')) {
            return false;
        }
        prev = c;
    }
    true
}

/// Normalize a string into the slug alphabet. See the module docs.
pub fn normalize(text: &str) -> Cow<'_, str> {
    if is_normalized(text) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut dashes = 0usize;

    // `_` is only pushed after a non-separator, so runs collapse and nothing
    // leads; a trailing one is popped at the end.
    fn separator(out: &mut String) {
        if !out.is_empty() && !out.ends_with('_') {
            out.push('_');
        }
    }
    fn flush_dashes(out: &mut String, dashes: &mut usize) {
        match *dashes {
            0 => {}
            1 => out.push('-'),
            _ => separator(out),
        }
        *dashes = 0;
    }

    for c in text.chars() {
        if c == '-' {
            dashes += 1;
            continue;
        }
        flush_dashes(&mut out, &mut dashes);
        if c.is_ascii() && is_word_byte(c as u8) {
            out.push(c);
        } else {
            separator(&mut out);
        }
    }
    flush_dashes(&mut out, &mut dashes);

    if out.ends_with('_') {
        out.pop();
    }
    Cow::Owned(out)
}

impl Stage for NormalizeSeparators {
    fn name(&self) -> &'static str {
        "normalize_separators"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context<'_>) -> bool {
        !is_normalized(text)
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context<'_>) -> Cow<'a, str> {
        crate::stage::rebind(text, normalize)
    }
}
