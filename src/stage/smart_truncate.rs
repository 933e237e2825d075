use crate::{context::Context, stage::Stage};
use memchr::memchr_iter;
use std::{borrow::Cow, iter};

/// Word-boundary-aware length limit, driven by `SlugConfig::max_length`.
///
/// The slug is cut after the last whole `_`-separated word that fits. If the
/// first word alone is too long it is cut hard at `max_length` bytes.
pub struct SmartTruncate;

/// Shorten `text` to roughly `max_length` bytes. `0` means no limit.
///
/// Words are the pieces of `text` split after each `_`, separator included.
/// A word is taken while `taken + word.len() - 1 <= max_length`; the `- 1`
/// accounts for the trailing `_` that is trimmed afterwards. The last word has
/// no trailing `_`, so it may end one byte past the limit.
pub fn smart_truncate(text: &str, max_length: usize) -> &str {
    if max_length == 0 || text.len() < max_length {
        return text;
    }

    let bytes = text.as_bytes();
    let mut word_ends = memchr_iter(b'_', bytes)
        .map(|i| i + 1)
        .chain(iter::once(text.len()))
        .peekable();

    let first_end = word_ends.peek().copied().unwrap_or(text.len());
    if first_end > max_length {
        let mut cut = max_length;
        while !text.is_char_boundary(cut) {
            cut -= 1;
        }
        return &text[..cut];
    }

    let mut taken = 0;
    for end in word_ends {
        let word_len = end - taken;
        if taken + word_len > max_length + 1 {
            break;
        }
        taken = end;
    }
    text[..taken].trim_matches('_')
}

impl Stage for SmartTruncate {
    fn name(&self) -> &'static str {
        "smart_truncate"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, ctx: &Context<'_>) -> bool {
        let max = ctx.config.max_length;
        max > 0 && text.len() >= max
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context<'_>) -> Cow<'a, str> {
        let max = ctx.config.max_length;
        let before = text.len();
        let out = crate::stage::rebind(text, |s| Cow::Borrowed(smart_truncate(s, max)));
        if out.len() != before {
            tracing::debug!(max_length = max, before, after = out.len(), "slug truncated");
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ENG, SlugConfig, testing::stage_contract::StageTestConfig};

    impl StageTestConfig for SmartTruncate {
        fn config() -> SlugConfig {
            SlugConfig::new().max_length(10)
        }

        fn exact_needs_apply() -> bool {
            false
        }

        fn samples() -> &'static [&'static str] {
            &["short", "hello_world_again", "supercalifragilistic", "a_b_c_d_e_f_g"]
        }

        fn should_transform() -> &'static [(&'static str, &'static str)] {
            &[
                ("hello_world_again", "hello"),
                ("supercalifragilistic", "supercalif"),
                ("a_b_c_d_e_f_g", "a_b_c_d_e"),
            ]
        }
    }

    #[test]
    fn contract() {
        crate::assert_stage_contract!(SmartTruncate);
    }

    #[test]
    fn zero_disables() {
        assert_eq!(smart_truncate("a_very_long_slug", 0), "a_very_long_slug");
    }

    #[test]
    fn shorter_than_limit_is_untouched() {
        assert_eq!(smart_truncate("abc_def", 8), "abc_def");
    }

    #[test]
    fn exact_length_keeps_every_word() {
        assert_eq!(smart_truncate("abc_def", 7), "abc_def");
    }

    #[test]
    fn cuts_after_whole_words() {
        assert_eq!(smart_truncate("hello_world_foo_bar", 11), "hello_world");
        assert_eq!(smart_truncate("hello_world_foo_bar", 12), "hello_world");
        assert_eq!(smart_truncate("hello_world_foo_bar", 15), "hello_world_foo");
    }

    #[test]
    fn long_first_word_is_hard_cut() {
        assert_eq!(smart_truncate("abcdefghij_k", 4), "abcd");
        assert_eq!(smart_truncate("abcdefghij", 9), "abcdefghi");
    }

    #[test]
    fn first_word_exactly_at_limit() {
        // "abcd_" is 5 bytes, so the hard cut applies; it lands before the `_`
        assert_eq!(smart_truncate("abcd_efgh", 4), "abcd");
    }

    #[test]
    fn last_word_may_overshoot_by_one() {
        assert_eq!(smart_truncate("abcdefg_h", 8), "abcdefg_h");
    }

    #[test]
    fn non_ascii_cut_lands_on_char_boundary() {
        assert_eq!(smart_truncate("ééé", 3), "é");
    }

    #[test]
    fn stage_reads_limit_from_config() {
        let cfg = SlugConfig::new().max_length(5);
        let ctx = Context::new(ENG, &cfg);
        assert!(SmartTruncate.needs_apply("hello_world", &ctx));
        assert!(!SmartTruncate.needs_apply("hi", &ctx));
        assert_eq!(
            SmartTruncate.apply(Cow::Owned("hello_world".into()), &ctx),
            "hello"
        );
        assert!(!SmartTruncate.needs_apply("hello_world", &Context::default()));
    }
}
