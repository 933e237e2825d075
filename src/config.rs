//! Per-call slug configuration and the process-wide default.
//!
//! [`SlugConfig`] holds the caller's custom substitutions and the length limit.
//! It can be passed explicitly ([`crate::make_with`], [`crate::Slugger`]) or
//! installed process-wide, where [`crate::make`] and [`crate::make_lang`]
//! pick it up. A call reads the global once, at its start, under a read lock.

use std::collections::BTreeMap;
use std::sync::{LazyLock, PoisonError, RwLock, RwLockReadGuard};

/// One `input → output` pair of an ordered substitution list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Substitution {
    pub input: String,
    pub output: String,
}

impl Substitution {
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }
}

impl<I: Into<String>, O: Into<String>> From<(I, O)> for Substitution {
    fn from((input, output): (I, O)) -> Self {
        Self::new(input, output)
    }
}

/// Custom substitutions and length limit applied by the slug pipeline.
///
/// Order of application inside the pipeline: `rune_sub`, then `sub_ordered`,
/// then `sub` (keys in ascending byte order), all before the language table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlugConfig {
    /// Single char → replacement, one pass.
    pub rune_sub: BTreeMap<char, String>,
    /// Substring → replacement, applied key by key in sorted order.
    pub sub: BTreeMap<String, String>,
    /// Substring → replacement, applied in list order.
    pub sub_ordered: Vec<Substitution>,
    /// Maximum slug length in bytes. `0` disables truncation.
    pub max_length: usize,
}

impl SlugConfig {
    pub const fn new() -> Self {
        Self {
            rune_sub: BTreeMap::new(),
            sub: BTreeMap::new(),
            sub_ordered: Vec::new(),
            max_length: 0,
        }
    }

    pub fn rune_sub(mut self, from: char, to: impl Into<String>) -> Self {
        self.rune_sub.insert(from, to.into());
        self
    }

    pub fn sub(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.sub.insert(from.into(), to.into());
        self
    }

    pub fn sub_ordered(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.sub_ordered.push(Substitution::new(from, to));
        self
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// True when the pipeline would behave exactly like the built-in defaults.
    pub fn is_default(&self) -> bool {
        self.rune_sub.is_empty()
            && self.sub.is_empty()
            && self.sub_ordered.is_empty()
            && self.max_length == 0
    }

    #[inline]
    pub fn truncates(&self) -> bool {
        self.max_length > 0
    }
}

static GLOBAL: LazyLock<RwLock<SlugConfig>> = LazyLock::new(|| RwLock::new(SlugConfig::new()));

/// Snapshot of the process-wide configuration.
pub fn global() -> SlugConfig {
    read_global().clone()
}

/// Replace the process-wide configuration.
pub fn set_global(config: SlugConfig) {
    *GLOBAL.write().unwrap_or_else(PoisonError::into_inner) = config;
}

/// Edit a copy of the process-wide configuration, then install it.
///
/// No lock is held while `f` runs, so `f` may call [`crate::make`] and
/// friends (they still see the old configuration). Concurrent updates do not
/// merge: the last one to finish wins.
pub fn update_global(f: impl FnOnce(&mut SlugConfig)) {
    let mut next = global();
    f(&mut next);
    set_global(next);
}

/// Drop every custom substitution and the length limit.
pub fn reset_global() {
    set_global(SlugConfig::new());
}

// A panic while holding the lock cannot leave the config half-written in a way
// that matters here, so poisoning is ignored.
pub(crate) fn read_global() -> RwLockReadGuard<'static, SlugConfig> {
    GLOBAL.read().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::lock_global;

    #[test]
    fn builder_collects_everything() {
        let cfg = SlugConfig::new()
            .rune_sub('§', "section")
            .sub("water", "sand")
            .sub_ordered("a", "b")
            .sub_ordered("b", "c")
            .max_length(12);
        assert_eq!(cfg.rune_sub.get(&'§').map(String::as_str), Some("section"));
        assert_eq!(cfg.sub.get("water").map(String::as_str), Some("sand"));
        assert_eq!(
            cfg.sub_ordered,
            vec![Substitution::new("a", "b"), ("b", "c").into()]
        );
        assert!(cfg.truncates());
        assert!(!cfg.is_default());
        assert!(SlugConfig::default().is_default());
    }

    #[test]
    fn global_set_update_reset() {
        let _guard = lock_global();
        set_global(SlugConfig::new().max_length(5));
        assert_eq!(global().max_length, 5);

        update_global(|cfg| {
            cfg.sub.insert("x".into(), "y".into());
        });
        let snapshot = global();
        assert_eq!(snapshot.max_length, 5);
        assert_eq!(snapshot.sub.len(), 1);

        reset_global();
        assert!(global().is_default());
    }

    #[test]
    fn update_closure_may_call_back_into_the_crate() {
        let _guard = lock_global();
        reset_global();
        update_global(|cfg| {
            // Reads the installed (old) configuration without blocking
            assert_eq!(crate::make("water is hot"), "water_is_hot");
            cfg.sub.insert("water".into(), "sand".into());
        });
        assert_eq!(crate::make_lang("water is hot", "en"), "sand_is_hot");
        reset_global();
    }
}
