use crate::lang::{Lang, LangEntry, data::entry_for};

/// ---------------------------------------------------------------------------
/// LocaleBehavior – symbol helpers used by the language stage
/// ---------------------------------------------------------------------------
pub trait LocaleBehavior {
    fn entry(&self) -> &'static LangEntry;

    /// Replacement for a single char, if this language (or the default set)
    /// defines one.
    #[inline(always)]
    fn symbol(&self, c: char) -> Option<&'static str> {
        self.entry().symbol(c)
    }

    #[inline]
    fn has_symbol(&self, c: char) -> bool {
        self.symbol(c).is_some()
    }

    /// Does `text` contain anything the language table would rewrite?
    #[inline]
    fn contains_symbols(&self, text: &str) -> bool {
        text.chars().any(|c| self.has_symbol(c))
    }

    /// (number of substituted chars, output length in bytes)
    fn count_symbol_bytes(&self, text: &str) -> (usize, usize) {
        text.chars().fold((0, 0), |(count, len), c| match self.symbol(c) {
            Some(to) => (count + 1, len + to.len()),
            None => (count, len + c.len_utf8()),
        })
    }
}

impl LocaleBehavior for Lang {
    #[inline(always)]
    fn entry(&self) -> &'static LangEntry {
        entry_for(*self)
    }
}
