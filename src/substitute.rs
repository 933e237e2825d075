//! The three substitution strategies.
//!
//! They differ in ordering and re-matching, so they are kept as separate
//! functions:
//!
//! * [`substitute_rune`] – one left-to-right pass, char → string. Output is
//!   never re-examined.
//! * [`substitute`] – substring → string, one global replace per key, keys in
//!   ascending byte order. A later key may match text produced by an earlier
//!   one.
//! * [`substitute_ordered`] – like [`substitute`] but in caller order.
//!
//! All return `Cow::Borrowed` when nothing was replaced.

use crate::{config::Substitution, lang::LangEntry};
use memchr::memmem;
use smallvec::SmallVec;
use std::{
    borrow::Cow,
    collections::{BTreeMap, HashMap},
    hash::BuildHasher,
};

/// Something that maps a single char to a replacement string.
pub trait RuneTable {
    fn lookup(&self, c: char) -> Option<&str>;

    fn is_empty(&self) -> bool;
}

impl<S: AsRef<str>, H: BuildHasher> RuneTable for HashMap<char, S, H> {
    #[inline]
    fn lookup(&self, c: char) -> Option<&str> {
        self.get(&c).map(AsRef::as_ref)
    }
    fn is_empty(&self) -> bool {
        HashMap::is_empty(self)
    }
}

impl<S: AsRef<str>> RuneTable for BTreeMap<char, S> {
    #[inline]
    fn lookup(&self, c: char) -> Option<&str> {
        self.get(&c).map(AsRef::as_ref)
    }
    fn is_empty(&self) -> bool {
        BTreeMap::is_empty(self)
    }
}

impl RuneTable for phf::Map<char, &'static str> {
    #[inline]
    fn lookup(&self, c: char) -> Option<&str> {
        self.get(&c).copied()
    }
    fn is_empty(&self) -> bool {
        phf::Map::is_empty(self)
    }
}

/// Language symbols layered over the default set.
impl RuneTable for LangEntry {
    #[inline]
    fn lookup(&self, c: char) -> Option<&str> {
        self.symbol(c)
    }
    fn is_empty(&self) -> bool {
        false
    }
}

/// Replace every char found in `table` by its mapped string. One pass.
pub fn substitute_rune<'a, T: RuneTable + ?Sized>(text: &'a str, table: &T) -> Cow<'a, str> {
    if table.is_empty() {
        return Cow::Borrowed(text);
    }
    let Some(first) = text
        .char_indices()
        .find_map(|(i, c)| table.lookup(c).map(|_| i))
    else {
        return Cow::Borrowed(text);
    };

    let mut out = String::with_capacity(text.len() + 8);
    out.push_str(&text[..first]);
    for c in text[first..].chars() {
        match table.lookup(c) {
            Some(to) => out.push_str(to),
            None => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Replace every key of `table` by its value, keys applied in ascending
/// order, each as a global replace over the current buffer.
///
/// Accepts anything iterable as `(key, value)` pairs: `&HashMap`,
/// `&BTreeMap`, slices of tuples.
pub fn substitute<'a, I, K, V>(text: &'a str, table: I) -> Cow<'a, str>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut pairs: SmallVec<[(K, V); 8]> = table.into_iter().collect();
    pairs.sort_by(|a, b| a.0.as_ref().cmp(b.0.as_ref()));

    pairs
        .iter()
        .fold(Cow::Borrowed(text), |buf, (from, to)| {
            replace_all(buf, from.as_ref(), to.as_ref())
        })
}

/// Apply each pair in list order, each as a global replace.
pub fn substitute_ordered<'a>(text: &'a str, list: &[Substitution]) -> Cow<'a, str> {
    list.iter().fold(Cow::Borrowed(text), |buf, s| {
        replace_all(buf, &s.input, &s.output)
    })
}

/// `str::replace`, but keeps `buf` untouched (and borrowed) when `from` does
/// not occur. An empty `from` matches at every char boundary.
#[inline]
pub(crate) fn replace_all<'a>(buf: Cow<'a, str>, from: &str, to: &str) -> Cow<'a, str> {
    if !from.is_empty() && memmem::find(buf.as_bytes(), from.as_bytes()).is_none() {
        return buf;
    }
    Cow::Owned(buf.replace(from, to))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DEU, lang::LocaleBehavior};

    #[test]
    fn rune_single_pass() {
        let table = HashMap::from([('a', "b".to_string()), ('b', "c".to_string())]);
        // `a` becomes `b`, and that `b` is not revisited
        assert_eq!(substitute_rune("ab", &table), "bc");
    }

    #[test]
    fn rune_expands_and_deletes() {
        let table = BTreeMap::from([('&', "and"), ('"', "")]);
        assert_eq!(substitute_rune("\"a & b\"", &table), "a and b");
    }

    #[test]
    fn rune_zero_copy_without_matches() {
        let table = HashMap::from([('x', "y")]);
        let out = substitute_rune("hello", &table);
        assert!(matches!(out, Cow::Borrowed("hello")));
    }

    #[test]
    fn rune_with_language_entry() {
        assert_eq!(substitute_rune("Tom & Jerry", DEU.entry()), "Tom und Jerry");
        assert_eq!(substitute_rune("a—b", DEU.entry()), "a_b");
    }

    #[test]
    fn unordered_applies_keys_sorted() {
        // "a" runs before "b": a→b, then every b (old and new) → c
        let table = HashMap::from([("b", "c"), ("a", "b")]);
        assert_eq!(substitute("ab", &table), "cc");
    }

    #[test]
    fn unordered_cascades_only_forward() {
        // "b" runs after "a", so the `a` produced by "b" is never rewritten
        let table = BTreeMap::from([("a", "x"), ("b", "a")]);
        assert_eq!(substitute("ab", &table), "xa");
    }

    #[test]
    fn unordered_multichar_keys() {
        let table = [("water", "sand"), ("hot", "cold")];
        assert_eq!(substitute("water is hot", table), "sand is cold");
    }

    #[test]
    fn unordered_empty_table_is_noop() {
        let table: HashMap<String, String> = HashMap::new();
        assert!(matches!(substitute("text", &table), Cow::Borrowed("text")));
    }

    #[test]
    fn ordered_respects_list_order() {
        let list = vec![Substitution::new("b", "c"), Substitution::new("a", "b")];
        // reverse of the sorted order: b→c first, then a→b
        assert_eq!(substitute_ordered("ab", &list), "bc");
    }

    #[test]
    fn ordered_zero_copy_without_matches() {
        let list = vec![Substitution::new("zz", "y")];
        assert!(matches!(substitute_ordered("abc", &list), Cow::Borrowed("abc")));
    }

    #[test]
    fn empty_pattern_matches_every_boundary() {
        let list = vec![Substitution::new("", "-")];
        assert_eq!(substitute_ordered("ab", &list), "-a-b-");
    }
}
