use crate::lang::{Lang, LangEntry};

use paste::paste;
use phf::{Map, phf_map};

/// Flat `phf` map from bracketed `char => str` groups. Keys must not repeat
/// across groups.
macro_rules! symbol_map {
    ( $( [ $($from:literal => $to:literal),* $(,)? ] )* ) => {
        phf_map! {
            $( $( $from => $to, )* )*
        }
    };
}

/// ---------------------------------------------------------------------------
///    Macro – generates constants, symbol maps and the lookup table
/// ---------------------------------------------------------------------------
macro_rules! define_languages {
    (
        default: $default:tt,
        $(
            $code:ident, $code_str:literal, $name:literal,
            symbols: $symbols:tt
        ),* $(,)?
    ) => {
        // Public `Lang` constants
        $(
            pub const $code: Lang = Lang { code: $code_str, name: $name };
        )*

        /// Typographic punctuation shared by every language.
        pub static DEFAULT_SYMBOLS: Map<char, &'static str> = symbol_map!($default);

        // Per-language static data modules: own symbols plus the default set
        $(
            paste! {
                mod [<$code:lower _data>] {
                    use super::*;

                    pub static SYMBOLS: Map<char, &'static str> = symbol_map!($symbols $default);
                }
            }
        )*

        // Global lookup table (public)
        paste! {
            pub static LANG_TABLE: Map<&'static str, LangEntry> = phf_map! {
                $(
                    $code_str => LangEntry {
                        symbols: &[<$code:lower _data>]::SYMBOLS,
                    }
                ),*
            };
        }

        static ALL_LANGS: &[Lang] = &[$($code),*];

        /// Exact, case-sensitive lookup of a language code.
        pub fn from_code(code: &str) -> Option<Lang> {
            match code {
                $(
                    $code_str => Some($code),
                )*
                _ => None,
            }
        }
    };
}

// ---------------------------------------------------------------------------
//    Language definitions (single source of truth)
//    Default keys and language keys must stay disjoint: both land in the
//    same `phf` map, which rejects duplicate keys at compile time.
// ---------------------------------------------------------------------------
define_languages! {
    default: [
        '"' => "",
        '\'' => "",
        '’' => "",
        '‒' => "_", // figure dash
        '–' => "_", // en dash
        '—' => "_", // em dash
        '―' => "_", // horizontal bar
    ],

    DEU, "de", "German",
        symbols: [ '&' => "und", '@' => "an" ],

    ENG, "en", "English",
        symbols: [ '&' => "and", '@' => "at" ],

    POL, "pl", "Polish",
        symbols: [ '&' => "i", '@' => "na" ],

    SPA, "es", "Spanish",
        symbols: [ '&' => "y", '@' => "en" ],
}

pub fn all_langs() -> &'static [Lang] {
    ALL_LANGS
}

/// Table entry for a language constant. Every constant is in the table;
/// English backs anything else.
#[inline]
pub(crate) fn entry_for(lang: Lang) -> &'static LangEntry {
    LANG_TABLE.get(lang.code).unwrap_or(&ENG_ENTRY)
}

static ENG_ENTRY: LangEntry = LangEntry {
    symbols: &eng_data::SYMBOLS,
};
