//! Text canonicalization for answer comparison.
//!
//! Comparison must be lenient on accents, casing, punctuation, and
//! whitespace while still testing actual phrasing: `"Não sei."` and
//! `"nao sei"` normalize identically.

use unicode_normalization::UnicodeNormalization;

/// Punctuation stripped before comparison.
const PUNCTUATION: &[char] = &[
    '"', '\'', '`', '.', ',', ';', ':', '!', '?', '(', ')', '-',
];

/// Canonicalize a raw string for comparison.
///
/// In order: lower-case, NFD decomposition with combining marks stripped,
/// punctuation removal, whitespace collapse, trim. Pure and total; empty
/// input yields the empty string.
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase()
        .nfd()
        .filter(|c| !unicode_normalization::char::is_combining_mark(*c))
        .filter(|c| !PUNCTUATION.contains(c))
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lowercases_and_trims() {
        assert_eq!(normalize("  Hello World  "), "hello world");
    }

    #[test]
    fn strips_diacritics() {
        assert_eq!(normalize("não é fácil"), "nao e facil");
        assert_eq!(normalize("ATENÇÃO"), "atencao");
    }

    #[test]
    fn strips_punctuation() {
        assert_eq!(normalize("Eu vou, agora!"), "eu vou agora");
        assert_eq!(normalize("\"quoted\" (aside) - dash; colon: done?"), "quoted aside dash colon done");
    }

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(normalize("a  \t b\n\nc"), "a b c");
    }

    #[test]
    fn empty_input_yields_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("?!."), "");
    }

    #[test]
    fn idempotent() {
        for s in ["Olá, tudo bem?", "  MIXED   Case  ", "já normalizado", ""] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once);
        }
    }
}
