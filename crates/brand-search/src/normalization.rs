use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::char::canonical_combining_class;
use unicode_normalization::UnicodeNormalization;

/// Dotted abbreviations whose dots are dropped before punctuation handling:
/// letters + dot + digits ("cal.2") or two dotted initials ("f.p.").
static ABBREVIATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-z]+\.[0-9]+|[a-z]\.[a-z]\.").expect("valid abbreviation regex")
});

/// Anything that is not a letter, number, underscore or whitespace.
/// Marks and connector punctuation other than '_' count as punctuation.
static PUNCTUATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}_\s]").expect("valid punctuation regex"));

/// Locale-independent Unicode lowercase.
pub fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

/// Strip accents: NFKD, then drop every char with a non-zero combining class.
pub fn strip_diacritics(text: &str) -> String {
    text.nfkd()
        .filter(|c| canonical_combining_class(*c) == 0)
        .collect()
}

/// Remove the dots inside dotted abbreviations ("cal.2" -> "cal2", "f.p." -> "fp").
/// Dots outside a match are left for the punctuation stage.
pub fn collapse_abbreviations(text: &str) -> String {
    ABBREVIATION_RE
        .replace_all(text, |caps: &regex::Captures| caps[0].replace('.', ""))
        .into_owned()
}

/// Replace every non-word, non-whitespace char with a single space.
pub fn punctuation_to_space(text: &str) -> String {
    PUNCTUATION_RE.replace_all(text, " ").into_owned()
}

/// Collapse whitespace runs to one U+0020 and trim both ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
