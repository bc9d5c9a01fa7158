use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::lexicon::should_keep;

/// Model codes: optional letters, at least one digit, then letters or digits ("535", "t2", "007b").
static MODEL_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[a-z]*\d+[a-z0-9]*\b").expect("valid model number regex"));

/// Collect every model-number word found in `text`.
pub fn model_numbers(text: &str) -> HashSet<&str> {
    MODEL_NUMBER_RE.find_iter(text).map(|m| m.as_str()).collect()
}

/// Split on whitespace and keep the tokens that are not stop words, are preserved
/// terms, or are model numbers. Kept tokens are joined with single spaces.
///
/// Lexicon lookups use the lowercased token, since NFKD can still yield capitals
/// (U+212D becomes 'C'). The kept token itself is left as is.
pub fn filter_tokens(text: &str) -> String {
    let models = model_numbers(text);
    text.split_whitespace()
        .filter(|word| should_keep(&word.to_lowercase(), models.contains(word)))
        .collect::<Vec<_>>()
        .join(" ")
}
