use crate::normalization::{
    collapse_abbreviations, collapse_whitespace, fold_case, punctuation_to_space, strip_diacritics,
};
use crate::tokenization::filter_tokens;
use crate::types::{BrandKey, Mode};

/// Normalize a brand name into a search key.
///
/// Stages, in order: lowercase, accent strip, abbreviation collapse
/// ("cal.2" -> "cal2"), punctuation to spaces, stop-word filtering,
/// whitespace collapse, then the mode-specific finish.
///
/// Absent or empty input yields an empty string without running any stage.
/// The result may also be empty when every token is filtered out.
pub fn normalize<'a>(brand: impl Into<Option<&'a str>>, mode: Mode) -> String {
    let brand = match brand.into() {
        Some(b) if !b.is_empty() => b,
        _ => return String::new(),
    };

    let folded = fold_case(brand);
    let stripped = strip_diacritics(&folded);
    let collapsed = collapse_abbreviations(&stripped);
    let spaced = punctuation_to_space(&collapsed);
    tracing::trace!(%folded, %stripped, %collapsed, %spaced, "brand text stages");

    let filtered = filter_tokens(&spaced);
    let result = finalize(&collapse_whitespace(&filtered), mode);
    tracing::debug!(input = brand, %mode, output = %result, "normalized brand");
    result
}

/// Normalize raw bytes. Anything that is not valid UTF-8 is not text and yields "".
pub fn normalize_bytes(bytes: &[u8], mode: Mode) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => normalize(text, mode),
        Err(e) => {
            tracing::debug!(error = %e, "rejecting non-utf8 brand input");
            String::new()
        }
    }
}

/// Mode-specific last step: `Alphanumeric` keeps only `[a-z0-9]`.
pub fn finalize(text: &str, mode: Mode) -> String {
    match mode {
        Mode::Standard => text.to_string(),
        Mode::Alphanumeric => text
            .chars()
            .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
            .collect(),
    }
}

/// Both search keys for one brand name.
pub fn brand_key<'a>(brand: impl Into<Option<&'a str>>) -> BrandKey {
    let brand = brand.into();
    BrandKey {
        standard: normalize(brand, Mode::Standard),
        alphanumeric: normalize(brand, Mode::Alphanumeric),
    }
}
