use brand_search::normalization::*;

#[test]
fn fold_case_lowercases_unicode() {
    assert_eq!(fold_case("ÉLÉGANTE Rolex"), "élégante rolex");
}

#[test]
fn strip_diacritics_folds_accents() {
    assert_eq!(strip_diacritics("élégante söhne"), "elegante sohne");
}

#[test]
fn strip_diacritics_handles_decomposed_input() {
    // e + combining acute
    assert_eq!(strip_diacritics("e\u{0301}"), "e");
}

#[test]
fn strip_diacritics_applies_compatibility_forms() {
    // NFKD turns the fi ligature into two letters
    assert_eq!(strip_diacritics("\u{FB01}ne"), "fine");
}

#[test]
fn strip_diacritics_keeps_sharp_s() {
    assert_eq!(strip_diacritics("straße"), "straße");
}

#[test]
fn collapse_abbreviations_letters_dot_digits() {
    assert_eq!(collapse_abbreviations("monaco cal.2"), "monaco cal2");
}

#[test]
fn collapse_abbreviations_initials() {
    assert_eq!(collapse_abbreviations("f.p. journe"), "fp journe");
}

#[test]
fn collapse_abbreviations_leaves_other_dots() {
    assert_eq!(collapse_abbreviations("a. lange"), "a. lange");
    assert_eq!(collapse_abbreviations("cal.2.3"), "cal2.3");
    assert_eq!(collapse_abbreviations("end."), "end.");
}

#[test]
fn collapse_abbreviations_all_matches() {
    assert_eq!(collapse_abbreviations("ref.5711 cal.324"), "ref5711 cal324");
}

#[test]
fn collapse_abbreviations_ignores_uppercase() {
    // runs after case folding, so uppercase is not expected here
    assert_eq!(collapse_abbreviations("CAL.2"), "CAL.2");
}

#[test]
fn punctuation_becomes_space() {
    assert_eq!(punctuation_to_space("a, b&c-d."), "a  b c d ");
}

#[test]
fn punctuation_keeps_word_chars() {
    assert_eq!(punctuation_to_space("snake_case 42 é"), "snake_case 42 é");
}

#[test]
fn punctuation_includes_spacing_marks_and_connectors() {
    // Thai vowel sign with combining class 0
    assert_eq!(punctuation_to_space("a\u{0E31}b"), "a b");
    // undertie is connector punctuation, unlike '_'
    assert_eq!(punctuation_to_space("a\u{203F}b_c"), "a b_c");
}

#[test]
fn collapse_whitespace_trims_and_collapses() {
    assert_eq!(collapse_whitespace("  tag \t\n heuer  "), "tag heuer");
}

#[test]
fn collapse_whitespace_empty() {
    assert_eq!(collapse_whitespace(""), "");
    assert_eq!(collapse_whitespace(" \t "), "");
}
