/// Terms that carry no search value for a brand name.
pub const STOP_WORDS: &[&str] = &[
    "original", "collection", "design", "limited", "edition", "watches", "watch", "classic",
    "vintage", "series", "type", "professional", "chronograph", "chronographe", "automatic",
    "manufacture", "gmt", "quartz", "mechanical", "reference", "ref", "model", "special", "for",
    "the", "and", "of",
];

/// Brand and model identifiers that are always kept, even when listed in `STOP_WORDS`.
pub const PRESERVED_TERMS: &[&str] = &[
    "sport", "seamaster", "submariner", "navitimer", "royal", "oak", "datograph", "master",
    "control", "patrimony", "monaco", "nautilus", "daytona", "speedmaster", "calibre", "cal",
    "elegante", "laureato", "cosmograph", "moonwatch", "philippe", "patek", "breitling", "rolex",
    "omega", "tag", "heuer", "iwc", "piguet", "audemars", "lange", "sohne",
];

/// Check if a word is a stop word.
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

/// Check if a word is a preserved brand or model term.
pub fn is_preserved_term(word: &str) -> bool {
    PRESERVED_TERMS.contains(&word)
}

/// Keep rule for a single token. `is_model_number` is the caller's verdict for this token.
pub fn should_keep(word: &str, is_model_number: bool) -> bool {
    !is_stop_word(word) || is_preserved_term(word) || is_model_number
}
