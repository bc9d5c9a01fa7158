//! Search normalization for free-text brand and product names.
//!
//! Turns raw names such as "Tag Heuer Monaco Cal.2" into canonical search keys,
//! either space-separated (`Mode::Standard`) or collapsed to `[a-z0-9]`
//! (`Mode::Alphanumeric`). Noise words are dropped, brand identifiers and model
//! codes are kept, and Latin-script accents are folded.

pub mod lexicon;
pub mod normalization;
pub mod pipeline;
pub mod tokenization;
pub mod types;

pub use pipeline::{brand_key, normalize, normalize_bytes};
pub use types::{BrandKey, Mode, ParseModeError};
