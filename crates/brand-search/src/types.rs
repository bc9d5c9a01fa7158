use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output variant of the normalizer.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Words separated by single spaces.
    #[default]
    Standard,
    /// Only `[a-z0-9]`, spaces removed.
    Alphanumeric,
}

impl Mode {
    /// Lenient lookup: any name other than "alphanumeric" takes the standard path.
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Standard => "standard",
            Mode::Alphanumeric => "alphanumeric",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(Mode::Standard),
            "alphanumeric" => Ok(Mode::Alphanumeric),
            other => Err(ParseModeError(other.to_string())),
        }
    }
}

/// Unknown mode name passed to `Mode::from_str`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseModeError(pub String);

impl fmt::Display for ParseModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown mode '{}' (expected 'standard' or 'alphanumeric')",
            self.0
        )
    }
}

impl std::error::Error for ParseModeError {}

/// Both search keys for one brand name.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BrandKey {
    pub standard: String,
    pub alphanumeric: String,
}
