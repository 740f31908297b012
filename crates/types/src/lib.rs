//! Validated value types shared across the MediCare crates.

use std::borrow::Borrow;

/// Maximum byte length of a symptom token.
pub const MAX_SYMPTOM_LEN: usize = 50;

/// Errors that can occur when creating a [`Symptom`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SymptomError {
    /// The input was empty or contained only whitespace
    #[error("symptom cannot be empty")]
    Empty,
    /// The trimmed input exceeded [`MAX_SYMPTOM_LEN`] bytes
    #[error("symptom '{0}' exceeds {MAX_SYMPTOM_LEN} characters")]
    TooLong(String),
    /// The trimmed input contained a character outside `[A-Za-z0-9_-]`
    #[error("symptom '{0}' contains invalid characters (only alphanumeric, '_', '-' allowed)")]
    InvalidCharacter(String),
}

/// A symptom token such as `fever` or `dry_cough`.
///
/// Tokens are case-sensitive and otherwise opaque. Construction trims surrounding whitespace
/// and restricts the token to a conservative ASCII set, so a `Symptom` can never smuggle
/// query syntax or control characters into whatever layer stores it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symptom(String);

impl Symptom {
    /// Creates a new `Symptom` from the given input.
    ///
    /// # Errors
    ///
    /// Returns [`SymptomError`] if the trimmed input is empty, too long, or contains
    /// characters other than ASCII alphanumerics, `_` and `-`.
    pub fn new(input: impl AsRef<str>) -> Result<Self, SymptomError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(SymptomError::Empty);
        }
        if trimmed.len() > MAX_SYMPTOM_LEN {
            return Err(SymptomError::TooLong(trimmed.to_owned()));
        }

        let ok = trimmed
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'-'));
        if !ok {
            return Err(SymptomError::InvalidCharacter(trimmed.to_owned()));
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the symptom, returning the owned token.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Symptom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Symptom {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Symptom {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for Symptom {
    type Err = SymptomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl serde::Serialize for Symptom {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for Symptom {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Symptom::new(&s).map_err(serde::de::Error::custom)
    }
}
