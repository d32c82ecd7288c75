#![deny(unsafe_code)]

use std::fmt;

use crate::NdcError;

/// A validated NDC digit string.
///
/// Holds exactly 10 or 11 ASCII digits with no separators. Construction is
/// the only place the invariant is checked; everything downstream may index
/// into the digits freely.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NdcCode(String);

impl NdcCode {
    /// Build a code from an already-stripped digit string.
    ///
    /// Rejects any non-digit character before checking length, so a caller
    /// that forgot to strip separators gets the more specific error.
    pub fn new(digits: impl Into<String>) -> Result<Self, NdcError> {
        let digits = digits.into();
        if let Some((position, character)) = digits
            .chars()
            .enumerate()
            .find(|(_, ch)| !ch.is_ascii_digit())
        {
            return Err(NdcError::InvalidCharacter {
                character,
                position,
            });
        }
        if digits.len() != 10 && digits.len() != 11 {
            return Err(NdcError::InvalidLength(digits.len()));
        }
        Ok(Self(digits))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of digits, always 10 or 11.
    pub fn digit_count(&self) -> usize {
        self.0.len()
    }

    /// Digit at `index`, or `None` past the end.
    pub fn digit(&self, index: usize) -> Option<char> {
        self.0.as_bytes().get(index).map(|byte| *byte as char)
    }
}

impl fmt::Display for NdcCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl serde::Serialize for NdcCode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for NdcCode {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}
