//! Content hashing for change detection in incremental runs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A 128-bit content hash computed using XXH3.
///
/// Two files with the same `ContentHash` are assumed to have identical content.
/// The hash is rendered as 32 lowercase hex characters, which is also the form
/// persisted in the incremental cache file.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentHash([u8; 16]);

impl ContentHash {
    /// Computes a content hash from a byte slice using XXH3-128.
    pub fn from_bytes(data: &[u8]) -> Self {
        let hash = xxhash_rust::xxh3::xxh3_128(data);
        Self(hash.to_le_bytes())
    }

    /// Parses the 32-character hex form produced by [`Display`](fmt::Display).
    pub fn from_hex(s: &str) -> Result<Self, ParseHashError> {
        if s.len() != 32 {
            return Err(ParseHashError::Length(s.len()));
        }
        // `from_str_radix` alone would accept a sign character.
        if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseHashError::InvalidDigit(s.to_string()));
        }
        let mut bytes = [0u8; 16];
        for (i, byte) in bytes.iter_mut().enumerate() {
            let pair = s
                .get(i * 2..i * 2 + 2)
                .ok_or_else(|| ParseHashError::InvalidDigit(s.to_string()))?;
            *byte = u8::from_str_radix(pair, 16)
                .map_err(|_| ParseHashError::InvalidDigit(s.to_string()))?;
        }
        Ok(Self(bytes))
    }
}

impl FromStr for ContentHash {
    type Err = ParseHashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentHash({:02x}{:02x}..)", self.0[0], self.0[1])
    }
}

/// Error returned when a hex string is not a valid [`ContentHash`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseHashError {
    /// The string does not have exactly 32 characters.
    #[error("expected 32 hex characters, found {0}")]
    Length(usize),
    /// The string contains a non-hex character.
    #[error("invalid hex digit in '{0}'")]
    InvalidDigit(String),
}
