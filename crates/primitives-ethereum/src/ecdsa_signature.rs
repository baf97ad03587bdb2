//! ECDSA Signature.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A ECDSA signature, used by Ethereum.
///
/// 65 bytes: `r || s || v`, where `v` is the recovery byte, typically 27/28
/// as produced by the `personal_sign` wallet API.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct EcdsaSignature(pub [u8; 65]);

impl Default for EcdsaSignature {
    fn default() -> Self {
        Self([0; 65])
    }
}

/// An error while parsing an [`EcdsaSignature`] from a string.
///
/// No `Eq`: the embedded [`hex::FromHexError`] is only `PartialEq`.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum SignatureParseError {
    /// The hex part of the input was not 130 characters long.
    #[error("bad length of ECDSA signature (should be 65 bytes)")]
    BadLength,
    /// The input contained a non-hex character.
    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

impl fmt::Display for EcdsaSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl FromStr for EcdsaSignature {
    type Err = SignatureParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s);
        if s.len() != 130 {
            return Err(SignatureParseError::BadLength);
        }
        let mut bytes = [0u8; 65];
        hex::decode_to_slice(s, &mut bytes)?;
        Ok(Self(bytes))
    }
}

impl Serialize for EcdsaSignature {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for EcdsaSignature {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let base_string = String::deserialize(deserializer)?;
        base_string.parse().map_err(serde::de::Error::custom)
    }
}
