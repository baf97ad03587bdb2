//! Ethereum address.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An Ethereum address (i.e. 20 bytes, used to represent an Ethereum account).
///
/// This gets serialized to the 0x-prefixed lowercase hex representation.
/// Parsing accepts any hex case and leading/trailing whitespace, so the value
/// is normalized by construction.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub struct EthereumAddress(pub [u8; 20]);

/// An error while parsing an [`EthereumAddress`] from a string.
///
/// No `Eq`: the embedded [`hex::FromHexError`] is only `PartialEq`.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum AddressParseError {
    /// The hex part of the input was not 40 characters long.
    #[error("bad length of Ethereum address (should be 42 including '0x')")]
    BadLength,
    /// The input contained a non-hex character.
    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

impl fmt::Display for EthereumAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl FromStr for EthereumAddress {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s);
        if s.len() != 40 {
            return Err(AddressParseError::BadLength);
        }
        let mut bytes = [0u8; 20];
        hex::decode_to_slice(s, &mut bytes)?;
        Ok(Self(bytes))
    }
}

impl Serialize for EthereumAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for EthereumAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let base_string = String::deserialize(deserializer)?;
        base_string.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialize_ok() {
        assert_eq!(
            &serde_json::to_string(&EthereumAddress([
                0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19
            ]))
            .unwrap(),
            "\"0x000102030405060708090a0b0c0d0e0f10111213\"",
        );
    }

    #[test]
    fn deserialize_ok() {
        assert_eq!(
            serde_json::from_str::<EthereumAddress>(
                "\"0x000102030405060708090a0b0c0d0e0f10111213\""
            )
            .unwrap(),
            EthereumAddress([0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19])
        );
    }

    #[test]
    fn parse_normalizes_case_and_whitespace() {
        let mixed: EthereumAddress = "  0xBE93f9BacBcFFC8ee6663f2647917ed7A20A57BB "
            .parse()
            .unwrap();
        let lower: EthereumAddress = "0xbe93f9bacbcffc8ee6663f2647917ed7a20a57bb"
            .parse()
            .unwrap();
        assert_eq!(mixed, lower);
        assert_eq!(
            mixed.to_string(),
            "0xbe93f9bacbcffc8ee6663f2647917ed7a20a57bb"
        );
    }

    #[test]
    fn parse_without_prefix() {
        assert_eq!(
            "be93f9bacbcffc8ee6663f2647917ed7a20a57bb"
                .parse::<EthereumAddress>()
                .unwrap()
                .to_string(),
            "0xbe93f9bacbcffc8ee6663f2647917ed7a20a57bb",
        );
    }

    #[test]
    fn parse_bad_length() {
        assert_eq!(
            "0x1234".parse::<EthereumAddress>().unwrap_err(),
            AddressParseError::BadLength
        );
    }

    #[test]
    fn parse_invalid_hex() {
        let err = "0xzz93f9bacbcffc8ee6663f2647917ed7a20a57bb"
            .parse::<EthereumAddress>()
            .unwrap_err();
        assert_eq!(
            err,
            AddressParseError::InvalidHex(hex::FromHexError::InvalidHexCharacter {
                c: 'z',
                index: 0
            })
        );
    }
}
