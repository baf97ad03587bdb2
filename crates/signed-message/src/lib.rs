//! The versioned signed-payload schema for admin request authentication.
//!
//! A signature covers the exact canonical JSON string of a [`SignedMessage`],
//! so the serialization must be byte-stable for a given input: the named
//! fields go in declaration order, and the extra fields follow in sorted key
//! order (the default [`serde_json::Map`] is ordered).

use std::fmt;

use primitives_ethereum::EthereumAddress;
use serde::{Deserialize, Serialize};

/// The current version of the signed message schema.
///
/// Bump this when the payload shape changes, so cached signatures from old
/// clients are rejected instead of silently mis-verified.
pub const MESSAGE_VERSION: u16 = 1;

/// An administrative action that requires a signed message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    /// Create a new uShare offering record.
    CreateOffering,
    /// List the existing offering records.
    ListOfferings,
    /// Fetch a single offering record.
    GetOffering,
    /// Upload a file to the storage service.
    UploadFile,
}

impl Action {
    /// The wire representation of the action.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreateOffering => "create-offering",
            Self::ListOfferings => "list-offerings",
            Self::GetOffering => "get-offering",
            Self::UploadFile => "upload-file",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The structured payload an admin wallet signs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignedMessage {
    /// The schema version, currently [`MESSAGE_VERSION`].
    pub version: u16,
    /// The action this message authorizes.
    pub action: Action,
    /// The signer's address, normalized to lowercase hex.
    pub address: EthereumAddress,
    /// When the message was built, unix epoch milliseconds.
    pub timestamp: u64,
    /// Action-specific fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl SignedMessage {
    /// Build a message for the current schema version.
    pub fn new(
        action: Action,
        address: EthereumAddress,
        timestamp: u64,
        extra: serde_json::Map<String, serde_json::Value>,
    ) -> Self {
        Self {
            version: MESSAGE_VERSION,
            action,
            address,
            timestamp,
            extra,
        }
    }

    /// The canonical string form of the message, the exact bytes a signature
    /// covers.
    pub fn canonical_json(&self) -> String {
        serde_json::to_string(self).expect("a JSON object with string keys always serializes")
    }
}
