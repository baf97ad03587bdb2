//! The signed-request verification pipeline.
//!
//! The check order is deliberate: the cheap checks (parse, action match,
//! allowlist, freshness) run before the signature recovery, so malformed or
//! unauthorized requests never pay for the elliptic curve math.

use primitives_ethereum::EcdsaSignature;
use signed_message::{Action, SignedMessage, MESSAGE_VERSION};

use crate::config::Allowlist;

/// The wall-clock skew tolerance for message timestamps, in either direction.
pub const FRESHNESS_WINDOW_MILLIS: u64 = 5 * 60 * 1000;

/// Errors of the verification pipeline.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The signature field was empty.
    #[error("signature is missing")]
    MissingSignature,
    /// The message did not parse as a supported signed message.
    #[error("request message is not a valid signed message")]
    InvalidMessage,
    /// The message's action does not match the endpoint it was sent to.
    #[error("request action does not match this endpoint")]
    InvalidAction,
    /// The signer is not in the allowlist.
    #[error("address is not allowed to perform admin actions")]
    NotAllowed,
    /// The message timestamp is outside of the freshness window.
    /// The caller has to build and sign a fresh message; retrying with the
    /// same signature cannot succeed.
    #[error("message timestamp is outside of the freshness window")]
    SignatureExpired,
    /// The signature did not verify against the message and the claimed
    /// address.
    #[error("signature verification failed")]
    InvalidSignature,
}

/// Verify a `(message, signature)` pair against the expected action and the
/// allowlist, and return the parsed payload on success.
///
/// The signature must be a personal-sign ECDSA signature over the exact
/// `message` string by the address the message claims.
pub fn verify(
    allowlist: &Allowlist,
    expected_action: Action,
    now_millis: u64,
    message: &str,
    signature: &str,
) -> Result<SignedMessage, Error> {
    if signature.trim().is_empty() {
        return Err(Error::MissingSignature);
    }

    let payload: SignedMessage =
        serde_json::from_str(message).map_err(|_| Error::InvalidMessage)?;
    if payload.version != MESSAGE_VERSION {
        return Err(Error::InvalidMessage);
    }

    if payload.action != expected_action {
        return Err(Error::InvalidAction);
    }

    if !allowlist.allows(&payload.address) {
        return Err(Error::NotAllowed);
    }

    if now_millis.abs_diff(payload.timestamp) > FRESHNESS_WINDOW_MILLIS {
        return Err(Error::SignatureExpired);
    }

    let signature: EcdsaSignature = signature
        .trim()
        .parse()
        .map_err(|_| Error::InvalidSignature)?;
    let signer = eip191_crypto::verify_signature(&signature, message.as_bytes())
        .ok_or(Error::InvalidSignature)?;
    if signer != payload.address {
        return Err(Error::InvalidSignature);
    }

    Ok(payload)
}
