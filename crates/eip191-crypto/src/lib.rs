//! EIP-191 ("personal sign") message hashing, signature recovery and signing.

use primitives_ethereum::{EcdsaSignature, EthereumAddress};
use sha3::{Digest, Keccak256};

pub use libsecp256k1::SecretKey;

/// Prepare the eth personal sign message hash.
pub fn hash_personal_message(message: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(b"\x19Ethereum Signed Message:\n");
    hasher.update(message.len().to_string().as_bytes());
    hasher.update(message);
    hasher.finalize().into()
}

/// Extract the signer address from the signature and the message hash.
pub fn recover_signer(sig: &EcdsaSignature, msg_hash: &[u8; 32]) -> Option<EthereumAddress> {
    let recovery_byte = sig.0[64];
    // Wallets emit 27/28, the raw scheme uses 0/1. Accept both.
    let standard_v = if recovery_byte >= 27 {
        recovery_byte - 27
    } else {
        recovery_byte
    };
    let recovery_id = libsecp256k1::RecoveryId::parse(standard_v).ok()?;
    let signature = libsecp256k1::Signature::parse_standard_slice(&sig.0[..64]).ok()?;
    let message = libsecp256k1::Message::parse(msg_hash);
    let pubkey = libsecp256k1::recover(&message, &signature, &recovery_id).ok()?;
    Some(ecdsa_public_key_to_ethereum_address(&pubkey))
}

/// Verify signature based on provided message.
pub fn verify_signature(signature: &EcdsaSignature, message: &[u8]) -> Option<EthereumAddress> {
    let msg_hash = hash_personal_message(message);
    recover_signer(signature, &msg_hash)
}

/// Sign the message with the provided secret key, personal-sign style.
///
/// The recovery byte is encoded as 27/28 to match what the wallets produce.
pub fn sign_message(secret: &SecretKey, message: &[u8]) -> EcdsaSignature {
    let msg_hash = hash_personal_message(message);
    let (signature, recovery_id) = libsecp256k1::sign(&libsecp256k1::Message::parse(&msg_hash), secret);
    let mut bytes = [0u8; 65];
    bytes[..64].copy_from_slice(&signature.serialize());
    bytes[64] = recovery_id.serialize() + 27;
    EcdsaSignature(bytes)
}

/// Convert the ECDSA public key to Ethereum address.
fn ecdsa_public_key_to_ethereum_address(pubkey: &libsecp256k1::PublicKey) -> EthereumAddress {
    let uncompressed = pubkey.serialize();
    let hash = Keccak256::digest(&uncompressed[1..]);
    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    EthereumAddress(address)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// This test contains the data obtained from Metamask/eth-sig-util.
    ///
    /// https://github.com/MetaMask/eth-sig-util/blob/8a470650074174f5338308d2acbd97caf5542434/src/personal-sign.test.ts#L88
    #[test]
    fn valid_signature() {
        let message = "hello world";
        let hex_signature = "0xce909e8ea6851bc36c007a0072d0524b07a3ff8d4e623aca4c71ca8e57250c4d0a3fc38fa8fbaaa81ead4b9f6bd03356b6f8bf18bccad167d78891636e1d69561b";
        let expected_address = "0xbe93f9bacbcffc8ee6663f2647917ed7a20a57bb";

        let address = verify_signature(
            &EcdsaSignature(
                hex::decode(&hex_signature[2..])
                    .unwrap()
                    .try_into()
                    .unwrap(),
            ),
            message.as_bytes(),
        );

        assert_eq!(address.unwrap().to_string(), expected_address);
    }

    /// This test contains the data obtained from MetaMask browser extension via an injected web3
    /// interface using personal_sign API.
    ///
    /// https://metamask.github.io/test-dapp/.
    ///
    /// It validates that the real-world external ecosystem works properly with our code.
    #[test]
    fn real_world_case() {
        let message = "Example `personal_sign` message";
        let hex_signature = "0xbef8374833e572271b2f17d233a8e03c53c8f35e451cd33494793bbdc036f1d72dd955c0628483bc50bd3f7849d1d730a69cdd9775ab3eed556b87eaa20426511b";
        let expected_address = "0xc16fb04cbc2c946399772688c33d9bb6ae6ac71b";

        let address = verify_signature(
            &EcdsaSignature(
                hex::decode(&hex_signature[2..])
                    .unwrap()
                    .try_into()
                    .unwrap(),
            ),
            message.as_bytes(),
        );

        assert_eq!(address.unwrap().to_string(), expected_address);
    }

    #[test]
    fn sign_recover_roundtrip() {
        let secret = SecretKey::parse(&[0x42; 32]).unwrap();
        let message = b"a message to sign";

        let signature = sign_message(&secret, message);
        assert!(signature.0[64] == 27 || signature.0[64] == 28);

        let recovered = verify_signature(&signature, message).unwrap();
        let recovered_again = verify_signature(&signature, message).unwrap();
        assert_eq!(recovered, recovered_again);

        // A different message must not recover to the same signer.
        let other = verify_signature(&signature, b"another message").unwrap();
        assert_ne!(recovered, other);
    }
}
