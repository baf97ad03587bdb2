//! Common ethereum related primitives.

mod ecdsa_signature;
mod ethereum_address;

pub use ecdsa_signature::*;
pub use ethereum_address::*;
