//! The seam traits: the wallet signer, the backing store and the clock.

use primitives_ethereum::EcdsaSignature;

/// Signer provides personal-sign signatures over message strings.
///
/// Implemented over the external wallet provider; the sign call may take
/// arbitrarily long (it is user-interactive) and may fail with a
/// user-dismissal condition, which the implementation should expose as
/// a dedicated error value.
#[async_trait::async_trait]
pub trait Signer {
    /// Signature error.
    /// May represent the user dismissing the signing prompt, or a wallet
    /// provider failure.
    type Error;

    /// Sign the provided message string and return the signature, or an error
    /// if the signing fails or is dismissed.
    async fn sign(&self, message: &str) -> Result<EcdsaSignature, Self::Error>;
}

/// A stored message/signature pair with its expiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    /// The canonical message string that was signed.
    pub message: String,
    /// The hex form of the signature over `message`.
    pub signature: String,
    /// When this entry stops being reusable, unix epoch milliseconds.
    pub expires_at: u64,
}

/// The key-value store behind the cache.
///
/// The original deployment keeps these in tab-session browser storage; the
/// trait is the injection seam that makes the cache testable and portable
/// to any runtime.
pub trait Store {
    /// Look up the entry under `key`.
    fn get(&self, key: &str) -> Option<CacheEntry>;
    /// Store `entry` under `key`, replacing any previous entry.
    fn set(&mut self, key: String, entry: CacheEntry);
    /// Drop the entry under `key`, if any.
    fn delete(&mut self, key: &str);
}

/// A source of the current wall-clock time.
pub trait Clock {
    /// The current unix epoch milliseconds.
    fn now_millis(&self) -> u64;
}

/// The system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        u64::try_from(chrono::Utc::now().timestamp_millis())
            .expect("system clock is set before the unix epoch")
    }
}
