//! Client-side expiring cache for signed admin requests.
//!
//! Signing goes through an interactive wallet prompt, so identical requests
//! within a short window reuse the previous message/signature pair instead
//! of prompting the user again. This is purely a UX optimization: the server
//! enforces its own freshness window regardless.

use primitives_ethereum::EthereumAddress;
use signed_message::{Action, SignedMessage};
use tokio::sync::Mutex;

mod store;
mod traits;

pub use store::MemoryStore;
pub use traits::{CacheEntry, Clock, Signer, Store, SystemClock};

/// The default reuse window for a cached signature.
pub const DEFAULT_TTL_MILLIS: u64 = 4 * 60 * 1000;

/// The discriminator used when the extra fields carry no `id`.
const NO_DISCRIMINATOR: &str = "-";

/// A ready-to-submit signed request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedPayload {
    /// The canonical message string.
    pub message: String,
    /// The hex signature over `message`.
    pub signature: String,
}

/// The signer wrapper that reuses fresh signatures from the store.
#[derive(Debug)]
pub struct CachedSigner<S, St, C = SystemClock> {
    /// The underlying wallet signer.
    signer: S,
    /// The mutex over the store. All lookups and signing happen under this
    /// lock, so concurrent requests for the same key coalesce instead of
    /// both reaching the signing prompt.
    ///
    /// The lock is over the whole store, so requests for different keys
    /// serialize too. The wallet prompt is singular anyway, and admin
    /// traffic is a trickle; sharding to a per-key lock map is not worth it
    /// at this volume.
    store: Mutex<St>,
    /// The time source.
    clock: C,
    /// The reuse window for stored entries.
    ttl_millis: u64,
}

impl<S, St> CachedSigner<S, St>
where
    S: Signer,
    St: Store,
{
    /// Create a cached signer with the system clock and the default TTL.
    pub fn new(signer: S, store: St) -> Self {
        Self::with_clock(signer, store, SystemClock, DEFAULT_TTL_MILLIS)
    }
}

impl<S, St, C> CachedSigner<S, St, C>
where
    S: Signer,
    St: Store,
    C: Clock,
{
    /// Create a cached signer with an explicit clock and TTL.
    pub fn with_clock(signer: S, store: St, clock: C, ttl_millis: u64) -> Self {
        Self {
            signer,
            store: Mutex::new(store),
            clock,
            ttl_millis,
        }
    }

    /// Obtain a signed payload for the given action, reusing a cached pair
    /// when a fresh one exists.
    ///
    /// On miss or expiry this builds a message with the current timestamp,
    /// asks the signer for a signature, and stores the pair. Signer errors
    /// (including prompt dismissal) are propagated and nothing is cached.
    pub async fn signed_payload(
        &self,
        action: Action,
        address: EthereumAddress,
        extra: serde_json::Map<String, serde_json::Value>,
    ) -> Result<SignedPayload, S::Error> {
        let key = cache_key(action, &address, &extra);

        let mut store = self.store.lock().await;
        let now = self.clock.now_millis();
        if let Some(entry) = store.get(&key) {
            if now < entry.expires_at {
                return Ok(SignedPayload {
                    message: entry.message,
                    signature: entry.signature,
                });
            }
            store.delete(&key);
        }

        let message = SignedMessage::new(action, address, now, extra).canonical_json();
        let signature = self.signer.sign(&message).await?.to_string();
        store.set(
            key,
            CacheEntry {
                message: message.clone(),
                signature: signature.clone(),
                expires_at: now + self.ttl_millis,
            },
        );
        Ok(SignedPayload { message, signature })
    }
}

/// The cache key for a logical action.
fn cache_key(
    action: Action,
    address: &EthereumAddress,
    extra: &serde_json::Map<String, serde_json::Value>,
) -> String {
    let discriminator = extra
        .get("id")
        .and_then(serde_json::Value::as_str)
        .unwrap_or(NO_DISCRIMINATOR);
    format!("{action}:{address}:{discriminator}")
}
