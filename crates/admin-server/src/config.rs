//! The allowlist configuration.

use std::collections::HashSet;
use std::str::FromStr;

use primitives_ethereum::EthereumAddress;

/// The set of addresses authorized to perform admin actions.
///
/// Constructed once at startup and injected into the logic; never a
/// process-global.
///
/// An empty allowlist is the distinct "no restriction" state: any address
/// with a valid signature is accepted. This preserves the deployed behavior;
/// whether an unconfigured allowlist should instead deny all is an open
/// product decision, see DESIGN.md.
#[derive(Debug, Clone, Default)]
pub struct Allowlist {
    /// The allowed addresses. Addresses are normalized at parse time, so
    /// membership checks are effectively case-insensitive.
    addresses: HashSet<EthereumAddress>,
}

impl Allowlist {
    /// Whether the address may perform admin actions.
    pub fn allows(&self, address: &EthereumAddress) -> bool {
        self.addresses.is_empty() || self.addresses.contains(address)
    }

    /// Whether this allowlist restricts anything at all.
    pub fn is_unrestricted(&self) -> bool {
        self.addresses.is_empty()
    }
}

impl FromStr for Allowlist {
    type Err = AllowlistParseError;

    /// Parse a comma-separated address list; entries are trimmed, empty
    /// entries are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut addresses = HashSet::new();
        for entry in s.split(',') {
            let entry = entry.trim();
            if entry.is_empty() {
                continue;
            }
            let address = entry.parse().map_err(|source| AllowlistParseError {
                entry: entry.to_owned(),
                source,
            })?;
            addresses.insert(address);
        }
        Ok(Self { addresses })
    }
}

/// An error while parsing an [`Allowlist`] from a string.
#[derive(Debug, thiserror::Error)]
#[error("invalid allowlist entry {entry:?}: {source}")]
pub struct AllowlistParseError {
    /// The entry that failed to parse.
    entry: String,
    /// The underlying address parse error.
    #[source]
    source: primitives_ethereum::AddressParseError,
}
