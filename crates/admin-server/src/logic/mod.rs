//! Core logic of the admin API.

use crate::config::Allowlist;

pub mod op_create_offering;
pub mod op_get_offering;
pub mod op_list_offerings;
pub mod op_upload_file;
pub mod traits;
pub mod verify;

pub use traits::*;

/// The storage collection the offerings live under.
pub(crate) const OFFERINGS_COLLECTION: &str = "offerings";

/// The overall logic.
///
/// No mutable state: the allowlist is immutable for the process lifetime and
/// the storage client is internally synchronized.
pub struct Logic {
    /// The client for the storage service API.
    pub storage: storage_api_client::Client,
    /// The addresses allowed to perform admin actions.
    pub allowlist: Allowlist,
}

/// The current wall-clock time in unix epoch milliseconds.
pub(crate) fn now_millis() -> u64 {
    u64::try_from(chrono::Utc::now().timestamp_millis())
        .expect("system clock is set before the unix epoch")
}
