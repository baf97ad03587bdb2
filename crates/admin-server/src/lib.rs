//! uShare admin API server internals.
//!
//! Authenticates administrative actions via wallet-signature
//! proof-of-possession and proxies them to the storage service.

#![warn(
    missing_docs,
    clippy::missing_docs_in_private_items,
    clippy::clone_on_ref_ptr
)]

use std::sync::Arc;

use warp::Filter;

mod config;
mod http;
mod logic;

pub use config::{Allowlist, AllowlistParseError};
pub use logic::Logic;

/// Initialize the [`warp::Filter`] implementing the HTTP transport for
/// the admin API.
pub fn init(
    storage: storage_api_client::Client,
    allowlist: Allowlist,
) -> impl Filter<Extract = impl warp::Reply, Error = std::convert::Infallible> + Clone {
    let logic = Logic { storage, allowlist };
    let log = warp::log("ushare::api");
    http::root(Arc::new(logic))
        .recover(http::rejection::handle)
        .with(log)
}
