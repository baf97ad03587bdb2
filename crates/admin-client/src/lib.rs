//! Client API for the uShare admin server.

use thiserror::Error;

mod create_offering;
mod error_response;
mod get_offering;
mod list_offerings;
#[cfg(test)]
mod test_utils;
mod upload_file;

pub use create_offering::*;
pub use get_offering::*;
pub use list_offerings::*;
pub use upload_file::*;

/// The generic error type for the client calls.
#[derive(Error, Debug)]
pub enum Error<T: std::error::Error + 'static> {
    /// A call-specific error.
    #[error("server error: {0}")]
    Call(T),
    /// An error coming from the underlying reqwest layer.
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

/// The admin server client.
#[derive(Debug)]
pub struct Client {
    /// Underlying HTTP client used to execute network calls.
    pub reqwest: reqwest::Client,
    /// The base URL to use for the routes.
    pub base_url: String,
}
