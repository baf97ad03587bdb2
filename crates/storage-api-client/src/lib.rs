//! Client API for the backing database/object-storage service.

#![warn(
    missing_docs,
    clippy::missing_docs_in_private_items,
    clippy::clone_on_ref_ptr
)]

use reqwest::RequestBuilder;
use thiserror::Error;

mod create_record;
mod get_record;
mod list_records;
mod upload_file;
#[cfg(test)]
mod test_utils;

pub use create_record::*;
pub use get_record::*;
pub use list_records::*;
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

/// The storage service client.
#[derive(Debug)]
pub struct Client {
    /// Underlying HTTP client used to execute network calls.
    pub reqwest: reqwest::Client,
    /// The base URL to use for the routes.
    pub base_url: String,
    /// The service key to pass in the header of every request.
    pub service_key: String,
}

impl Client {
    /// Prepare the URL.
    fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Apply some common headers.
    fn apply_headers(&self, req: RequestBuilder) -> RequestBuilder {
        req.header("X-Service-Key", self.service_key.clone())
    }

    /// An internal utility to prepare a GET HTTP request.
    /// Applies some common logic.
    fn build_get(&self, path: &str) -> RequestBuilder {
        let url = self.build_url(path);
        self.apply_headers(self.reqwest.get(url))
    }

    /// An internal utility to prepare a POST HTTP request.
    /// Applies some common logic.
    fn build_post<T>(&self, path: &str, body: &T) -> RequestBuilder
    where
        T: serde::Serialize + ?Sized,
    {
        let url = self.build_url(path);
        self.apply_headers(self.reqwest.post(url)).json(body)
    }
}
