//! GET `/records/{collection}`.

use reqwest::StatusCode;
use serde::Deserialize;

use crate::{Client, Error};

impl Client {
    /// List the records of the collection.
    pub async fn list_records(
        &self,
        collection: &str,
    ) -> Result<ListRecordsResponse, Error<ListRecordsError>> {
        let res = self
            .build_get(&format!("/records/{collection}"))
            .send()
            .await?;
        match res.status() {
            StatusCode::OK => Ok(res.json().await?),
            _ => Err(Error::Call(ListRecordsError::Unknown(res.text().await?))),
        }
    }
}

/// The response from a collection listing.
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct ListRecordsResponse {
    /// The records of the collection.
    pub items: Vec<serde_json::Value>,
}

/// The list-records-specific error condition.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ListRecordsError {
    /// Some other error occured.
    #[error("unknown error: {0}")]
    Unknown(String),
}
