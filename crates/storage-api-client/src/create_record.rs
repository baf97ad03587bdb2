//! POST `/records/{collection}`.

use reqwest::StatusCode;
use serde::Deserialize;

use crate::{Client, Error};

impl Client {
    /// Insert a record into the collection and return its assigned ID.
    pub async fn create_record(
        &self,
        collection: &str,
        record: &serde_json::Map<String, serde_json::Value>,
    ) -> Result<CreateRecordResponse, Error<CreateRecordError>> {
        let res = self
            .build_post(&format!("/records/{collection}"), record)
            .send()
            .await?;
        match res.status() {
            StatusCode::OK | StatusCode::CREATED => Ok(res.json().await?),
            _ => Err(Error::Call(CreateRecordError::Unknown(res.text().await?))),
        }
    }
}

/// The response from a record insertion.
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct CreateRecordResponse {
    /// The ID the storage service assigned to the record.
    pub id: String,
}

/// The create-record-specific error condition.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CreateRecordError {
    /// Some other error occured.
    #[error("unknown error: {0}")]
    Unknown(String),
}
