//! Get offering operation.

use serde::{Deserialize, Serialize};
use signed_message::Action;
use tracing::{error, trace};

use super::{now_millis, verify, Logic, LogicOp, OFFERINGS_COLLECTION};

/// The request of the get offering operation.
#[derive(Debug, Deserialize, Serialize)]
pub struct Request {
    /// The canonical signed message string. Must carry an `id` extra field.
    pub message: String,
    /// The hex-encoded signature over the message.
    pub signature: String,
}

/// The response of the get offering operation.
#[derive(Debug, Serialize)]
pub struct Response {
    /// The offering record.
    pub item: serde_json::Value,
}

/// Errors for the get offering operation.
#[derive(Debug)]
pub enum Error {
    /// The request failed verification.
    Verification(verify::Error),
    /// The downstream storage call failed.
    Storage(storage_api_client::Error<storage_api_client::GetRecordError>),
}

#[async_trait::async_trait]
impl LogicOp<Request> for Logic {
    type Response = Response;
    type Error = Error;

    async fn call(&self, req: Request) -> Result<Self::Response, Self::Error> {
        let payload = verify::verify(
            &self.allowlist,
            Action::GetOffering,
            now_millis(),
            &req.message,
            &req.signature,
        )
        .map_err(Error::Verification)?;

        // The signed payload itself names the record; an id-less message is
        // malformed for this action.
        let id = payload
            .extra
            .get("id")
            .and_then(serde_json::Value::as_str)
            .ok_or(Error::Verification(verify::Error::InvalidMessage))?;
        trace!(message = "Get offering request verified", address = %payload.address, id);

        let item = self
            .storage
            .get_record(OFFERINGS_COLLECTION, id)
            .await
            .map_err(|err| {
                error!(message = "Storage get record call failed", error = %err);
                Error::Storage(err)
            })?;

        Ok(Response { item })
    }
}
