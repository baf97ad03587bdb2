//! List offerings operation.

use serde::{Deserialize, Serialize};
use signed_message::Action;
use tracing::{error, trace};

use super::{now_millis, verify, Logic, LogicOp, OFFERINGS_COLLECTION};

/// The request of the list offerings operation.
#[derive(Debug, Deserialize, Serialize)]
pub struct Request {
    /// The canonical signed message string.
    pub message: String,
    /// The hex-encoded signature over the message.
    pub signature: String,
}

/// The response of the list offerings operation.
#[derive(Debug, Serialize)]
pub struct Response {
    /// The offering records.
    pub items: Vec<serde_json::Value>,
}

/// Errors for the list offerings operation.
#[derive(Debug)]
pub enum Error {
    /// The request failed verification.
    Verification(verify::Error),
    /// The downstream storage call failed.
    Storage(storage_api_client::Error<storage_api_client::ListRecordsError>),
}

#[async_trait::async_trait]
impl LogicOp<Request> for Logic {
    type Response = Response;
    type Error = Error;

    async fn call(&self, req: Request) -> Result<Self::Response, Self::Error> {
        let payload = verify::verify(
            &self.allowlist,
            Action::ListOfferings,
            now_millis(),
            &req.message,
            &req.signature,
        )
        .map_err(Error::Verification)?;
        trace!(message = "List offerings request verified", address = %payload.address);

        let res = self
            .storage
            .list_records(OFFERINGS_COLLECTION)
            .await
            .map_err(|err| {
                error!(message = "Storage list records call failed", error = %err);
                Error::Storage(err)
            })?;

        Ok(Response { items: res.items })
    }
}
