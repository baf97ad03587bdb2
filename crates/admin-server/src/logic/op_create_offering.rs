//! Create offering operation.

use serde::{Deserialize, Serialize};
use signed_message::Action;
use tracing::{error, trace};

use super::{now_millis, verify, Logic, LogicOp, OFFERINGS_COLLECTION};

/// The request of the create offering operation.
#[derive(Debug, Deserialize, Serialize)]
pub struct Request {
    /// The canonical signed message string.
    pub message: String,
    /// The hex-encoded signature over the message.
    pub signature: String,
}

/// The response of the create offering operation.
#[derive(Debug, Serialize)]
pub struct Response {
    /// The ID the storage service assigned to the new offering record.
    pub id: String,
}

/// Errors for the create offering operation.
#[derive(Debug)]
pub enum Error {
    /// The request failed verification.
    Verification(verify::Error),
    /// The downstream storage call failed.
    Storage(storage_api_client::Error<storage_api_client::CreateRecordError>),
}

#[async_trait::async_trait]
impl LogicOp<Request> for Logic {
    type Response = Response;
    type Error = Error;

    async fn call(&self, req: Request) -> Result<Self::Response, Self::Error> {
        let payload = verify::verify(
            &self.allowlist,
            Action::CreateOffering,
            now_millis(),
            &req.message,
            &req.signature,
        )
        .map_err(Error::Verification)?;
        trace!(message = "Create offering request verified", address = %payload.address);

        let res = self
            .storage
            .create_record(OFFERINGS_COLLECTION, &payload.extra)
            .await
            .map_err(|err| {
                error!(message = "Storage create record call failed", error = %err);
                Error::Storage(err)
            })?;

        Ok(Response { id: res.id })
    }
}
