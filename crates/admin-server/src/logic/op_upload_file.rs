//! Upload file operation.

use serde::{Deserialize, Serialize};
use signed_message::Action;
use tracing::{error, trace};

use super::{now_millis, verify, Logic, LogicOp};

/// The request of the upload file operation.
#[derive(Debug, Deserialize, Serialize)]
pub struct Request {
    /// The canonical signed message string. Must carry `fileName` and
    /// base64 `content` extra fields.
    pub message: String,
    /// The hex-encoded signature over the message.
    pub signature: String,
}

/// The response of the upload file operation.
#[derive(Debug, Serialize)]
pub struct Response {
    /// The URL the uploaded file is served under.
    pub url: String,
}

/// Errors for the upload file operation.
#[derive(Debug)]
pub enum Error {
    /// The request failed verification.
    Verification(verify::Error),
    /// The downstream storage call failed.
    Storage(storage_api_client::Error<storage_api_client::UploadFileError>),
}

#[async_trait::async_trait]
impl LogicOp<Request> for Logic {
    type Response = Response;
    type Error = Error;

    async fn call(&self, req: Request) -> Result<Self::Response, Self::Error> {
        let payload = verify::verify(
            &self.allowlist,
            Action::UploadFile,
            now_millis(),
            &req.message,
            &req.signature,
        )
        .map_err(Error::Verification)?;

        let file_name = payload
            .extra
            .get("fileName")
            .and_then(serde_json::Value::as_str)
            .ok_or(Error::Verification(verify::Error::InvalidMessage))?;
        let content = payload
            .extra
            .get("content")
            .and_then(serde_json::Value::as_str)
            .ok_or(Error::Verification(verify::Error::InvalidMessage))?;
        trace!(message = "Upload file request verified", address = %payload.address, file_name);

        let res = self
            .storage
            .upload_file(storage_api_client::UploadFileRequest { file_name, content })
            .await
            .map_err(|err| {
                error!(message = "Storage upload file call failed", error = %err);
                Error::Storage(err)
            })?;

        Ok(Response { url: res.url })
    }
}
