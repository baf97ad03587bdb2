//! Logic for the upload-file call.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::{error_response::ErrorResponse, Client, Error};

impl Client {
    /// Perform the upload-file call to the server.
    pub async fn upload_file(
        &self,
        req: UploadFileRequest<'_>,
    ) -> Result<UploadFileResponse, Error<UploadFileError>> {
        let url = format!("{}/files/upload", self.base_url);
        let res = self.reqwest.post(url).json(&req).send().await?;
        match res.status() {
            StatusCode::OK => Ok(res.json().await?),
            status => Err(Error::Call(UploadFileError::from_response(
                status,
                res.text().await?,
            ))),
        }
    }
}

/// Input data for the upload-file request.
///
/// The file name and base64-encoded content travel inside the signed
/// message, so the request shape matches the other calls.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct UploadFileRequest<'a> {
    /// The canonical signed message authorizing this action.
    pub message: &'a str,
    /// The wallet signature over the message.
    pub signature: &'a str,
}

/// The response for the upload-file request.
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct UploadFileResponse {
    /// The public URL of the uploaded file.
    pub url: String,
}

/// The upload-file-specific error condition.
#[derive(Error, Debug, PartialEq)]
pub enum UploadFileError {
    /// The signing address is not on the admin allowlist.
    #[error("not allowed")]
    NotAllowed,
    /// The message timestamp is outside of the server's freshness window.
    #[error("signature expired")]
    SignatureExpired,
    /// The signature does not recover to the claimed address.
    #[error("invalid signature")]
    InvalidSignature,
    /// The request was malformed.
    #[error("bad request: {0}")]
    BadRequest(String),
    /// Some other error occured.
    #[error("unknown error: {0}")]
    Unknown(String),
}

impl UploadFileError {
    /// Parse the error response.
    fn from_response(status: StatusCode, body: String) -> Self {
        let error_code = match body.try_into() {
            Ok(ErrorResponse { error }) => error,
            Err(body) => return Self::Unknown(body),
        };
        match (status, error_code.as_str()) {
            (StatusCode::FORBIDDEN, "not_allowed") => Self::NotAllowed,
            (StatusCode::UNAUTHORIZED, "signature_expired") => Self::SignatureExpired,
            (StatusCode::UNAUTHORIZED, "invalid_signature") => Self::InvalidSignature,
            (StatusCode::BAD_REQUEST, _) => Self::BadRequest(error_code),
            _ => Self::Unknown(error_code),
        }
    }
}
