//! Logic for the get-offering call.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::{error_response::ErrorResponse, Client, Error};

impl Client {
    /// Perform the get-offering call to the server.
    ///
    /// The offering id travels inside the signed message, not in the URL,
    /// so that it is covered by the signature.
    pub async fn get_offering(
        &self,
        req: GetOfferingRequest<'_>,
    ) -> Result<GetOfferingResponse, Error<GetOfferingError>> {
        let url = format!("{}/offerings/get", self.base_url);
        let res = self.reqwest.post(url).json(&req).send().await?;
        match res.status() {
            StatusCode::OK => Ok(res.json().await?),
            status => Err(Error::Call(GetOfferingError::from_response(
                status,
                res.text().await?,
            ))),
        }
    }
}

/// Input data for the get-offering request.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct GetOfferingRequest<'a> {
    /// The canonical signed message authorizing this action.
    pub message: &'a str,
    /// The wallet signature over the message.
    pub signature: &'a str,
}

/// The response for the get-offering request.
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct GetOfferingResponse {
    /// The offering record, as the storage service returned it.
    pub item: serde_json::Value,
}

/// The get-offering-specific error condition.
#[derive(Error, Debug, PartialEq)]
pub enum GetOfferingError {
    /// No offering exists under the requested id.
    #[error("not found")]
    NotFound,
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

impl GetOfferingError {
    /// Parse the error response.
    fn from_response(status: StatusCode, body: String) -> Self {
        let error_code = match body.try_into() {
            Ok(ErrorResponse { error }) => error,
            Err(body) => return Self::Unknown(body),
        };
        match (status, error_code.as_str()) {
            (StatusCode::NOT_FOUND, "not_found") => Self::NotFound,
            (StatusCode::FORBIDDEN, "not_allowed") => Self::NotAllowed,
            (StatusCode::UNAUTHORIZED, "signature_expired") => Self::SignatureExpired,
            (StatusCode::UNAUTHORIZED, "invalid_signature") => Self::InvalidSignature,
            (StatusCode::BAD_REQUEST, _) => Self::BadRequest(error_code),
            _ => Self::Unknown(error_code),
        }
    }
}
