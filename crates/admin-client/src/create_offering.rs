//! Logic for the create-offering call.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::{error_response::ErrorResponse, Client, Error};

impl Client {
    /// Perform the create-offering call to the server.
    pub async fn create_offering(
        &self,
        req: CreateOfferingRequest<'_>,
    ) -> Result<CreateOfferingResponse, Error<CreateOfferingError>> {
        let url = format!("{}/offerings/create", self.base_url);
        let res = self.reqwest.post(url).json(&req).send().await?;
        match res.status() {
            StatusCode::OK => Ok(res.json().await?),
            status => Err(Error::Call(CreateOfferingError::from_response(
                status,
                res.text().await?,
            ))),
        }
    }
}

/// Input data for the create-offering request.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct CreateOfferingRequest<'a> {
    /// The canonical signed message authorizing this action.
    pub message: &'a str,
    /// The wallet signature over the message.
    pub signature: &'a str,
}

/// The response for the create-offering request.
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct CreateOfferingResponse {
    /// The identifier the storage service assigned to the new offering.
    pub id: String,
}

/// The create-offering-specific error condition.
#[derive(Error, Debug, PartialEq)]
pub enum CreateOfferingError {
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

impl CreateOfferingError {
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
