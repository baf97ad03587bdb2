//! Logic for the list-offerings call.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::{error_response::ErrorResponse, Client, Error};

impl Client {
    /// Perform the list-offerings call to the server.
    pub async fn list_offerings(
        &self,
        req: ListOfferingsRequest<'_>,
    ) -> Result<ListOfferingsResponse, Error<ListOfferingsError>> {
        let url = format!("{}/offerings/list", self.base_url);
        let res = self.reqwest.post(url).json(&req).send().await?;
        match res.status() {
            StatusCode::OK => Ok(res.json().await?),
            status => Err(Error::Call(ListOfferingsError::from_response(
                status,
                res.text().await?,
            ))),
        }
    }
}

/// Input data for the list-offerings request.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ListOfferingsRequest<'a> {
    /// The canonical signed message authorizing this action.
    pub message: &'a str,
    /// The wallet signature over the message.
    pub signature: &'a str,
}

/// The response for the list-offerings request.
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct ListOfferingsResponse {
    /// The offering records, as the storage service returned them.
    pub items: Vec<serde_json::Value>,
}

/// The list-offerings-specific error condition.
#[derive(Error, Debug, PartialEq)]
pub enum ListOfferingsError {
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

impl ListOfferingsError {
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
