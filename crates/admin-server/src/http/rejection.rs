//! Rejection handling logic.

use serde::Serialize;
use warp::{hyper::StatusCode, Reply};

use crate::logic::{
    op_create_offering, op_get_offering, op_list_offerings, op_upload_file, verify,
};

/// Error response shape that we return for the error body.
#[derive(Debug, Serialize)]
pub(crate) struct ErrorResponse {
    /// The machine-readable error code describing the error condition.
    pub error: &'static str,
}

/// Map a verification error to the status code and the error code.
fn verification(err: &verify::Error) -> (StatusCode, &'static str) {
    match err {
        verify::Error::InvalidMessage => (StatusCode::BAD_REQUEST, "invalid_message"),
        verify::Error::InvalidAction => (StatusCode::BAD_REQUEST, "invalid_action"),
        verify::Error::MissingSignature => (StatusCode::BAD_REQUEST, "missing_signature"),
        verify::Error::NotAllowed => (StatusCode::FORBIDDEN, "not_allowed"),
        verify::Error::SignatureExpired => (StatusCode::UNAUTHORIZED, "signature_expired"),
        verify::Error::InvalidSignature => (StatusCode::UNAUTHORIZED, "invalid_signature"),
    }
}

/// The mapping used for every downstream storage failure.
fn storage_failed() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "storage_request_failed")
}

/// Handle create offering rejection.
fn create_offering(err: &op_create_offering::Error) -> (StatusCode, &'static str) {
    match err {
        op_create_offering::Error::Verification(err) => verification(err),
        op_create_offering::Error::Storage(_) => storage_failed(),
    }
}

/// Handle list offerings rejection.
fn list_offerings(err: &op_list_offerings::Error) -> (StatusCode, &'static str) {
    match err {
        op_list_offerings::Error::Verification(err) => verification(err),
        op_list_offerings::Error::Storage(_) => storage_failed(),
    }
}

/// Handle get offering rejection.
fn get_offering(err: &op_get_offering::Error) -> (StatusCode, &'static str) {
    match err {
        op_get_offering::Error::Verification(err) => verification(err),
        op_get_offering::Error::Storage(storage_api_client::Error::Call(
            storage_api_client::GetRecordError::NotFound,
        )) => (StatusCode::NOT_FOUND, "not_found"),
        op_get_offering::Error::Storage(_) => storage_failed(),
    }
}

/// Handle upload file rejection.
fn upload_file(err: &op_upload_file::Error) -> (StatusCode, &'static str) {
    match err {
        op_upload_file::Error::Verification(err) => verification(err),
        op_upload_file::Error::Storage(_) => storage_failed(),
    }
}

/// This function receives a `Rejection` and generates an error response.
pub async fn handle(err: warp::reject::Rejection) -> Result<impl Reply, std::convert::Infallible> {
    let (status_code, error) = if err.is_not_found() {
        (StatusCode::NOT_FOUND, "not_found")
    } else if err.find::<warp::body::BodyDeserializeError>().is_some()
        || err.find::<warp::reject::PayloadTooLarge>().is_some()
    {
        (StatusCode::BAD_REQUEST, "invalid_body")
    } else if let Some(e) = err.find::<op_create_offering::Error>() {
        create_offering(e)
    } else if let Some(e) = err.find::<op_list_offerings::Error>() {
        list_offerings(e)
    } else if let Some(e) = err.find::<op_get_offering::Error>() {
        get_offering(e)
    } else if let Some(e) = err.find::<op_upload_file::Error>() {
        upload_file(e)
    } else {
        // Anything else here is a route that does not exist on this server,
        // e.g. a method mismatch.
        (StatusCode::NOT_FOUND, "not_found")
    };

    let json = warp::reply::json(&ErrorResponse { error });
    Ok(warp::reply::with_status(json, status_code))
}
