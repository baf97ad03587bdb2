//! Error response handling logic.

use serde::Deserialize;

/// A utility type assisting with decoding error response bodies.
#[derive(Debug, Deserialize)]
pub(super) struct ErrorResponse {
    /// A machine-readable code identifying the error.
    pub error: String,
}

impl TryFrom<String> for ErrorResponse {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        serde_json::from_str(&s).map_err(|_parsing_error| s)
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::test_utils::mkerr;

    #[test]
    fn decodes() {
        let err = mkerr("not_allowed").to_string();
        let ErrorResponse { error } = err.try_into().unwrap();
        assert_eq!(error, "not_allowed");
    }

    #[test]
    fn falls_back_to_raw_body() {
        let err = "plain text error".to_owned();
        let actual: Result<ErrorResponse, String> = err.try_into();
        assert_eq!(actual.unwrap_err(), "plain text error");
    }
}
