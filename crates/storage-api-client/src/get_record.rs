//! GET `/records/{collection}/{id}`.

use reqwest::StatusCode;

use crate::{Client, Error};

impl Client {
    /// Fetch a single record by ID.
    pub async fn get_record(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<serde_json::Value, Error<GetRecordError>> {
        let res = self
            .build_get(&format!("/records/{collection}/{id}"))
            .send()
            .await?;
        match res.status() {
            StatusCode::OK => Ok(res.json().await?),
            StatusCode::NOT_FOUND => Err(Error::Call(GetRecordError::NotFound)),
            _ => Err(Error::Call(GetRecordError::Unknown(res.text().await?))),
        }
    }
}

/// The get-record-specific error condition.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum GetRecordError {
    /// No record exists under this ID.
    #[error("record not found")]
    NotFound,
    /// Some other error occured.
    #[error("unknown error: {0}")]
    Unknown(String),
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use wiremock::{matchers, Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::test_utils::test_client;

    #[tokio::test]
    async fn mock_success() {
        let mock_server = MockServer::start().await;

        let sample_response = serde_json::json!({"id": "rec-1", "name": "Warehouse A"});

        Mock::given(matchers::method("GET"))
            .and(matchers::path("/records/offerings/rec-1"))
            .and(matchers::header("X-Service-Key", "test-service-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&sample_response))
            .mount(&mock_server)
            .await;

        let client = test_client(mock_server.uri());
        let response = client.get_record("offerings", "rec-1").await.unwrap();
        assert_eq!(response, sample_response);
    }

    #[tokio::test]
    async fn mock_error_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(matchers::method("GET"))
            .and(matchers::path("/records/offerings/rec-9"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let client = test_client(mock_server.uri());
        let actual_error = client.get_record("offerings", "rec-9").await.unwrap_err();
        assert_matches!(actual_error, Error::Call(GetRecordError::NotFound));
    }
}
