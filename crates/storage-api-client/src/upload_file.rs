//! POST `/files`.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::{Client, Error};

impl Client {
    /// Upload a file and return the URL it is served under.
    ///
    /// The content is passed through base64-encoded, the way the storage
    /// service accepts it; this client does no transcoding.
    pub async fn upload_file(
        &self,
        req: UploadFileRequest<'_>,
    ) -> Result<UploadFileResponse, Error<UploadFileError>> {
        let res = self.build_post("/files", &req).send().await?;
        match res.status() {
            StatusCode::OK | StatusCode::CREATED => Ok(res.json().await?),
            _ => Err(Error::Call(UploadFileError::Unknown(res.text().await?))),
        }
    }
}

/// Input data for the upload request.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UploadFileRequest<'a> {
    /// The name to store the file under.
    pub file_name: &'a str,
    /// The base64-encoded file content.
    pub content: &'a str,
}

/// The response from a file upload.
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct UploadFileResponse {
    /// The URL the uploaded file is served under.
    pub url: String,
}

/// The upload-file-specific error condition.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum UploadFileError {
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

    #[test]
    fn request_serialization() {
        let expected_request = serde_json::json!({
            "fileName": "deck.pdf",
            "content": "aGVsbG8=",
        });

        let actual_request = serde_json::to_value(UploadFileRequest {
            file_name: "deck.pdf",
            content: "aGVsbG8=",
        })
        .unwrap();

        assert_eq!(expected_request, actual_request);
    }

    #[tokio::test]
    async fn mock_success() {
        let mock_server = MockServer::start().await;

        let sample_request = UploadFileRequest {
            file_name: "deck.pdf",
            content: "aGVsbG8=",
        };

        Mock::given(matchers::method("POST"))
            .and(matchers::path("/files"))
            .and(matchers::header("X-Service-Key", "test-service-key"))
            .and(matchers::body_json(&sample_request))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(serde_json::json!({"url": "https://cdn.test/deck.pdf"})),
            )
            .mount(&mock_server)
            .await;

        let client = test_client(mock_server.uri());
        let response = client.upload_file(sample_request).await.unwrap();
        assert_eq!(
            response,
            UploadFileResponse {
                url: "https://cdn.test/deck.pdf".to_owned()
            }
        );
    }

    #[tokio::test]
    async fn mock_error_unknown() {
        let mock_server = MockServer::start().await;

        Mock::given(matchers::method("POST"))
            .and(matchers::path("/files"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Some error text"))
            .mount(&mock_server)
            .await;

        let client = test_client(mock_server.uri());
        let actual_error = client
            .upload_file(UploadFileRequest {
                file_name: "deck.pdf",
                content: "aGVsbG8=",
            })
            .await
            .unwrap_err();
        assert_matches!(
            actual_error,
            Error::Call(UploadFileError::Unknown(error_text)) if error_text == "Some error text"
        );
    }
}
