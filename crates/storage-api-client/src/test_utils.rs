//! Test utilities shared by the op tests.

use crate::Client;

/// Make a client pointed at the given (mock server) base URL.
pub fn test_client(base_url: String) -> Client {
    Client {
        reqwest: reqwest::Client::new(),
        base_url,
        service_key: "test-service-key".to_owned(),
    }
}
