//! Common test utilities for MailerLite tests.

use mailerlite::MailerLiteClient;
use serde::Serialize;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// API key every test client sends.
pub const API_KEY: &str = "test-api-key";

/// Start a new mock server for testing.
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Create a client pointed at the mock server's `/api/v2/` prefix.
pub fn client_for(server: &MockServer) -> MailerLiteClient {
    MailerLiteClient::builder(API_KEY)
        .base_url(format!("{}/api/v2/", server.uri()))
        .build()
        .unwrap()
}

/// Create a JSON response with the given status.
pub fn mock_json<T: Serialize>(status: u16, body: T) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(body)
}

/// Create a MailerLite error response.
#[allow(dead_code)] // Not all test files use this
pub fn mock_api_error(status: u16, code: i64, message: &str) -> ResponseTemplate {
    mock_json(
        status,
        serde_json::json!({"error": {"code": code, "message": message}}),
    )
}

/// Mount a mock for a method and path under `/api/v2/`, requiring the API key.
pub async fn mock_endpoint(
    server: &MockServer,
    http_method: &str,
    api_path: &str,
    response: ResponseTemplate,
) {
    Mock::given(method(http_method))
        .and(path(format!("/api/v2/{api_path}")))
        .and(header("X-MailerLite-ApiKey", API_KEY))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

/// A subscriber payload as the API returns it.
#[allow(dead_code)] // Not all test files use this
pub fn subscriber_json(id: i64, email: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": "Demo",
        "email": email,
        "sent": 12,
        "opened": 5,
        "clicked": 2,
        "type": "active",
        "country_id": "LT",
        "signup_ip": null,
        "signup_timestamp": null,
        "confirmation_ip": null,
        "confirmation_timestamp": null,
        "fields": [
            {"key": "email", "value": email, "type": "TEXT"},
            {"key": "name", "value": "Demo", "type": "TEXT"}
        ],
        "date_subscribe": "2021-01-01 00:00:00",
        "date_unsubscribe": null,
        "date_created": 1609459200,
        "date_updated": null
    })
}
