//! Tests for custom field actions.

mod common;

use mailerlite::{FieldType, FieldUpdate, NewField, WeakInt};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use common::{client_for, mock_api_error, mock_endpoint, mock_json, setup_mock_server};

#[tokio::test]
async fn test_list_fields() {
    let server = setup_mock_server().await;
    mock_endpoint(
        &server,
        "GET",
        "fields",
        mock_json(
            200,
            serde_json::json!([
                {
                    "id": 1,
                    "title": "Email",
                    "key": "email",
                    "type": "TEXT",
                    "date_created": "2016-04-04 12:00:00",
                    "date_updated": "2016-04-04 12:00:00"
                },
                {
                    "id": "2",
                    "title": "Age",
                    "key": "age",
                    "type": "NUMBER",
                    "date_created": 1609459200000_i64,
                    "date_updated": null
                }
            ]),
        ),
    )
    .await;

    let client = client_for(&server);
    let fields = client.fields().list().await.unwrap();

    assert_eq!(fields.status, 200);
    assert_eq!(fields.data.len(), 2);
    assert_eq!(fields.data[0].key, "email");
    assert_eq!(fields.data[1].id, WeakInt(2));
    assert_eq!(fields.data[1].field_type, FieldType::Number);
    assert_eq!(
        fields.data[1].date_created.unwrap().to_string(),
        "2021-01-01 00:00:00"
    );
    assert!(fields.data[1].date_updated.is_none());
}

#[tokio::test]
async fn test_list_fields_empty_body() {
    let server = setup_mock_server().await;
    mock_endpoint(&server, "GET", "fields", ResponseTemplate::new(200)).await;

    let client = client_for(&server);
    let fields = client.fields().list().await.unwrap();

    assert!(fields.data.is_empty());
}

#[tokio::test]
async fn test_create_field() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/api/v2/fields"))
        .and(body_json(serde_json::json!({"title": "Company", "type": "TEXT"})))
        .respond_with(mock_json(
            201,
            serde_json::json!({
                "id": 15,
                "title": "Company",
                "key": "company",
                "type": "TEXT",
                "date_created": "2021-03-01 09:00:00",
                "date_updated": "2021-03-01 09:00:00"
            }),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let created = client
        .fields()
        .create(&NewField::new("Company", FieldType::Text))
        .await
        .unwrap();

    assert_eq!(created.status, 201);
    assert_eq!(created.data.id.get(), 15);
    assert_eq!(created.data.key, "company");
}

#[tokio::test]
async fn test_update_field() {
    let server = setup_mock_server().await;
    Mock::given(method("PUT"))
        .and(path("/api/v2/fields/15"))
        .and(body_json(serde_json::json!({"title": "Employer"})))
        .respond_with(mock_json(
            200,
            serde_json::json!({
                "id": 15,
                "title": "Employer",
                "key": "company",
                "type": "TEXT"
            }),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let updated = client
        .fields()
        .update(15, &FieldUpdate::title("Employer"))
        .await
        .unwrap();

    assert_eq!(updated.data.title, "Employer");
    assert_eq!(updated.data.key, "company");
}

#[tokio::test]
async fn test_delete_field() {
    let server = setup_mock_server().await;
    mock_endpoint(&server, "DELETE", "fields/15", ResponseTemplate::new(204)).await;

    let client = client_for(&server);
    let response = client.fields().delete(15).await.unwrap();

    assert_eq!(response.status, 204);
}

#[tokio::test]
async fn test_delete_field_ignores_body() {
    let server = setup_mock_server().await;
    mock_endpoint(
        &server,
        "DELETE",
        "fields/15",
        ResponseTemplate::new(200).set_body_string("not json"),
    )
    .await;

    let client = client_for(&server);
    assert!(client.fields().delete(15).await.is_ok());
}

#[tokio::test]
async fn test_delete_missing_field() {
    let server = setup_mock_server().await;
    mock_endpoint(
        &server,
        "DELETE",
        "fields/999",
        mock_api_error(404, 404, "Field not found"),
    )
    .await;

    let client = client_for(&server);
    let err = client.fields().delete(999).await.unwrap_err();

    let api = err.api_error().unwrap();
    assert_eq!(api.status, 404);
    assert_eq!(api.method, "DELETE");
    assert_eq!(api.detail.message, "Field not found");
    assert!(api.url.as_str().ends_with("/api/v2/fields/999"));
}
