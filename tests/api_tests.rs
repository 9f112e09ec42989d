//! API integration tests
//!
//! These run against a live server started with the default (memory) backend:
//! `cargo run`, then `cargo test -- --ignored`.

use jsonwebtoken::{encode, EncodingKey, Header};
use reqwest::Client;
use serde_json::{json, Value};
use std::time::{SystemTime, UNIX_EPOCH};

use phonedesk_server::api::UserClaims;

const BASE_URL: &str = "http://localhost:8080/api/v1";

/// Development JWT secret from config/default.toml
const DEV_SECRET: &str = "change-this-secret-in-production";

/// Mint a bearer token the way the identity provider would
fn auth_token() -> String {
    let exp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock before unix epoch")
        .as_secs() as usize
        + 3600;

    let claims = UserClaims {
        sub: "integration-tests".to_string(),
        email: Some("tests@example.com".to_string()),
        exp,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(DEV_SECRET.as_bytes()),
    )
    .expect("Failed to encode token")
}

async fn create_test_phone(client: &Client, token: &str) -> Value {
    let response = client
        .post(format!("{}/phones", BASE_URL))
        .bearer_auth(token)
        .json(&json!({
            "phone_number": "13800009999",
            "model": "Test Phone",
            "purchase_date": "2024-01-01"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    response.json().await.expect("Failed to parse response")
}

async fn create_test_employee(client: &Client, token: &str) -> Value {
    let response = client
        .post(format!("{}/employees", BASE_URL))
        .bearer_auth(token)
        .json(&json!({
            "name": "Test Employee",
            "department": "QA",
            "position": "Tester",
            "email": "test.employee@example.com"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    response.json().await.expect("Failed to parse response")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_missing_token_is_rejected() {
    let client = Client::new();

    let response = client
        .get(format!("{}/phones", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_list_phones() {
    let client = Client::new();
    let token = auth_token();

    let response = client
        .get(format!("{}/phones", BASE_URL))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body.is_array());
}

#[tokio::test]
#[ignore]
async fn test_create_and_delete_phone() {
    let client = Client::new();
    let token = auth_token();

    let phone = create_test_phone(&client, &token).await;
    assert_eq!(phone["status"], "Available");
    let phone_id = phone["id"].as_str().expect("No phone ID");

    let response = client
        .delete(format!("{}/phones/{}", BASE_URL, phone_id))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 204);
}

#[tokio::test]
#[ignore]
async fn test_allocate_and_unallocate_flow() {
    let client = Client::new();
    let token = auth_token();

    let phone = create_test_phone(&client, &token).await;
    let employee = create_test_employee(&client, &token).await;
    let phone_id = phone["id"].as_str().expect("No phone ID");
    let employee_id = employee["id"].as_str().expect("No employee ID");

    // Allocate
    let response = client
        .post(format!("{}/allocations", BASE_URL))
        .bearer_auth(&token)
        .json(&json!({
            "phone_id": phone_id,
            "employee_id": employee_id,
            "notes": "integration test"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    let allocation: Value = response.json().await.expect("Failed to parse response");
    let allocation_id = allocation["id"].as_str().expect("No allocation ID");

    // Phone is now Allocated
    let phone: Value = client
        .get(format!("{}/phones/{}", BASE_URL, phone_id))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(phone["status"], "Allocated");

    // A second allocation for the same phone is rejected
    let response = client
        .post(format!("{}/allocations", BASE_URL))
        .bearer_auth(&token)
        .json(&json!({
            "phone_id": phone_id,
            "employee_id": employee_id
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 422);

    // Deleting the allocated phone is rejected
    let response = client
        .delete(format!("{}/phones/{}", BASE_URL, phone_id))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 422);

    // Unallocate
    let response = client
        .delete(format!("{}/allocations/{}", BASE_URL, allocation_id))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 204);

    // Phone is Available again
    let phone: Value = client
        .get(format!("{}/phones/{}", BASE_URL, phone_id))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(phone["status"], "Available");

    // Cleanup
    client
        .delete(format!("{}/phones/{}", BASE_URL, phone_id))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to send request");
    client
        .delete(format!("{}/employees/{}", BASE_URL, employee_id))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to send request");
}

#[tokio::test]
#[ignore]
async fn test_phone_details_view() {
    let client = Client::new();
    let token = auth_token();

    let response = client
        .get(format!("{}/phones/details", BASE_URL))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let entries = body.as_array().expect("Expected an array");
    for entry in entries {
        let allocated = entry["phone"]["status"] == "Allocated";
        // Allocated phones carry allocation detail unless the employee is gone
        if !allocated {
            assert!(entry["allocation"].is_null());
        }
    }
}

#[tokio::test]
#[ignore]
async fn test_stats() {
    let client = Client::new();
    let token = auth_token();

    let response = client
        .get(format!("{}/stats", BASE_URL))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["phones"]["total"].is_number());
    assert!(body["employees"]["total"].is_number());
    assert!(body["allocations"]["by_department"].is_array());
    assert!(body["allocations"]["recent"].is_array());

    let total = body["phones"]["total"].as_i64().unwrap();
    let sum = body["phones"]["available"].as_i64().unwrap()
        + body["phones"]["allocated"].as_i64().unwrap()
        + body["phones"]["maintenance"].as_i64().unwrap();
    assert_eq!(total, sum);
}
