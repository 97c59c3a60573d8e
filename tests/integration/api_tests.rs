//! Live-server API tests

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080";

/// Register a throwaway user and return its credential pair
async fn signup(client: &Client, key: &str) -> (String, String) {
    let secret = format!("{}-secret", key);
    let response = client
        .post(format!("{}/signup", BASE_URL))
        .json(&json!({
            "name": "Integration",
            "key": key,
            "secret": secret
        }))
        .send()
        .await
        .expect("Failed to send signup request");

    assert!(response.status().is_success());
    (key.to_string(), secret)
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
async fn test_book_lifecycle() {
    let client = Client::new();
    let (key, sign) = signup(&client, "it-lifecycle").await;

    // Create
    let response = client
        .post(format!("{}/books", BASE_URL))
        .header("key", &key)
        .header("sign", &sign)
        .json(&json!({
            "isbn": "978-0-00-000000-0",
            "title": "Test Book",
            "author": "Au",
            "published": 2020,
            "pages": 100
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["isOk"], true);
    let book_id = body["data"]["book"]["id"].as_i64().expect("No book ID");

    // Patch status only
    let response = client
        .patch(format!("{}/books/{}", BASE_URL, book_id))
        .header("key", &key)
        .header("sign", &sign)
        .json(&json!({ "status": 2 }))
        .send()
        .await
        .expect("Failed to send request");

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["status"], 2);
    assert_eq!(body["data"]["book"]["title"], "Test Book");

    // Delete
    let response = client
        .delete(format!("{}/books/{}", BASE_URL, book_id))
        .header("key", &key)
        .header("sign", &sign)
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let response = client
        .get(format!("{}/book_by_id/{}", BASE_URL, book_id))
        .header("key", &key)
        .header("sign", &sign)
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_unauthorized_access() {
    let client = Client::new();

    let response = client
        .get(format!("{}/books", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["isOk"], false);
}

#[tokio::test]
#[ignore]
async fn test_invalid_credentials() {
    let client = Client::new();

    let response = client
        .get(format!("{}/books", BASE_URL))
        .header("key", "nobody")
        .header("sign", "nothing")
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}
