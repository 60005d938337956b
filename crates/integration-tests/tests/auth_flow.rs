//! Integration tests for the auth endpoints, at the wire level.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The storage gateway running (cargo run -p voltura-server)
//!
//! Run with: cargo test -p voltura-integration-tests -- --ignored

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};
use uuid::Uuid;

use voltura_integration_tests::gateway_base_url;

/// A unique throwaway email per test run.
fn fresh_email() -> String {
    format!("it-{}@example.com", Uuid::new_v4().simple())
}

async fn signup(client: &Client, email: &str, password: &str) -> reqwest::Response {
    client
        .post(format!("{}/auth/signup", gateway_base_url()))
        .json(&json!({
            "email": email,
            "password": password,
            "name": "Integration Tester",
            "company": "PT. Uji Coba",
            "phone": "0812000000",
        }))
        .send()
        .await
        .expect("signup request failed")
}

async fn signin(client: &Client, email: &str, password: &str) -> Value {
    let resp = client
        .post(format!("{}/auth/signin", gateway_base_url()))
        .json(&json!({ "email": email, "password": password }))
        .send()
        .await
        .expect("signin request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    resp.json().await.expect("signin body was not JSON")
}

#[tokio::test]
#[ignore = "Requires running storage gateway"]
async fn test_health() {
    let resp = reqwest::get(format!("{}/health", gateway_base_url()))
        .await
        .expect("health request failed");
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.expect("health body was not JSON");
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
#[ignore = "Requires running storage gateway"]
async fn test_signup_then_signin() {
    let client = Client::new();
    let email = fresh_email();

    let resp = signup(&client, &email, "secret7").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("signup body was not JSON");
    assert_eq!(body["success"], true);
    assert_eq!(body["user"]["email"], email.as_str());
    assert!(body["user"].get("password").is_none());
    assert!(body["user"].get("password_hash").is_none());

    let body = signin(&client, &email, "secret7").await;
    assert_eq!(body["success"], true);
    assert!(body["session"]["access_token"].is_string());
}

#[tokio::test]
#[ignore = "Requires running storage gateway"]
async fn test_duplicate_signup_returns_user_exists() {
    let client = Client::new();
    let email = fresh_email();

    let resp = signup(&client, &email, "secret7").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = signup(&client, &email, "another7").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("error body was not JSON");
    assert_eq!(body["errorCode"], "USER_EXISTS");
}

#[tokio::test]
#[ignore = "Requires running storage gateway"]
async fn test_wrong_password_is_rejected() {
    let client = Client::new();
    let email = fresh_email();

    let resp = signup(&client, &email, "secret7").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .post(format!("{}/auth/signin", gateway_base_url()))
        .json(&json!({ "email": email, "password": "wrong" }))
        .send()
        .await
        .expect("signin request failed");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("error body was not JSON");
    assert!(body.get("errorCode").is_none());
}

#[tokio::test]
#[ignore = "Requires running storage gateway"]
async fn test_profile_requires_bearer_token() {
    let client = Client::new();

    let resp = client
        .get(format!("{}/auth/profile", gateway_base_url()))
        .send()
        .await
        .expect("profile request failed");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = client
        .get(format!("{}/auth/profile", gateway_base_url()))
        .bearer_auth("not-a-real-token")
        .send()
        .await
        .expect("profile request failed");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "Requires running storage gateway"]
async fn test_profile_roundtrip() {
    let client = Client::new();
    let email = fresh_email();

    let resp = signup(&client, &email, "secret7").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = signin(&client, &email, "secret7").await;
    let token = body["session"]["access_token"]
        .as_str()
        .expect("missing access token")
        .to_owned();

    let resp = client
        .post(format!("{}/user/profile", gateway_base_url()))
        .bearer_auth(&token)
        .json(&json!({
            "name": "Renamed",
            "email": email,
            "company": "PT. Baru",
            "phone": "0899",
        }))
        .send()
        .await
        .expect("profile save failed");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .get(format!("{}/auth/profile", gateway_base_url()))
        .bearer_auth(&token)
        .send()
        .await
        .expect("profile fetch failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("profile body was not JSON");
    assert_eq!(body["user"]["name"], "Renamed");
    assert_eq!(body["user"]["company"], "PT. Baru");
}
