use serde_json::json;
use wiremock::matchers::{any, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::{assert_json_response, email_body, SentTo, TestApp, OWNER_EMAIL};

#[tokio::test]
async fn subscribe_returns_a_200_and_notifies_owner_then_subscriber() {
    let app = TestApp::spawn().await;

    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&app.email_server)
        .await;

    let response = app.post_subscribe(&json!({"email": "a@b.com"})).await;
    assert_json_response(response, 200, json!({"message": "Subscription successful"})).await;

    assert_eq!(app.email_recipients().await, [OWNER_EMAIL, "a@b.com"]);
}

#[tokio::test]
async fn subscribe_sends_the_welcome_email_to_the_subscriber() {
    let app = TestApp::spawn().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .mount(&app.email_server)
        .await;

    app.post_subscribe(&json!({"email": "a@b.com"})).await;

    let requests = app.email_server.received_requests().await.unwrap();
    let owner = email_body(&requests[0]);
    let welcome = email_body(&requests[1]);
    assert_eq!(owner["Subject"], "New Newsletter Subscription - Livingston Craft");
    assert!(owner["HtmlBody"].as_str().unwrap().contains("a@b.com"));
    assert_eq!(welcome["Subject"], "Welcome to Livingston Craft Newsletter!");
}

#[tokio::test]
async fn subscribe_returns_a_400_when_email_is_missing() {
    let app = TestApp::spawn().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    let test_cases = vec![
        (json!({}), "missing the email"),
        (json!({"email": ""}), "an empty email"),
        (json!({"email": null}), "a null email"),
        (json!({"email": false}), "a false email"),
        (json!({"email": 0}), "a zero email"),
    ];

    for (body, description) in test_cases {
        let response = app.post_subscribe(&body).await;
        assert_eq!(
            400,
            response.status(),
            "The API did not fail with 400 Bad Request when the payload was {description}"
        );
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body, json!({"error": "Email is required"}));
    }
}

#[tokio::test]
async fn subscribe_returns_a_400_when_email_is_malformed() {
    let app = TestApp::spawn().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    let test_cases = vec![
        ("not-an-email", "missing the @"),
        ("ursula@localhost", "missing a dot after the @"),
        ("@domain.com", "missing the local part"),
        ("ursula le@guin.com", "containing whitespace"),
    ];

    for (email, description) in test_cases {
        let response = app.post_subscribe(&json!({ "email": email })).await;
        assert_eq!(
            400,
            response.status(),
            "The API did not fail with 400 Bad Request when the email was {description}"
        );
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body, json!({"error": "Invalid email format"}));
    }
}

#[tokio::test]
async fn subscribe_returns_a_400_when_email_is_not_a_string() {
    let app = TestApp::spawn().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    for email in [json!(123), json!(true)] {
        let response = app.post_subscribe(&json!({ "email": email })).await;
        assert_json_response(response, 400, json!({"error": "Invalid email format"})).await;
    }
}

#[tokio::test]
async fn subscribe_returns_a_500_when_the_owner_notification_fails() {
    let app = TestApp::spawn().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let response = app.post_subscribe(&json!({"email": "a@b.com"})).await;
    assert_json_response(response, 500, json!({"error": "Failed to process subscription"})).await;

    assert_eq!(app.email_recipients().await, [OWNER_EMAIL]);
}

#[tokio::test]
async fn subscribe_returns_a_500_when_the_welcome_email_fails() {
    let app = TestApp::spawn().await;

    Mock::given(SentTo(OWNER_EMAIL))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;
    Mock::given(SentTo("a@b.com"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let response = app.post_subscribe(&json!({"email": "a@b.com"})).await;
    assert_json_response(response, 500, json!({"error": "Failed to process subscription"})).await;
}

#[tokio::test]
async fn subscribe_returns_a_500_for_a_malformed_body() {
    let app = TestApp::spawn().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    let response = app.post_raw("/api/subscribe", "{\"email\": ").await;
    assert_json_response(response, 500, json!({"error": "Failed to process subscription"})).await;
}

#[tokio::test]
async fn subscribing_twice_sends_four_emails() {
    let app = TestApp::spawn().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(4)
        .mount(&app.email_server)
        .await;

    for _ in 0..2 {
        let response = app.post_subscribe(&json!({"email": "a@b.com"})).await;
        assert_eq!(200, response.status());
    }
}
