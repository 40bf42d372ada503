use fake::{Fake, faker::internet::en::Username};
use serde_json::json;

use crate::helpers::{TestApp, message_of};

#[tokio::test]
async fn should_return_201_if_valid_input() {
    let app = TestApp::new().await;
    let username: String = Username().fake();

    let response = app
        .post_signup(&json!({
            "username": username,
            "password": "pw123",
            "birthdate": "2005-01-01",
        }))
        .await;

    assert_eq!(response.status().as_u16(), 201);
    assert_eq!(message_of(response).await, "Registration successful");
}

#[tokio::test]
async fn should_return_409_if_username_already_exists() {
    let app = TestApp::new().await;
    app.signup("alice", "pw123", "2005-01-01").await;

    let response = app
        .post_signup(&json!({
            "username": "alice",
            "password": "other",
            "birthdate": "1990-01-01",
        }))
        .await;

    assert_eq!(response.status().as_u16(), 409);
    assert_eq!(message_of(response).await, "Username already taken");
}

#[tokio::test]
async fn should_return_400_if_missing_fields() {
    let app = TestApp::new().await;

    let test_cases = [
        json!({ "password": "pw123", "birthdate": "2005-01-01" }),
        json!({ "username": "alice", "birthdate": "2005-01-01" }),
        json!({ "username": "alice", "password": "pw123" }),
        json!({ "username": "", "password": "pw123", "birthdate": "2005-01-01" }),
        json!({ "username": "alice", "password": "", "birthdate": "2005-01-01" }),
        json!({}),
    ];

    for test_case in test_cases.iter() {
        let response = app.post_signup(test_case).await;
        assert_eq!(
            response.status().as_u16(),
            400,
            "Failed for input: {:?}",
            test_case
        );
        assert_eq!(message_of(response).await, "All fields are required");
    }
}

#[tokio::test]
async fn should_return_400_if_birthdate_is_malformed() {
    let app = TestApp::new().await;

    for birthdate in ["01/01/2005", "2005-13-01", "2005-02-30", "yesterday"] {
        let response = app
            .post_signup(&json!({
                "username": "alice",
                "password": "pw123",
                "birthdate": birthdate,
            }))
            .await;
        assert_eq!(
            response.status().as_u16(),
            400,
            "Failed for birthdate: {birthdate}"
        );
        assert_eq!(
            message_of(response).await,
            "Birthdate must be a valid date in YYYY-MM-DD format"
        );
    }
}

#[tokio::test]
async fn should_return_400_if_under_minimum_age() {
    let app = TestApp::new().await;

    // Turns 14 tomorrow.
    let response = app
        .post_signup(&json!({
            "username": "young",
            "password": "pw123",
            "birthdate": "2010-06-02",
        }))
        .await;

    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(
        message_of(response).await,
        "You must be at least 14 years old to sign up"
    );

    // Nothing was stored: the same name is still free.
    app.signup("young", "pw123", "2010-06-01").await;
}

#[tokio::test]
async fn should_accept_form_posts_on_register() {
    let app = TestApp::new().await;

    let response = app
        .post_register_form(&[
            ("username", "alice"),
            ("password", "pw123"),
            ("birthdate", "2005-01-01"),
        ])
        .await;
    assert_eq!(response.status().as_u16(), 201);

    let response = app.login("alice", "pw123").await;
    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn should_return_400_if_body_is_malformed() {
    let app = TestApp::new().await;

    let response = app
        .http_client
        .post(format!("{}/signup", &app.address))
        .header("Content-Type", "application/json")
        .body("{not json")
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 400);
}
