use serde_json::{Value, json};

use crate::helpers::TestApp;

#[tokio::test]
async fn should_report_anonymous_without_session() {
    let app = TestApp::new().await;

    let response = app.get_me().await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "loggedIn": false }));
}

#[tokio::test]
async fn should_report_identity_and_birthday_flag() {
    let app = TestApp::new().await;
    app.signup_and_login("alice", "pw123", "2005-01-01").await;

    let body: Value = app.get_me().await.json().await.unwrap();

    assert_eq!(body["loggedIn"], true);
    assert_eq!(body["user"]["username"], "alice");
    assert_eq!(body["user"]["role"], "user");
    assert!(body["user"]["id"].is_i64());
    assert!(body["user"].get("password").is_none());
    assert_eq!(body["birthdayToday"], false);
}

#[tokio::test]
async fn should_flag_birthday_ignoring_year() {
    let app = TestApp::on(2024, 3, 15).await;
    app.signup_and_login("alice", "pw123", "2000-03-15").await;

    let body: Value = app.get_me().await.json().await.unwrap();
    assert_eq!(body["birthdayToday"], true);
}

#[tokio::test]
async fn should_ignore_unknown_session_cookie() {
    let app = TestApp::new().await;

    let response = app
        .http_client
        .get(format!("{}/me", &app.address))
        .header("Cookie", "sid=forged")
        .send()
        .await
        .expect("Failed to execute request.");

    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "loggedIn": false }));
}

#[tokio::test]
async fn health_check_works() {
    let app = TestApp::new().await;

    let response = app.get_health().await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "status": "ok" }));
}
