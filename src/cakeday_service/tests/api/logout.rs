use serde_json::{Value, json};

use crate::helpers::{TestApp, message_of};

#[tokio::test]
async fn should_end_session_and_clear_cookie() {
    let app = TestApp::new().await;
    app.signup_and_login("alice", "pw123", "2005-01-01").await;

    let response = app.post_logout().await;
    assert_eq!(response.status().as_u16(), 200);

    let cleared = response
        .cookies()
        .find(|cookie| cookie.name() == "sid")
        .expect("Session cookie was not cleared");
    assert!(cleared.value().is_empty());

    assert_eq!(message_of(response).await, "Logged out");
    assert!(app.session_store.is_empty());

    let me: Value = app.get_me().await.json().await.unwrap();
    assert_eq!(me, json!({ "loggedIn": false }));
}

#[tokio::test]
async fn should_be_idempotent() {
    let app = TestApp::new().await;
    app.signup_and_login("alice", "pw123", "2005-01-01").await;

    assert_eq!(app.post_logout().await.status().as_u16(), 200);
    assert_eq!(app.post_logout().await.status().as_u16(), 200);
}

#[tokio::test]
async fn should_succeed_without_a_session() {
    let app = TestApp::new().await;

    let response = app.get_logout().await;
    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn should_accept_get() {
    let app = TestApp::new().await;
    app.signup_and_login("alice", "pw123", "2005-01-01").await;

    assert_eq!(app.get_logout().await.status().as_u16(), 200);
    assert!(app.session_store.is_empty());
}
