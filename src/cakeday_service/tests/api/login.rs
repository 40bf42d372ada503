use serde_json::{Value, json};

use crate::helpers::{TestApp, message_of};

#[tokio::test]
async fn should_return_200_and_set_session_cookie() {
    let app = TestApp::new().await;
    app.signup("alice", "pw123", "2005-01-01").await;

    let response = app.login("alice", "pw123").await;
    assert_eq!(response.status().as_u16(), 200);

    let cookie = response
        .cookies()
        .find(|cookie| cookie.name() == "sid")
        .expect("No session cookie found");
    assert!(!cookie.value().is_empty());
    assert!(cookie.http_only());
    assert_eq!(cookie.path(), Some("/"));

    assert_eq!(message_of(response).await, "Login successful");
}

#[tokio::test]
async fn should_return_same_401_for_wrong_password_and_unknown_user() {
    let app = TestApp::new().await;
    app.signup("alice", "pw123", "2005-01-01").await;

    let wrong_password = app.login("alice", "nope").await;
    let unknown_user = app.login("mallory", "pw123").await;

    assert_eq!(wrong_password.status().as_u16(), 401);
    assert_eq!(unknown_user.status().as_u16(), 401);

    let wrong_password: Value = wrong_password.json().await.unwrap();
    let unknown_user: Value = unknown_user.json().await.unwrap();
    assert_eq!(wrong_password, unknown_user);
    assert_eq!(wrong_password["message"], "Invalid username or password");
}

#[tokio::test]
async fn should_return_401_if_credentials_missing() {
    let app = TestApp::new().await;
    app.signup("alice", "pw123", "2005-01-01").await;

    for body in [json!({ "username": "alice" }), json!({ "password": "pw123" })] {
        let response = app.post_login(&body).await;
        assert_eq!(response.status().as_u16(), 401, "Failed for input: {body:?}");
    }
}

#[tokio::test]
async fn should_revoke_previous_session_on_relogin() {
    let app = TestApp::new().await;
    app.signup("alice", "pw123", "2005-01-01").await;

    app.login("alice", "pw123").await;
    assert_eq!(app.session_store.len(), 1);

    app.login("alice", "pw123").await;
    assert_eq!(app.session_store.len(), 1);

    let me: Value = app.get_me().await.json().await.unwrap();
    assert_eq!(me["loggedIn"], true);
}

#[tokio::test]
async fn should_not_log_in_on_failed_attempt() {
    let app = TestApp::new().await;
    app.signup("alice", "pw123", "2005-01-01").await;

    let response = app.login("alice", "nope").await;
    assert!(response.cookies().all(|cookie| cookie.name() != "sid"));

    let me: Value = app.get_me().await.json().await.unwrap();
    assert_eq!(me, json!({ "loggedIn": false }));
}
