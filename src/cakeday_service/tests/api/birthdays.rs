use serde_json::{Value, json};

use crate::helpers::{TestApp, message_of};

#[tokio::test]
async fn todays_birthdays_requires_login() {
    let app = TestApp::new().await;

    let response = app.get_todays_birthdays().await;
    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(message_of(response).await, "Login required");
}

#[tokio::test]
async fn todays_birthdays_lists_matching_accounts() {
    let app = TestApp::on(2024, 3, 15).await;
    app.signup("carol", "pw", "2001-03-15").await;
    app.signup("bob", "pw", "1995-03-16").await;
    app.signup_and_login("alice", "pw", "2000-03-15").await;

    let response = app.get_todays_birthdays().await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!([
            { "username": "carol", "birthdate": "2001-03-15" },
            { "username": "alice", "birthdate": "2000-03-15" },
        ])
    );
}

#[tokio::test]
async fn admin_routes_are_forbidden_to_anonymous_callers() {
    let app = TestApp::new().await;

    for response in [
        app.get_admin_todays_birthdays().await,
        app.get_admin_all_birthdays().await,
    ] {
        assert_eq!(response.status().as_u16(), 403);
        assert_eq!(message_of(response).await, "admin privileges required");
    }
}

#[tokio::test]
async fn admin_routes_are_forbidden_to_regular_users() {
    let app = TestApp::new().await;
    app.signup_and_login("alice", "pw123", "2005-01-01").await;

    assert_eq!(app.get_admin_todays_birthdays().await.status().as_u16(), 403);
    assert_eq!(app.get_admin_all_birthdays().await.status().as_u16(), 403);
}

#[tokio::test]
async fn admin_sees_all_birthdays_sorted() {
    let app = TestApp::new().await;
    app.signup("carol", "pw", "2001-05-05").await;
    app.signup("bob", "pw", "2001-05-05").await;
    app.signup("dave", "pw", "1970-02-02").await;
    app.signup_and_login("admin", "secret", "1980-07-04").await;

    let me: Value = app.get_me().await.json().await.unwrap();
    assert_eq!(me["user"]["role"], "admin");

    let response = app.get_admin_all_birthdays().await;
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!([
            { "username": "dave", "birthdate": "1970-02-02", "role": "user" },
            { "username": "admin", "birthdate": "1980-07-04", "role": "admin" },
            { "username": "carol", "birthdate": "2001-05-05", "role": "user" },
            { "username": "bob", "birthdate": "2001-05-05", "role": "user" },
        ])
    );
}

#[tokio::test]
async fn admin_sees_todays_birthdays() {
    let app = TestApp::on(2024, 7, 4).await;
    app.signup("carol", "pw", "2001-07-04").await;
    app.signup("bob", "pw", "2001-07-05").await;
    app.signup_and_login("admin", "secret", "1980-07-04").await;

    let body: Value = app.get_admin_todays_birthdays().await.json().await.unwrap();
    assert_eq!(
        body,
        json!([
            { "username": "carol", "birthdate": "2001-07-04" },
            { "username": "admin", "birthdate": "1980-07-04" },
        ])
    );
}

#[tokio::test]
async fn admin_loses_access_after_logout() {
    let app = TestApp::new().await;
    app.signup_and_login("admin", "secret", "1980-07-04").await;
    assert_eq!(app.get_admin_all_birthdays().await.status().as_u16(), 200);

    app.post_logout().await;
    assert_eq!(app.get_admin_all_birthdays().await.status().as_u16(), 403);
}

#[tokio::test]
async fn end_to_end_registration_login_and_gate() {
    let app = TestApp::new().await;
    let alice = json!({ "username": "alice", "password": "pw123", "birthdate": "2005-01-01" });

    assert_eq!(app.post_signup(&alice).await.status().as_u16(), 201);
    assert_eq!(app.post_signup(&alice).await.status().as_u16(), 409);
    assert_eq!(app.login("alice", "wrong").await.status().as_u16(), 401);
    assert_eq!(app.login("alice", "pw123").await.status().as_u16(), 200);

    let me: Value = app.get_me().await.json().await.unwrap();
    assert_eq!(me["user"]["role"], "user");

    assert_eq!(app.get_admin_all_birthdays().await.status().as_u16(), 403);
}

#[tokio::test]
async fn sessions_are_per_client() {
    let app = TestApp::new().await;
    app.signup_and_login("admin", "secret", "1980-07-04").await;

    let other_browser = TestApp::client();
    let response = other_browser
        .get(format!("{}/admin/birthdays/all", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 403);
}
