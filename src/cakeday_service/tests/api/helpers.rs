use cakeday_adapters::{
    config::test,
    hashing::Argon2PasswordHasher,
    http::SessionCookie,
    persistence::{DashMapSessionStore, HashMapAccountStore},
};
use cakeday_core::{FixedClock, RegistrationPolicy};
use cakeday_service::CakedayService;
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{Value, json};
use tokio::net::TcpListener;

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
    pub session_store: DashMapSessionStore,
}

impl TestApp {
    /// App whose clock is pinned to 2024-06-01.
    pub async fn new() -> Self {
        Self::on(2024, 6, 1).await
    }

    pub async fn on(year: i32, month: u32, day: u32) -> Self {
        let today = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        let account_store = HashMapAccountStore::new();
        let session_store = DashMapSessionStore::new();
        // Minimum cost; hashing strength is not under test here.
        let hasher = Argon2PasswordHasher::new(1024, 1, 1).unwrap();

        let service = CakedayService::new(
            account_store,
            session_store.clone(),
            hasher,
            FixedClock(today),
            RegistrationPolicy::default(),
            SessionCookie::default(),
            None,
        );

        let listener = TcpListener::bind(test::APP_ADDRESS).await.unwrap();
        let address = format!("http://{}", listener.local_addr().unwrap());

        tokio::spawn(service.run_standalone(listener, None));

        Self {
            address,
            http_client: Self::client(),
            session_store,
        }
    }

    /// A second browser: same server, separate cookie jar.
    pub fn client() -> reqwest::Client {
        reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .unwrap()
    }

    pub async fn post_signup<Body>(&self, body: &Body) -> reqwest::Response
    where
        Body: Serialize,
    {
        self.http_client
            .post(format!("{}/signup", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_register_form(&self, form: &[(&str, &str)]) -> reqwest::Response {
        self.http_client
            .post(format!("{}/register", &self.address))
            .form(form)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_login<Body>(&self, body: &Body) -> reqwest::Response
    where
        Body: Serialize,
    {
        self.http_client
            .post(format!("{}/login", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_logout(&self) -> reqwest::Response {
        self.http_client
            .post(format!("{}/logout", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_logout(&self) -> reqwest::Response {
        self.get("/logout").await
    }

    pub async fn get_me(&self) -> reqwest::Response {
        self.get("/me").await
    }

    pub async fn get_todays_birthdays(&self) -> reqwest::Response {
        self.get("/birthdays/today").await
    }

    pub async fn get_admin_todays_birthdays(&self) -> reqwest::Response {
        self.get("/admin/birthdays/today").await
    }

    pub async fn get_admin_all_birthdays(&self) -> reqwest::Response {
        self.get("/admin/birthdays/all").await
    }

    pub async fn get_health(&self) -> reqwest::Response {
        self.get("/health").await
    }

    async fn get(&self, path: &str) -> reqwest::Response {
        self.http_client
            .get(format!("{}{}", &self.address, path))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn signup(&self, username: &str, password: &str, birthdate: &str) {
        let response = self
            .post_signup(&json!({
                "username": username,
                "password": password,
                "birthdate": birthdate,
            }))
            .await;
        assert_eq!(response.status().as_u16(), 201);
    }

    pub async fn login(&self, username: &str, password: &str) -> reqwest::Response {
        self.post_login(&json!({ "username": username, "password": password }))
            .await
    }

    pub async fn signup_and_login(&self, username: &str, password: &str, birthdate: &str) {
        self.signup(username, password, birthdate).await;
        let response = self.login(username, password).await;
        assert_eq!(response.status().as_u16(), 200);
    }
}

pub async fn message_of(response: reqwest::Response) -> String {
    let body: Value = response
        .json()
        .await
        .expect("Could not deserialize response body");
    body["message"]
        .as_str()
        .expect("Response has no message")
        .to_owned()
}
