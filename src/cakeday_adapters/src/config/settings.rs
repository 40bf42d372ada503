use std::time::Duration;

use ::config::{Config, ConfigError, Environment, File};
use axum::http::HeaderValue;
use cakeday_core::RegistrationPolicy;
use secrecy::Secret;
use serde::Deserialize;

use super::constants::{defaults, env, minimums};

/// Origins allowed to make credentialed cross-origin requests.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct AllowedOrigins(Vec<String>);

impl AllowedOrigins {
    pub fn new(origins: Vec<String>) -> Self {
        Self(origins)
    }

    pub fn contains(&self, origin: &HeaderValue) -> bool {
        origin
            .to_str()
            .is_ok_and(|origin| self.0.iter().any(|allowed| allowed == origin))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSetting {
    pub host: String,
    pub port: u16,
    /// Directory served for paths no route matches.
    pub assets_dir: Option<String>,
    #[serde(default)]
    pub allowed_origins: AllowedOrigins,
}

impl ServerSetting {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSetting {
    pub url: Secret<String>,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionSetting {
    pub cookie_name: String,
    pub secure_cookie: bool,
    pub time_to_live_secs: Option<u64>,
}

impl SessionSetting {
    /// `None` when no lifetime is configured. Zero is not a lifetime and is
    /// rejected by [`Settings::load`].
    pub fn time_to_live(&self) -> Option<Duration> {
        self.time_to_live_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    /// How often expired sessions are swept: the lifetime itself when shorter
    /// than the default interval.
    pub fn purge_interval(&self) -> Option<Duration> {
        self.time_to_live().map(|time_to_live| {
            time_to_live.min(Duration::from_secs(defaults::SESSION_PURGE_INTERVAL_SECS))
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegistrationSetting {
    pub minimum_age: u32,
    pub admin_usernames: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PasswordHashingSetting {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSetting,
    pub database: DatabaseSetting,
    pub session: SessionSetting,
    pub registration: RegistrationSetting,
    pub password_hashing: PasswordHashingSetting,
}

impl Settings {
    /// Layers, lowest priority first: built-in defaults, `config/default.json`,
    /// `config/local.json`, `CAKEDAY__*` variables, then bare `PORT` and
    /// `DATABASE_URL`. A `.env` file is read into the environment first.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = Environment::with_prefix(env::PREFIX)
            .prefix_separator(env::SEPARATOR)
            .separator(env::SEPARATOR)
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("server.allowed_origins")
            .with_list_parse_key("registration.admin_usernames");

        Self::builder()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(environment)
            .set_override_option("server.port", std::env::var(env::PORT).ok())?
            .set_override_option("database.url", std::env::var(env::DATABASE_URL).ok())?
            .build()?
            .try_deserialize::<Self>()?
            .validate()
    }

    /// Built-in defaults only, no files or environment.
    pub fn defaults() -> Result<Self, ConfigError> {
        Self::builder()?.build()?.try_deserialize::<Self>()?.validate()
    }

    /// Rejects values that deserialize fine but cannot be run with.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.session.time_to_live_secs == Some(0) {
            return Err(ConfigError::Message(
                "session.time_to_live_secs must be greater than zero".to_string(),
            ));
        }

        let hashing = &self.password_hashing;
        if hashing.memory_kib < minimums::HASH_MEMORY_KIB {
            return Err(ConfigError::Message(format!(
                "password_hashing.memory_kib must be at least {}",
                minimums::HASH_MEMORY_KIB
            )));
        }
        if hashing.iterations < minimums::HASH_ITERATIONS {
            return Err(ConfigError::Message(format!(
                "password_hashing.iterations must be at least {}",
                minimums::HASH_ITERATIONS
            )));
        }
        if hashing.parallelism == 0 {
            return Err(ConfigError::Message(
                "password_hashing.parallelism must be at least 1".to_string(),
            ));
        }

        Ok(self)
    }

    fn builder() -> Result<::config::ConfigBuilder<::config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", defaults::HOST)?
            .set_default("server.port", defaults::PORT)?
            .set_default("server.assets_dir", defaults::ASSETS_DIR)?
            .set_default("server.allowed_origins", Vec::<String>::new())?
            .set_default("database.url", defaults::DATABASE_URL)?
            .set_default("database.max_connections", defaults::MAX_CONNECTIONS)?
            .set_default("session.cookie_name", defaults::SESSION_COOKIE_NAME)?
            .set_default("session.secure_cookie", false)?
            .set_default(
                "session.time_to_live_secs",
                defaults::SESSION_TIME_TO_LIVE_SECS,
            )?
            .set_default("registration.minimum_age", defaults::MINIMUM_AGE)?
            .set_default("registration.admin_usernames", vec![defaults::ADMIN_USERNAME])?
            .set_default("password_hashing.memory_kib", defaults::HASH_MEMORY_KIB)?
            .set_default("password_hashing.iterations", defaults::HASH_ITERATIONS)?
            .set_default("password_hashing.parallelism", defaults::HASH_PARALLELISM)
    }

    pub fn registration_policy(&self) -> RegistrationPolicy {
        RegistrationPolicy::new(
            self.registration.minimum_age,
            self.registration.admin_usernames.iter().cloned(),
        )
    }
}
