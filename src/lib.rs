//! # Cakeday - account, session and birthday service
//!
//! Facade crate that re-exports the public APIs of the cakeday components.
//!
//! ## Structure
//!
//! - **Core domain types**: `Username`, `Password`, `Birthdate`, `Role`, `Account`, etc.
//! - **Ports**: `AccountStore`, `SessionStore`, `PasswordHasher`, `Clock`
//! - **Use cases**: `RegisterUseCase`, `LoginUseCase`, `BirthdayQueryUseCase`, etc.
//! - **Adapters**: `SqliteAccountStore`, `DashMapSessionStore`, `Argon2PasswordHasher`, etc.
//! - **Service**: `CakedayService` - the router with every route wired up

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use cakeday_core::*;
}

pub use cakeday_core::{
    Account, AccountError, AccountId, Birthdate, Password, RegistrationError, RegistrationForm,
    RegistrationPolicy, Role, SessionIdentity, SessionToken, Username,
};

// ============================================================================
// Ports
// ============================================================================

pub use cakeday_core::{
    AccountOrder, AccountStore, AccountStoreError, Clock, FixedClock, PasswordHasher,
    PasswordHasherError, SessionStore, SessionStoreError,
};

pub use cakeday_core::{AuthorizationError, require_login, require_role};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use cakeday_application::*;
}

pub use cakeday_application::{
    BirthdayQueryUseCase, CurrentIdentityUseCase, LoginUseCase, LogoutUseCase, RegisterUseCase,
    VerifyIdentityUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// HTTP routes, extractors and the session cookie
    pub mod http {
        pub use cakeday_adapters::http::*;
    }

    pub mod persistence {
        pub use cakeday_adapters::persistence::*;
    }

    pub mod hashing {
        pub use cakeday_adapters::hashing::*;
    }

    /// Configuration
    pub mod config {
        pub use cakeday_adapters::config::*;
    }

    pub use cakeday_adapters::clock::SystemClock;
}

pub use cakeday_adapters::{
    clock::SystemClock,
    hashing::Argon2PasswordHasher,
    persistence::{DashMapSessionStore, HashMapAccountStore, SqliteAccountStore},
};

// ============================================================================
// Service (Main Entry Point)
// ============================================================================

pub use cakeday_service::{CakedayService, configure_sqlite, get_sqlite_pool, spawn_session_purge};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use http;
