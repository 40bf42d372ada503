pub mod authorization;
pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    account::{Account, AccountError, AccountId, HashedPassword, NewAccount},
    birthdate::Birthdate,
    password::Password,
    registration::{RegistrationError, RegistrationForm, RegistrationPolicy, ValidatedRegistration},
    role::Role,
    session::{SessionIdentity, SessionToken},
    username::Username,
};

pub use ports::{
    repositories::{AccountOrder, AccountStore, AccountStoreError, SessionStore, SessionStoreError},
    services::{Clock, FixedClock, PasswordHasher, PasswordHasherError},
};

pub use authorization::{AuthorizationError, require_login, require_role};
