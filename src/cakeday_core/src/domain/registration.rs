use std::collections::HashSet;

use chrono::NaiveDate;
use secrecy::Secret;
use thiserror::Error;

use super::{
    account::AccountError, birthdate::Birthdate, password::Password, role::Role,
    username::Username,
};

pub const DEFAULT_MINIMUM_AGE: u32 = 14;
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("All fields are required")]
    MissingFields,
    #[error("Birthdate must be a valid date in YYYY-MM-DD format")]
    InvalidBirthdate,
    #[error("You must be at least {minimum_age} years old to sign up")]
    UnderMinimumAge { minimum_age: u32 },
}

/// Raw signup input. Any field may be absent.
#[derive(Debug, Default)]
pub struct RegistrationForm {
    pub username: Option<String>,
    pub password: Option<Secret<String>>,
    pub birthdate: Option<String>,
}

/// Signup input that passed every policy check, with the role already decided.
#[derive(Debug, Clone)]
pub struct ValidatedRegistration {
    pub username: Username,
    pub password: Password,
    pub birthdate: Birthdate,
    pub role: Role,
}

/// Rules applied to a signup before anything is written.
///
/// Admin promotion is explicit: an account is created as admin only when its
/// username appears in `admin_usernames`.
#[derive(Debug, Clone)]
pub struct RegistrationPolicy {
    minimum_age: u32,
    admin_usernames: HashSet<String>,
}

impl RegistrationPolicy {
    pub fn new<I, S>(minimum_age: u32, admin_usernames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            minimum_age,
            admin_usernames: admin_usernames.into_iter().map(Into::into).collect(),
        }
    }

    pub fn minimum_age(&self) -> u32 {
        self.minimum_age
    }

    pub fn role_for(&self, username: &Username) -> Role {
        if self.admin_usernames.contains(username.as_str()) {
            Role::Admin
        } else {
            Role::User
        }
    }

    pub fn check_age(&self, birthdate: &Birthdate, today: NaiveDate) -> Result<(), RegistrationError> {
        let old_enough = i64::from(birthdate.age_on(today)) >= i64::from(self.minimum_age);
        if old_enough {
            Ok(())
        } else {
            Err(RegistrationError::UnderMinimumAge {
                minimum_age: self.minimum_age,
            })
        }
    }

    /// Checks run in a fixed order and the first failure wins: presence of all
    /// fields, birthdate format, then minimum age.
    pub fn validate(
        &self,
        form: RegistrationForm,
        today: NaiveDate,
    ) -> Result<ValidatedRegistration, RegistrationError> {
        let (Some(username), Some(password), Some(birthdate)) =
            (form.username, form.password, form.birthdate)
        else {
            return Err(RegistrationError::MissingFields);
        };

        let username = Username::try_from(username).map_err(|_| RegistrationError::MissingFields)?;
        let password = Password::try_from(password).map_err(|_| RegistrationError::MissingFields)?;
        let birthdate: Birthdate = birthdate.parse().map_err(|e| match e {
            AccountError::EmptyBirthdate => RegistrationError::MissingFields,
            _ => RegistrationError::InvalidBirthdate,
        })?;

        self.check_age(&birthdate, today)?;

        let role = self.role_for(&username);

        Ok(ValidatedRegistration {
            username,
            password,
            birthdate,
            role,
        })
    }
}

impl Default for RegistrationPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MINIMUM_AGE, [DEFAULT_ADMIN_USERNAME])
    }
}
