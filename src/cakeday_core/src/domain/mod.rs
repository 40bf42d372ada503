pub mod account;
pub mod birthdate;
pub mod password;
pub mod registration;
pub mod role;
pub mod session;
pub mod username;
