pub mod birthdays;
pub mod current_identity;
pub mod login;
pub mod logout;
pub mod register;
pub mod verify_identity;
