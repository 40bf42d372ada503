pub mod use_cases;


pub use use_cases::{
    birthdays::{BirthdayEntry, BirthdayListing, BirthdayQueryUseCase},
    current_identity::CurrentIdentityUseCase,
    login::{EstablishedSession, LoginError, LoginUseCase},
    logout::{LogoutError, LogoutUseCase},
    register::{RegisterError, RegisterUseCase},
    verify_identity::{VerifyIdentityError, VerifyIdentityUseCase},
};
