pub mod birthdays;
pub mod error;
pub mod health;
pub mod login;
pub mod logout;
pub mod me;
pub mod signup;

pub use birthdays::{admin_all_birthdays, admin_todays_birthdays, todays_birthdays};
pub use error::{ApiError, MessageResponse};
pub use health::health;
pub use login::login;
pub use logout::logout;
pub use me::me;
pub use signup::signup;
