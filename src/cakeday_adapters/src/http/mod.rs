pub mod extract;
pub mod routes;
pub mod session;

pub use extract::JsonOrForm;
pub use session::SessionCookie;
