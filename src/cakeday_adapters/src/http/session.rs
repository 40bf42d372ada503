use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use cakeday_application::CurrentIdentityUseCase;
use cakeday_core::{SessionIdentity, SessionStore, SessionStoreError, SessionToken};

use crate::config::defaults;

/// Where the session token travels: a single HTTP-only cookie.
///
/// The cookie carries no `Max-Age`, so browsers drop it when they close.
#[derive(Debug, Clone)]
pub struct SessionCookie {
    name: String,
    secure: bool,
}

impl SessionCookie {
    pub fn new(name: impl Into<String>, secure: bool) -> Self {
        Self {
            name: name.into(),
            secure,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn token(&self, jar: &CookieJar) -> Option<SessionToken> {
        jar.get(&self.name)
            .map(Cookie::value)
            .filter(|value| !value.is_empty())
            .map(SessionToken::from)
    }

    pub fn build(&self, token: &SessionToken) -> Cookie<'static> {
        Cookie::build((self.name.clone(), token.as_str().to_owned()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure)
            .build()
    }

    /// Template handed to `CookieJar::remove`. Path must match the one set at login.
    pub fn removal(&self) -> Cookie<'static> {
        Cookie::build((self.name.clone(), "")).path("/").build()
    }

    /// Identity bound to the request's session cookie, if any.
    pub async fn current_identity<S>(
        &self,
        session_store: &S,
        jar: &CookieJar,
    ) -> Result<Option<SessionIdentity>, SessionStoreError>
    where
        S: SessionStore,
    {
        let token = self.token(jar);
        CurrentIdentityUseCase::new(session_store)
            .execute(token.as_ref())
            .await
    }
}

impl Default for SessionCookie {
    fn default() -> Self {
        Self::new(defaults::SESSION_COOKIE_NAME, false)
    }
}
