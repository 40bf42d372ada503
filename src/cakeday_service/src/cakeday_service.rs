use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderValue, Method, request},
    routing::{get, post},
};
use cakeday_adapters::{
    config::AllowedOrigins,
    http::{
        SessionCookie,
        routes::{
            admin_all_birthdays, admin_todays_birthdays, health, login, logout, me, signup,
            todays_birthdays,
        },
    },
};
use cakeday_core::{AccountStore, Clock, PasswordHasher, RegistrationPolicy, SessionStore};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// Account, session and birthday routes wired to their stores.
pub struct CakedayService {
    router: Router,
}

impl CakedayService {
    /// Create a new CakedayService from its collaborators
    ///
    /// # Arguments
    /// * `account_store` - Where accounts live (must be Clone)
    /// * `session_store` - Server-side session table (must be Clone)
    /// * `hasher` - Password hashing primitive
    /// * `clock` - Source of "today" for age checks and birthday queries
    /// * `policy` - Minimum age and admin usernames applied at signup
    /// * `session_cookie` - Name and flags of the session cookie
    /// * `assets_dir` - Static files served for unmatched paths, if any
    ///
    /// Each route is given only the state it needs.
    pub fn new<A, S, H, C>(
        account_store: A,
        session_store: S,
        hasher: H,
        clock: C,
        policy: RegistrationPolicy,
        session_cookie: SessionCookie,
        assets_dir: Option<String>,
    ) -> Self
    where
        A: AccountStore + Clone + 'static,
        S: SessionStore + Clone + 'static,
        H: PasswordHasher + Clone + 'static,
        C: Clock + Clone + 'static,
    {
        let policy = Arc::new(policy);

        let router: Router = Router::new()
            // Signup needs the account store, the hasher, today's date and the policy
            .route("/signup", post(signup::<A, H, C>))
            .route("/register", post(signup::<A, H, C>))
            .with_state((
                account_store.clone(),
                hasher.clone(),
                clock.clone(),
                policy,
            ))
            // Login verifies against the account store and opens a session
            .route("/login", post(login::<A, H, S>))
            .with_state((
                account_store.clone(),
                hasher,
                session_store.clone(),
                session_cookie.clone(),
            ))
            // Logout only touches the session store
            .route("/logout", get(logout::<S>).post(logout::<S>))
            .with_state((session_store.clone(), session_cookie.clone()))
            // Identity and birthday routes read the session, then the account store
            .route("/me", get(me::<A, S, C>))
            .route("/birthdays/today", get(todays_birthdays::<A, S, C>))
            .route(
                "/admin/birthdays/today",
                get(admin_todays_birthdays::<A, S, C>),
            )
            .route("/admin/birthdays/all", get(admin_all_birthdays::<A, S, C>))
            .with_state((account_store, session_store, clock, session_cookie))
            .route("/health", get(health));

        let router = match assets_dir {
            Some(assets_dir) => {
                let index = format!("{assets_dir}/index.html");
                router.fallback_service(ServeDir::new(assets_dir).fallback(ServeFile::new(index)))
            }
            None => router,
        };

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the service into a router that can be mounted on another router
    ///
    /// # Arguments
    /// * `allowed_origins` - Optional list of allowed CORS origins
    pub fn as_nested_router(mut self, allowed_origins: Option<AllowedOrigins>) -> Router {
        if let Some(allowed_origins) = allowed_origins {
            let cors = CorsLayer::new()
                .allow_methods([Method::GET, Method::POST])
                .allow_credentials(true)
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        allowed_origins.contains(origin)
                    },
                ));

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    /// Run the service as a standalone server
    ///
    /// # Arguments
    /// * `listener` - TCP listener to bind the server to
    /// * `allowed_origins` - Optional list of allowed CORS origins
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Result<(), std::io::Error> {
        let router = self.as_nested_router(allowed_origins);

        tracing::info!("Cakeday service listening on {}", listener.local_addr()?);

        axum_server::Server::<std::net::SocketAddr>::from_listener(listener)
            .serve(router.into_make_service())
            .await
    }
}
