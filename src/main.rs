use cakeday::{
    Argon2PasswordHasher, CakedayService, DashMapSessionStore, SystemClock,
    adapters::{config::Settings, http::SessionCookie},
    configure_sqlite, spawn_session_purge,
};
use color_eyre::eyre::Result;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let settings = Settings::load()?;

    let account_store = configure_sqlite(&settings.database).await?;

    let session_store = match (
        settings.session.time_to_live(),
        settings.session.purge_interval(),
    ) {
        (Some(time_to_live), Some(purge_interval)) => {
            let store = DashMapSessionStore::with_time_to_live(time_to_live);
            spawn_session_purge(store.clone(), purge_interval);
            store
        }
        _ => DashMapSessionStore::new(),
    };

    let hashing = &settings.password_hashing;
    let hasher =
        Argon2PasswordHasher::new(hashing.memory_kib, hashing.iterations, hashing.parallelism)?;

    let session_cookie = SessionCookie::new(
        settings.session.cookie_name.clone(),
        settings.session.secure_cookie,
    );

    let service = CakedayService::new(
        account_store,
        session_store,
        hasher,
        SystemClock,
        settings.registration_policy(),
        session_cookie,
        settings.server.assets_dir.clone(),
    );

    let allowed_origins = settings.server.allowed_origins.clone();
    let allowed_origins = (!allowed_origins.is_empty()).then_some(allowed_origins);

    let listener = tokio::net::TcpListener::bind(settings.server.address()).await?;
    tracing::info!("Starting cakeday service...");

    service.run_standalone(listener, allowed_origins).await?;

    Ok(())
}

pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
