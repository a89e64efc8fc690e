use std::sync::Arc;

use auth::TokenCodec;
use client_service::config::Config;
use client_service::domain::client::service::ClientService;
use client_service::domain::session::service::SessionService;
use client_service::inbound::http::router::create_router;
use client_service::outbound::repositories::PostgresClientRepository;
use client_service::outbound::repositories::PostgresTokenRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "client_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "client-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    // Missing token secrets or TTLs fail here, before anything binds
    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        access_ttl_seconds = config.tokens.access_ttl_seconds,
        refresh_ttl_seconds = config.tokens.refresh_ttl_seconds,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let client_repository = Arc::new(PostgresClientRepository::new(pg_pool.clone()));
    let token_repository = Arc::new(PostgresTokenRepository::new(pg_pool));

    let client_service = Arc::new(ClientService::new(client_repository));
    let session_service = Arc::new(SessionService::new(
        TokenCodec::new(
            config.tokens.access_secret.as_bytes(),
            config.tokens.access_ttl_seconds,
        ),
        TokenCodec::new(
            config.tokens.refresh_secret.as_bytes(),
            config.tokens.refresh_ttl_seconds,
        ),
        token_repository,
    ));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(client_service, session_service);
    axum::serve(http_listener, http_application).await?;

    Ok(())
}
