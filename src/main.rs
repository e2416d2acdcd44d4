use anyhow::Result;
use api_base::application::{
    pagination::KeysetPaginator, ports::time::Clock, services::ApplicationServices,
};
use api_base::config::AppConfig;
use api_base::domain::activity::ActivityRepository;
use api_base::infrastructure::{
    database, repositories::PostgresActivityRepository, time::SystemClock,
};
use api_base::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let pagination = config.pagination();
    tracing::info!(
        direction = %pagination.direction(),
        default_limit = pagination.default_limit(),
        max_limit = ?pagination.max_limit(),
        strict = pagination.strict_parsing(),
        "keyset pagination configured"
    );

    let pool = database::init_pool(config.database_url(), config.database_max_connections()).await?;
    database::run_migrations(&pool).await?;

    let activity_repo: Arc<dyn ActivityRepository> = Arc::new(PostgresActivityRepository::new(pool));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let paginator = Arc::new(KeysetPaginator::new(pagination.clone()));

    let services = Arc::new(ApplicationServices::new(activity_repo, clock, paginator));

    let state = HttpState {
        services,
        public_base_url: config.public_base_url().clone(),
        api_logo: config.api_logo().cloned(),
    };

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
