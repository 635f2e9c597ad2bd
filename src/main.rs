use std::sync::Arc;

use anyhow::Result;
use kawara_core::application::{ports::time::Clock, services::ApplicationServices};
use kawara_core::config::AppConfig;
use kawara_core::domain::{
    article::{ArticleReadRepository, ArticleWriteRepository},
    category::{CategoryReadRepository, CategoryWriteRepository},
};
use kawara_core::infrastructure::{
    cache, database,
    repositories::{
        MongoArticleReadRepository, MongoArticleWriteRepository, MongoCategoryReadRepository,
        MongoCategoryWriteRepository,
    },
    time::SystemClock,
};
use kawara_core::presentation::http::{routes::build_router, state::HttpState};
use std::net::SocketAddr;
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

    let db = database::init_database(config.mongodb_url(), config.database_name()).await?;

    // Cache service endpoint is provisioned alongside the database; no
    // business logic consumes it yet.
    let cache_pool = cache::init_cache_pool(config.cache_url())?;

    let article_write_repo: Arc<dyn ArticleWriteRepository> =
        Arc::new(MongoArticleWriteRepository::new(&db));
    let article_read_repo: Arc<dyn ArticleReadRepository> =
        Arc::new(MongoArticleReadRepository::new(&db));
    let category_write_repo: Arc<dyn CategoryWriteRepository> =
        Arc::new(MongoCategoryWriteRepository::new(&db));
    let category_read_repo: Arc<dyn CategoryReadRepository> =
        Arc::new(MongoCategoryReadRepository::new(&db));

    let clock: Arc<dyn Clock> = Arc::new(SystemClock::default());

    let services = Arc::new(ApplicationServices::new(
        article_write_repo,
        article_read_repo,
        category_write_repo,
        category_read_repo,
        clock,
    ));

    let state = HttpState {
        services,
        cache: cache_pool,
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
        .unwrap_or_else(|| "info,tower_http=info,mongodb=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
