use anyhow::Result;
use blog_core::application::{ports::time::Clock, services::ApplicationServices};
use blog_core::config::{AppConfig, DataSource};
use blog_core::domain::post::{PostReadRepository, PostWriteRepository};
use blog_core::infrastructure::{
    database,
    repositories::{InMemoryPostRepository, PostgresPostReadRepository, PostgresPostWriteRepository},
    seed,
    time::SystemClock,
};
use blog_core::presentation::http::{routes::build_router, state::HttpState};
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

type PostRepositories = (Arc<dyn PostWriteRepository>, Arc<dyn PostReadRepository>);

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    tracing::info!(data_source = config.data_source().as_str(), "configuration loaded");

    let (post_write_repo, post_read_repo) = post_repositories(&config).await?;
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let services = Arc::new(ApplicationServices::new(
        post_write_repo,
        post_read_repo,
        clock,
    ));
    let state = HttpState { services };

    let app = build_router(state, &config);
    if let Some(dir) = config.frontend_dir() {
        tracing::info!(dir = %dir.display(), "serving single-page app");
    }

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

async fn post_repositories(config: &AppConfig) -> Result<PostRepositories> {
    match config.data_source() {
        DataSource::Postgres => {
            let pool =
                database::init_pool(config.database_url(), config.db_max_connections()).await?;
            database::run_migrations(&pool).await?;
            let write_repo: Arc<dyn PostWriteRepository> =
                Arc::new(PostgresPostWriteRepository::new(pool.clone()));
            let read_repo: Arc<dyn PostReadRepository> =
                Arc::new(PostgresPostReadRepository::new(pool));
            Ok((write_repo, read_repo))
        }
        DataSource::Demo => {
            let repo = Arc::new(InMemoryPostRepository::with_posts(seed::sample_posts()?)?);
            tracing::warn!(
                posts = repo.len()?,
                "running on the in-memory demo store; writes are lost on restart"
            );
            let write_repo: Arc<dyn PostWriteRepository> = repo.clone();
            let read_repo: Arc<dyn PostReadRepository> = repo;
            Ok((write_repo, read_repo))
        }
    }
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
            tracing::error!(error = %err, "failed to listen for ctrl-c");
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
