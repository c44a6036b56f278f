use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use forum_core::application::services::ApplicationServices;
use forum_core::config::AppConfig;
use forum_core::domain::{
    article::{ArticleReadRepository, ArticleWriteRepository},
    comment::{CommentReadRepository, CommentWriteRepository},
    topic::TopicRepository,
    user::UserRepository,
};
use forum_core::infrastructure::{
    database,
    repositories::{
        PostgresArticleReadRepository, PostgresArticleWriteRepository,
        PostgresCommentReadRepository, PostgresCommentWriteRepository, PostgresTopicRepository,
        PostgresUserRepository,
    },
};
use forum_core::presentation::http::{routes::build_router, state::HttpState};
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

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let article_read_repo: Arc<dyn ArticleReadRepository> =
        Arc::new(PostgresArticleReadRepository::new(pool.clone()));
    let article_write_repo: Arc<dyn ArticleWriteRepository> =
        Arc::new(PostgresArticleWriteRepository::new(pool.clone()));
    let comment_read_repo: Arc<dyn CommentReadRepository> =
        Arc::new(PostgresCommentReadRepository::new(pool.clone()));
    let comment_write_repo: Arc<dyn CommentWriteRepository> =
        Arc::new(PostgresCommentWriteRepository::new(pool.clone()));
    let topic_repo: Arc<dyn TopicRepository> = Arc::new(PostgresTopicRepository::new(pool.clone()));
    let user_repo: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(pool.clone()));

    let services = Arc::new(ApplicationServices::new(
        article_read_repo,
        article_write_repo,
        comment_read_repo,
        comment_write_repo,
        topic_repo,
        user_repo,
    ));

    let state = HttpState { services };
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
