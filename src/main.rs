use anyhow::{Context, Result};
use meeting_recap::{create_router, AppState, Config, LlmClient, SmtpMailer};
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    // Local development convenience; deployments set the environment directly.
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    if config.uses_dev_secret_key() {
        warn!("SECRET_KEY is unset; falling back to the development default");
    }

    info!("meeting-recap v0.1.0");
    info!(
        "Mail relay: {}:{} (TLS: {})",
        config.mail_server, config.mail_port, config.mail_use_tls
    );

    let summarizer = Arc::new(LlmClient::new(config.groq_api_key.clone()));
    let mailer = Arc::new(SmtpMailer::new(&config)?);
    let state = AppState::new(summarizer, mailer);

    let addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("HTTP server listening on {}", addr);

    axum::serve(listener, create_router(state))
        .await
        .context("HTTP server terminated")?;

    Ok(())
}
