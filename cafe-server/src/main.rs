use anyhow::Context;
use cafe_server::{Config, Server, init_logger_with_file};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    let _ = dotenv::dotenv();

    let config = Config::from_env().context("Failed to load configuration")?;

    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    tracing::info!(
        environment = %config.environment,
        database = %config.database_path,
        "Starting cafe-server"
    );
    if config.uses_placeholder_api_key() {
        tracing::warn!("API_KEY not set, using the development placeholder key");
    }

    Server::new(config)
        .run()
        .await
        .context("Server error")?;

    Ok(())
}
