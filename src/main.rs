use clap::Parser;
use forum_spam_guard::{app::Data, commands, config::Settings, db};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = commands::Cli::parse();

    let settings = match Settings::from_env() {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to load settings: {}", e);
            std::process::exit(1);
        }
    };

    let pool = match db::pool::create_pool(
        &settings.database_url,
        settings.database_max_connections,
    )
    .await
    {
        Ok(p) => p,
        Err(e) => {
            error!("Failed to create database pool: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = db::pool::run_migrations(&pool).await {
        error!("Failed to run migrations: {}", e);
        std::process::exit(1);
    }

    info!("Database initialized successfully");

    let data = match Data::load(pool, settings).await {
        Ok(d) => d,
        Err(e) => {
            error!("Failed to load forum configuration: {}", e);
            std::process::exit(1);
        }
    };

    match commands::run(&data, cli.command).await {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            error!("Command failed: {}", e);
            std::process::exit(1);
        }
    }
}
