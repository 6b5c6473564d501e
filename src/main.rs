use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use mealprep::routes;
use mealprep_mealdb::MealDb;
use mealprep_shopping::Classifier;
use tower_http::trace::TraceLayer;

/// mealprep - recipe search and weekly shopping lists
#[derive(Parser)]
#[command(name = "mealprep")]
#[command(about = "Recipe search, week planning and shopping lists", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = mealprep::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    mealprep::observability::init_tracing(&config.observability.log_level)?;

    match cli.command {
        Commands::Serve { host, port } => serve_command(config, host, port).await,
    }
}

#[tracing::instrument(skip(config))]
async fn serve_command(
    config: mealprep::config::Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    tracing::info!("Starting mealprep server...");

    let host = host_override.unwrap_or_else(|| config.server.host.clone());
    let port = port_override.unwrap_or(config.server.port);

    let mealdb = MealDb::new(&config.mealdb)?;
    tracing::info!(base_url = %config.mealdb.base_url, "Recipe api client ready");

    let state = routes::AppState {
        config,
        mealdb,
        classifier: Arc::new(Classifier::default()),
    };

    let app = routes::router(state).layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
