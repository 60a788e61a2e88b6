//! HTTP server for the finiquito engine.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use finiquito_engine::api::{AppState, create_router};
use finiquito_engine::config::ConfigLoader;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding `law.yaml` and `parameters.yaml`. Uses the built-in
    /// LFT 2015 parameters when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port to listen on.
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let loader = match &args.config {
        Some(dir) => {
            info!("Loading law configuration from {}", dir.display());
            ConfigLoader::load(dir)?
        }
        None => {
            info!("Using built-in LFT 2015 configuration");
            ConfigLoader::default()
        }
    };
    info!(
        law_code = %loader.law().code,
        minimum_wage = %loader.seniority_cap().reference_minimum_wage,
        "Configuration loaded"
    );

    let app = create_router(AppState::new(loader));

    let addr: SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
