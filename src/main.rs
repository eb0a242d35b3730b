use anyhow::Result;
use brainstorm_studio::{
    clients::GenerationGateway,
    config::{self, Config},
    http::start_http_server,
};
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "brainstorm-studio", about = "Brainstorming prompt relay for Gemini")]
struct Args {
    /// Path to a TOML config file (overrides BRAINSTORM_CONFIG)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Bind host (overrides HOST)
    #[arg(long)]
    host: Option<String>,
    /// Listen port (overrides PORT)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Subscriber first so warnings raised while loading config are visible.
    Config::load_env_file();
    let filter = config::log_filter(|key| std::env::var(key).ok());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&filter)
                .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_LEVEL)),
        )
        .init();

    let mut config = Config::load_from(args.config).map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    if config.uses_default_secret() {
        warn!("FLASK_SECRET_KEY not set; using the insecure development default");
    }

    let gateway = GenerationGateway::from_config(&config);
    if gateway.is_configured() {
        info!("Gemini generation enabled (model={})", config.gemini.model);
    } else {
        warn!("GEMINI_API_KEY not found. API calls will fail.");
    }

    start_http_server(&config, gateway).await
}
