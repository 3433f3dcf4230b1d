use boltbridge_cli::Cli;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Initialise tracing.
///
/// Log level is controlled by `RUST_LOG` (default: info, debug with `-v`).
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before clap reads its env fallbacks
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match cli.server_config() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            return Err(e.into());
        }
    };

    info!(
        port = config.port,
        upstream = %config.upstream.completions_url(),
        model = %config.model,
        "Starting boltbridge"
    );

    boltbridge_axum::start_server(config).await
}
