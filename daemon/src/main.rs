//! Credo daemon — entry point for the certificate verification service.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;

use credo_store::CertificateStore;
use credo_store_lmdb::{LmdbCertificateStore, LmdbEnvironment};

mod config;
mod import;

use config::ServiceConfig;

#[derive(Parser)]
#[command(name = "credo", about = "Credo certificate verification service")]
struct Cli {
    /// Data directory for the certificate store.
    #[arg(long, env = "CREDO_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Port for the verification pages.
    #[arg(long, env = "CREDO_HTTP_PORT")]
    http_port: Option<u16>,

    /// Bound on a single store lookup, in milliseconds.
    #[arg(long, env = "CREDO_LOOKUP_TIMEOUT_MS")]
    lookup_timeout_ms: Option<u64>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "CREDO_LOG_LEVEL")]
    log_level: Option<String>,

    /// Path to a TOML configuration file. If provided, file settings are
    /// used as the base; CLI flags and env vars override them.
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Run the verification page server.
    Serve,
    /// Load certificates from an issuance JSON export into the store.
    Import {
        /// Path to the JSON export.
        #[arg(long)]
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let file_config = if let Some(ref config_path) = cli.config {
        match ServiceConfig::from_toml_file(config_path) {
            Ok(cfg) => Some(cfg),
            Err(e) => {
                eprintln!(
                    "failed to load config file {}: {e}, using defaults",
                    config_path.display()
                );
                None
            }
        }
    } else {
        None
    };

    let mut config = file_config.unwrap_or_default();
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }
    if let Some(port) = cli.http_port {
        config.http_port = port;
    }
    if let Some(timeout) = cli.lookup_timeout_ms {
        config.lookup_timeout_ms = timeout;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }

    credo_utils::init_tracing(&config.log_level);
    if cli.config.is_some() {
        tracing::info!(data_dir = %config.data_dir.display(), "loaded configuration");
    }

    let env = LmdbEnvironment::open(&config.data_dir, config.map_size)?;
    let store = Arc::new(LmdbCertificateStore::new(Arc::new(env)));

    match cli.command {
        Command::Serve => {
            tracing::info!(
                port = config.http_port,
                data_dir = %config.data_dir.display(),
                "starting verification server"
            );
            let server = credo_server::VerifyServer::new(
                config.http_port,
                store as Arc<dyn CertificateStore>,
                Duration::from_millis(config.lookup_timeout_ms),
            );
            server.start().await?;
        }
        Command::Import { file } => {
            let summary = import::import_certificates(store.as_ref(), &file)?;
            tracing::info!(
                imported = summary.imported,
                skipped = summary.skipped,
                file = %file.display(),
                "certificate import complete"
            );
        }
    }

    Ok(())
}
