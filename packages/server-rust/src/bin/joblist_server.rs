//! Job listing server binary.
//!
//! Parses CLI/env configuration, installs the tracing subscriber, and runs
//! the HTTP server until Ctrl-C.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use joblist_core::{DEFAULT_PER_PAGE, MAX_PER_PAGE};
use joblist_server::{InMemoryJobStore, JobService, NetworkConfig, NetworkModule, ServiceConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    /// Human-readable single-line text.
    Compact,
    /// JSON lines for log shippers.
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "joblist-server", version, about = "Job listing API server")]
struct Args {
    /// Bind address
    #[arg(long, default_value = "0.0.0.0", env = "JOBLIST_HOST")]
    host: String,

    /// Port to listen on (0 = OS-assigned)
    #[arg(short, long, default_value_t = 8000, env = "JOBLIST_PORT")]
    port: u16,

    /// Allowed CORS origins (comma-separated, `*` for any)
    #[arg(long, value_delimiter = ',', default_value = "*", env = "JOBLIST_CORS_ORIGINS")]
    cors_origin: Vec<String>,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30, env = "JOBLIST_REQUEST_TIMEOUT_SECS")]
    request_timeout_secs: u64,

    /// How long to wait for in-flight requests on shutdown, in seconds
    #[arg(long, default_value_t = 30, env = "JOBLIST_DRAIN_TIMEOUT_SECS")]
    drain_timeout_secs: u64,

    /// Page size used when a list request omits `per_page`
    #[arg(long, default_value_t = DEFAULT_PER_PAGE, env = "JOBLIST_DEFAULT_PER_PAGE")]
    default_per_page: u32,

    /// Largest `per_page` a list request may ask for
    #[arg(long, default_value_t = MAX_PER_PAGE, env = "JOBLIST_MAX_PER_PAGE")]
    max_per_page: u32,

    /// Base log level; `RUST_LOG` overrides it when set
    #[arg(long, default_value = "info", env = "JOBLIST_LOG_LEVEL")]
    log_level: String,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact, env = "JOBLIST_LOG_FORMAT")]
    log_format: LogFormat,
}

impl Args {
    fn network_config(&self) -> NetworkConfig {
        NetworkConfig {
            host: self.host.clone(),
            port: self.port,
            cors_origins: self.cors_origin.clone(),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            drain_timeout: Duration::from_secs(self.drain_timeout_secs),
        }
    }

    fn service_config(&self) -> anyhow::Result<ServiceConfig> {
        anyhow::ensure!(self.max_per_page > 0, "--max-per-page must be at least 1");
        anyhow::ensure!(
            (1..=self.max_per_page).contains(&self.default_per_page),
            "--default-per-page must be between 1 and --max-per-page ({})",
            self.max_per_page
        );
        Ok(ServiceConfig {
            default_per_page: self.default_per_page,
            max_per_page: self.max_per_page,
        })
    }
}

fn init_tracing(level: &str, format: LogFormat) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(format!("{level},tower_http=info,hyper=warn"))
            .with_context(|| format!("invalid log level `{level}`"))?,
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);
    let installed = match format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level, args.log_format)?;

    let service_config = args.service_config()?;
    let jobs = JobService::new(Arc::new(InMemoryJobStore::new()));
    let mut module = NetworkModule::new(args.network_config(), service_config, jobs);

    let port = module.start().await?;
    info!(
        host = %args.host,
        port,
        version = env!("CARGO_PKG_VERSION"),
        "joblist server started"
    );

    module.serve(shutdown_signal()).await?;
    info!("joblist server stopped");
    Ok(())
}
