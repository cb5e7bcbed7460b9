// # updnsd - UpDNS Daemon
//
// The updnsd daemon is a thin integration layer; all update logic lives
// in `updns-core`. It is responsible for:
//
// 1. Parsing the command line
// 2. Loading and validating the configuration file
// 3. Wiring the Route 53 publisher, the update pipeline, and the router
// 4. Serving HTTP until externally terminated
//
// ## Configuration
//
// - `--port` (default 8080): port to listen on, bound on 127.0.0.1
// - `--conf` (default config.json): path to the configuration document
// - `UPDNS_LOG_LEVEL` (default info): trace, debug, info, warn, error
//
// There is no graceful-shutdown protocol and no hot reload; restart the
// process to pick up configuration changes.
//
// ## Example
//
// ```bash
// export AWS_ACCESS_KEY_ID=...
// export AWS_SECRET_ACCESS_KEY=...
//
// updnsd --port 8080 --conf /etc/updns/config.json
// ```

use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

use updns_api::{AppState, create_routes};
use updns_core::{JsonConfig, UpdateService};
use updns_provider_route53::Route53Publisher;

/// Exit codes for different termination scenarios
///
/// These codes follow systemd conventions:
/// - 0: Clean shutdown
/// - 1: Configuration or startup error
/// - 2: Runtime error (unexpected)
#[derive(Debug, Clone, Copy)]
enum UpdnsExitCode {
    /// Clean shutdown (normal exit)
    CleanShutdown = 0,
    /// Configuration error or startup failure
    ConfigError = 1,
    /// Runtime error (unexpected failure)
    RuntimeError = 2,
}

impl From<UpdnsExitCode> for ExitCode {
    fn from(code: UpdnsExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

#[derive(Parser, Debug)]
#[command(name = "updnsd")]
#[command(about = "Dynamic-DNS update service backed by Amazon Route 53")]
struct Args {
    /// Port number to listen on
    #[arg(long, default_value_t = 8080)]
    port: u16,

    /// Configuration file
    #[arg(long, default_value = "config.json")]
    conf: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize tracing
    let log_level = match std::env::var("UPDNS_LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase()
        .as_str()
    {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder().with_max_level(log_level).finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
        return UpdnsExitCode::ConfigError.into();
    }

    // Load configuration; the process must not start without it
    let config = match JsonConfig::load(&args.conf) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration file '{}': {}", args.conf, e);
            return UpdnsExitCode::ConfigError.into();
        }
    };

    info!("Starting updnsd daemon");
    info!("Configuration loaded: {} hostname(s)", config.hostnames.len());

    // Enter tokio runtime
    let rt = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Failed to create tokio runtime: {}", e);
            return UpdnsExitCode::RuntimeError.into();
        }
    };

    match rt.block_on(run_server(args.port, config)) {
        Ok(()) => UpdnsExitCode::CleanShutdown.into(),
        Err(e) => {
            error!("Server error: {}", e);
            UpdnsExitCode::RuntimeError.into()
        }
    }
}

/// Run the HTTP server until it fails or the process is terminated
async fn run_server(port: u16, config: JsonConfig) -> Result<()> {
    let service = UpdateService::new(Arc::new(config), Arc::new(Route53Publisher::new()));
    let app = create_routes(AppState {
        service: Arc::new(service),
    });

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
