use axum::{extract::Request, ServiceExt};
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use timestamp_service::assets::AssetLoader;
use timestamp_service::models::ServerConfig;
use timestamp_service::server::{self, ApiDoc};
use timestamp_service::services::{Clock, FixedClock, SystemClock, TimestampResolver};

#[derive(Parser)]
#[command(name = "timestamp-service")]
#[command(about = "Timestamp microservice - dates, epoch milliseconds and RFC 1123 strings")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Listen address (overrides BIND_ADDR)
        #[arg(short, long)]
        bind: Option<String>,
    },
    /// Resolve a single input and print the JSON response
    Resolve {
        /// Date string or epoch milliseconds (omit for the current time)
        input: Option<String>,

        /// Pretend the current time is this RFC 3339 instant
        #[arg(long)]
        at: Option<String>,
    },
    /// Extract the embedded landing page to the filesystem for customization
    Init {
        /// Overwrite an existing file
        #[arg(long, short)]
        force: bool,

        /// List embedded assets without extracting
        #[arg(long)]
        list: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = ServerConfig::from_env();

    match cli.command {
        Some(Commands::Serve { bind }) => run_server(config, bind).await,
        Some(Commands::Resolve { input, at }) => run_resolve_command(input, at),
        Some(Commands::Init { force, list }) => run_init_command(&config, force, list),
        None => {
            run_status_command(&config);
            Ok(())
        }
    }
}

fn init_tracing(default_filter: &str, with_time: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    if with_time {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().without_time())
            .init();
    }
}

/// Resolve one input without starting a server
fn run_resolve_command(input: Option<String>, at: Option<String>) -> anyhow::Result<()> {
    // Minimal logging for CLI
    init_tracing("timestamp_service=warn", false);

    let clock: Arc<dyn Clock> = match at {
        Some(at) => {
            let instant = chrono::DateTime::parse_from_rfc3339(&at)
                .map_err(|e| anyhow::anyhow!("Invalid --at value '{at}': {e}"))?;
            Arc::new(FixedClock(instant.with_timezone(&chrono::Utc)))
        }
        None => Arc::new(SystemClock),
    };

    let resolver = TimestampResolver::new(clock);
    match resolver.resolve(input.as_deref()) {
        Ok(resolution) => {
            println!("{}", serde_json::to_string(&resolution.result)?);
            Ok(())
        }
        Err(e) => {
            let body = timestamp_service::models::ErrorResult {
                error: e.to_string(),
            };
            println!("{}", serde_json::to_string(&body)?);
            std::process::exit(1);
        }
    }
}

/// Extract the embedded landing page
fn run_init_command(config: &ServerConfig, force: bool, list: bool) -> anyhow::Result<()> {
    if list {
        println!("Embedded assets:\n");
        for f in AssetLoader::list_embedded() {
            println!("  {f}");
        }
        return Ok(());
    }

    let loader = AssetLoader::new(config.home_page.clone());
    let report = loader.init(force)?;

    for f in &report.written {
        println!("  + {f}");
    }
    if !report.skipped.is_empty() {
        println!("Skipped existing files (use --force to overwrite):");
        for f in &report.skipped {
            println!("  - {f}");
        }
    }

    Ok(())
}

/// Display status and configuration information
fn run_status_command(config: &ServerConfig) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let loader = AssetLoader::new(config.home_page.clone());

    println!("timestamp-service v{VERSION}");
    println!("Converts dates and epoch milliseconds to RFC 1123 UTC timestamps\n");

    println!("Environment Variables:");
    println!(
        "  BIND_ADDR = {}",
        std::env::var("BIND_ADDR").unwrap_or_else(|_| format!("{} (default)", config.bind_addr))
    );
    println!(
        "  HOME_PAGE = {}",
        config
            .home_page
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(not set)".to_string())
    );

    let home_source = match config.home_page {
        Some(ref path) if loader.uses_external_home_page() => path.display().to_string(),
        Some(_) => "embedded (file not found)".to_string(),
        None => "embedded".to_string(),
    };
    println!("\nAsset Sources:");
    println!("  Home page: {home_source}");

    println!("\nCommands:");
    println!("  timestamp-service serve     Start the HTTP server");
    println!("  timestamp-service resolve   Resolve one input and print JSON");
    println!("  timestamp-service init      Extract the embedded landing page");
    println!("\nRun 'timestamp-service --help' for more details.");
}

/// Run the HTTP server
async fn run_server(config: ServerConfig, bind: Option<String>) -> anyhow::Result<()> {
    init_tracing("timestamp_service=debug,tower_http=debug", true);

    let bind_addr = bind.unwrap_or(config.bind_addr);
    let asset_loader = Arc::new(AssetLoader::new(config.home_page.clone()));

    tracing::info!(
        home_page = ?config.home_page.as_ref().map(|p| p.display().to_string()).unwrap_or_else(|| "embedded".to_string()),
        external = asset_loader.uses_external_home_page(),
        "Asset sources configured"
    );

    let state = server::create_app_state(asset_loader, Arc::new(SystemClock));

    // Build router: shared routes plus OpenAPI documentation
    let router = server::build_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));
    let app = server::normalize(router);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Timestamp service listening");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
