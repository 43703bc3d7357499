/// Showbill - server-rendered venue, artist, and show listings
use clap::{Parser, Subcommand};
use showbill_server::{config::ServerConfig, create_router, state::AppState};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "showbill-server")]
#[command(about = "Showbill venue and artist listing server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<String>,
    },
    /// Populate the database with a small demo dataset
    Seed,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "showbill_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config: _ } => {
            serve().await?;
        }
        Commands::Seed => {
            seed().await?;
        }
    }

    Ok(())
}

async fn serve() -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::load()?;
    config.validate()?;

    tracing::info!("Starting Showbill");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    // Initialize database
    let pool = showbill_storage::create_pool(&config.storage.database_url).await?;
    showbill_storage::run_migrations(&pool).await?;
    tracing::info!("Database connected");

    // Build application state and router
    let app_state = AppState::new(pool);
    let app = create_router(app_state);

    // Create server address
    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn seed() -> anyhow::Result<()> {
    let config = ServerConfig::load()?;
    config.validate()?;

    let pool = showbill_storage::create_pool(&config.storage.database_url).await?;
    showbill_storage::run_migrations(&pool).await?;

    showbill_server::seed::run(&pool).await?;

    Ok(())
}
