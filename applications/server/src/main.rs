/// Roster Server - minimal user CRUD service
use clap::{Parser, Subcommand};
use roster_core::{store::UserStore, types::CreateUser};
use roster_server::{api, config::ServerConfig, services::UserService, state::AppState};
use roster_storage::{MemoryUserStore, SqliteUserStore, StorageError};
use std::{
    net::SocketAddr,
    path::{Path, PathBuf},
    sync::Arc,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "roster-server")]
#[command(about = "Minimal user CRUD service", long_about = None)]
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
        config: Option<PathBuf>,
    },
    /// Create a new user
    AddUser {
        /// Display name
        #[arg(short, long)]
        name: String,
        /// Email address
        #[arg(short, long)]
        email: String,
    },
    /// List all users
    ListUsers,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roster_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => {
            serve(config.as_deref()).await?;
        }
        Commands::AddUser { name, email } => {
            add_user(name, email).await?;
        }
        Commands::ListUsers => {
            list_users().await?;
        }
    }

    Ok(())
}

async fn serve(config_path: Option<&Path>) -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::load(config_path)?;
    config.validate()?;

    tracing::info!("Starting Roster Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    // Select the store once; handlers and service never learn which
    // variant backs them
    let store = select_store(&config).await;
    let service = Arc::new(UserService::new(store));

    // Build application state and router
    let app_state = AppState::new(service);
    let app = api::router(app_state);

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

/// Open the durable store, or fall back to the in-memory store when the
/// database cannot be reached. The decision is made exactly once, at
/// startup; there is no per-request retry.
async fn select_store(config: &ServerConfig) -> Arc<dyn UserStore> {
    match open_durable(&config.storage.database_url).await {
        Ok(store) => {
            tracing::info!("Database connected");
            Arc::new(store)
        }
        Err(err) => {
            tracing::warn!("Database unavailable: {err}");
            tracing::warn!("Using in-memory store; data will not persist");
            Arc::new(MemoryUserStore::with_samples())
        }
    }
}

async fn open_durable(database_url: &str) -> Result<SqliteUserStore, StorageError> {
    let pool = roster_storage::create_pool(database_url).await?;
    roster_storage::run_migrations(&pool).await?;
    roster_storage::ping(&pool).await?;
    Ok(SqliteUserStore::new(pool))
}

async fn add_user(name: String, email: String) -> anyhow::Result<()> {
    let config = ServerConfig::load(None)?;
    let store = select_store(&config).await;
    let service = UserService::new(store);

    let user = service.create(CreateUser { name, email }).await?;
    println!("Created user {} ({})", user.id, user.name);

    Ok(())
}

async fn list_users() -> anyhow::Result<()> {
    let config = ServerConfig::load(None)?;
    let store = select_store(&config).await;
    let service = UserService::new(store);

    let users = service.get_all().await?;
    println!("Users:");
    for user in users {
        println!("  {} - {} <{}>", user.id, user.name, user.email);
    }

    Ok(())
}
