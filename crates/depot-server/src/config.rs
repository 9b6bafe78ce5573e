use clap::Parser;

use depot_core::DEFAULT_WORKER_POOL_SIZE;

/// Server configuration parsed from command line arguments and environment variables
#[derive(Parser, Debug, Clone)]
#[command(name = "depot-server")]
#[command(author, version, about = "REST API server for Depot item management")]
pub struct ServerConfig {
    /// PostgreSQL database connection URL (in-memory store when absent)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Server port to listen on
    #[arg(short, long, env = "PORT", default_value = "3000")]
    pub port: u16,

    /// Server host to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Maximum number of items processed concurrently across all batch runs
    #[arg(long, env = "WORKER_POOL_SIZE", default_value_t = DEFAULT_WORKER_POOL_SIZE)]
    pub worker_pool_size: usize,

    /// Maximum number of pooled database connections
    #[arg(long, env = "DB_MAX_CONNECTIONS", default_value = "10")]
    pub db_max_connections: u32,

    /// Allowed CORS origins, comma-separated ("*" allows any)
    #[arg(long, env = "CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,
}
