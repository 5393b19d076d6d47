//! Process configuration.
//!
//! Every setting can come from a flag or an environment variable; a `.env`
//! file in the working directory is loaded by the binary before parsing.

use std::net::SocketAddr;
use std::time::Duration;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "budgets")]
#[command(author, version, about = "Budget listing service (HTTP + gRPC)", long_about = None)]
pub struct Config {
    /// MongoDB connection string
    #[arg(long, env = "MONGO_URI", default_value = "mongodb://localhost:27017")]
    pub mongo_uri: String,

    /// Database holding the budgets collection
    #[arg(long, env = "MONGO_DB", default_value = "budgetdb")]
    pub mongo_db: String,

    /// Collection of budget documents
    #[arg(long, env = "MONGO_COLLECTION", default_value = "budgets")]
    pub mongo_collection: String,

    /// HTTP listen address
    #[arg(long, env = "ADDR", default_value = "0.0.0.0:8080")]
    pub addr: SocketAddr,

    /// gRPC listen address
    #[arg(long, env = "GRPC_ADDR", default_value = "0.0.0.0:9090")]
    pub grpc_addr: SocketAddr,

    /// Deadline for each HTTP request, in seconds
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value_t = 15)]
    pub request_timeout_secs: u64,

    /// Timeout for the initial MongoDB connection and ping, in seconds
    #[arg(long, env = "CONNECT_TIMEOUT_SECS", default_value_t = 10)]
    pub connect_timeout_secs: u64,

    /// How long in-flight requests may run after a shutdown signal, in seconds
    #[arg(long, env = "SHUTDOWN_GRACE_SECS", default_value_t = 10)]
    pub shutdown_grace_secs: u64,
}

impl Config {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn shutdown_grace(&self) -> Duration {
        Duration::from_secs(self.shutdown_grace_secs)
    }
}
