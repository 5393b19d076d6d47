//! Budget service binary.
//!
//! Loads `.env`, parses configuration and hands over to the server
//! bootstrap, which owns the MongoDB client and both listeners.

use budgets::config::Config;
use budgets::server::{self, ServerError};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // A missing .env file is fine; real environment variables still apply.
    dotenvy::dotenv().ok();

    let config = Config::parse();
    server::init_tracing();

    server::run(config).await
}
