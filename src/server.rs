//! Process bootstrap: wiring, listeners and graceful shutdown.

use std::sync::Arc;
use std::time::Duration;

use miette::Diagnostic;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::task::{JoinError, JoinHandle};
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::api::{self, ApiError, AppState};
use crate::config::Config;
use crate::db::{DbError, MongoDatabase};
use crate::rpc::{self, BudgetServer, RpcError};
use crate::usecase::Usecase;

#[derive(Error, Diagnostic, Debug)]
pub enum ServerError {
    #[error("Database error: {0}")]
    #[diagnostic(code(budgets::server::database))]
    Database(#[from] DbError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Rpc(#[from] RpcError),

    #[error("Server task failed: {0}")]
    #[diagnostic(code(budgets::server::task))]
    Task(#[from] JoinError),
}

/// Initialize tracing subscriber with env filter
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "budgets=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Connect storage, serve HTTP and gRPC, and run until SIGINT/SIGTERM.
pub async fn run(config: Config) -> Result<(), ServerError> {
    let db = MongoDatabase::connect(
        &config.mongo_uri,
        &config.mongo_db,
        config.connect_timeout(),
    )
    .await?;

    let usecase = Arc::new(Usecase::new(db.budgets(&config.mongo_collection)));
    let state = AppState::new(
        Arc::clone(&usecase),
        Arc::new(db.clone()),
        config.request_timeout(),
    );

    let listener = TcpListener::bind(config.addr)
        .await
        .map_err(ApiError::Bind)?;
    let grpc_listener = TcpListener::bind(config.grpc_addr)
        .await
        .map_err(RpcError::Bind)?;
    let shutdown = CancellationToken::new();

    // Either server exiting on its own triggers shutdown of the other.
    let http_token = shutdown.clone();
    let mut http = tokio::spawn(async move {
        let result = api::serve(listener, state, http_token.clone().cancelled_owned()).await;
        http_token.cancel();
        result
    });

    let grpc_token = shutdown.clone();
    let mut grpc = tokio::spawn(async move {
        let result = rpc::serve(
            grpc_listener,
            BudgetServer::new(usecase),
            grpc_token.clone().cancelled_owned(),
        )
        .await;
        grpc_token.cancel();
        result
    });

    tokio::select! {
        _ = shutdown_signal() => info!("shutdown signal received"),
        _ = shutdown.cancelled() => warn!("a server stopped unexpectedly"),
    }
    shutdown.cancel();

    let grace = config.shutdown_grace();
    info!(grace_secs = grace.as_secs(), "shutting down...");
    let drained = tokio::time::timeout(grace, async {
        let (http, grpc) = tokio::join!(&mut http, &mut grpc);
        first_error(http, grpc)
    })
    .await;
    let result = match drained {
        Ok(result) => result,
        Err(_) => {
            warn!("in-flight requests did not finish within the grace period");
            abort(&http, &grpc);
            Ok(())
        }
    };

    close_storage(db, grace).await;
    if let Err(e) = &result {
        error!(error = %e, "server exited with error");
    }
    info!("bye");
    result
}

fn first_error(
    http: Result<Result<(), ApiError>, JoinError>,
    grpc: Result<Result<(), RpcError>, JoinError>,
) -> Result<(), ServerError> {
    http??;
    grpc??;
    Ok(())
}

fn abort(http: &JoinHandle<Result<(), ApiError>>, grpc: &JoinHandle<Result<(), RpcError>>) {
    http.abort();
    grpc.abort();
}

async fn close_storage(db: MongoDatabase, grace: Duration) {
    if tokio::time::timeout(grace, db.shutdown()).await.is_err() {
        warn!("MongoDB client did not close within the grace period");
    }
}

/// Resolves on SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "failed to listen for SIGINT");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}
