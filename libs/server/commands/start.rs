use clap::Args;
use mentra_config::Config;

use crate::{
    core::storage::{models, Storage},
    http::{build_router, AppState},
    services::{self, uploads::UploadStore},
};

#[derive(Args, Debug)]
pub struct Command {}

pub async fn handle(_: Command, config: Config) -> eyre::Result<()> {
    let data_dir = config.storage.get_data_dir();
    std::fs::create_dir_all(&data_dir)
        .map_err(|e| eyre::eyre!("Couldn't create data directory {data_dir:?}: {e}"))?;

    let db_path = data_dir.join("mentra.db");
    let storage = Storage::try_new(&db_path, models())
        .map_err(|e| eyre::eyre!("Couldn't initialize storage on path {db_path:?}: {e}"))?;

    let upload_store = UploadStore::try_new(config.storage.get_upload_dir())?;
    let activity_service = services::build(storage, upload_store.clone());

    let app = build_router(AppState {
        activity_service,
        upload_store,
    });

    let listen_addr = config.server.get_listen_addr();
    let listener = tokio::net::TcpListener::bind(&listen_addr)
        .await
        .map_err(|e| eyre::eyre!("Couldn't bind on {listen_addr}: {e}"))?;

    tracing::info!("mentra-server listening on {listen_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown_signal())
        .await?;

    tracing::info!("Shutdown signal received, exiting.");

    Ok(())
}

/// Waits for a shutdown signal (Ctrl-C or SIGTERM).
async fn wait_for_shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                // This future will pend forever if we can't install the handler,
                // preventing the application from terminating unexpectedly.
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
