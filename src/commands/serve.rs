//! Runs the HTTP task API.
//!
//! Settings are resolved in order: `config.json`, then `YARUKOTO_*`
//! environment variables, then the flags below. The chosen store is opened
//! once, optionally seeded with sample tasks, and shared with every request.

use crate::{
    api::{create_router, AppState},
    db::{seed::seed_sample_tasks, storage},
    libs::{
        config::{Config, StorageBackend, StorageConfig},
        data_storage::DataStorage,
        messages::Message,
    },
    msg_info, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;

#[derive(Debug, Default, Args)]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Task storage backend
    #[arg(short, long, value_enum)]
    pub storage: Option<StorageBackend>,

    /// SQLite database file
    #[arg(long)]
    pub db_path: Option<PathBuf>,

    /// Do not seed sample tasks into an empty store
    #[arg(long)]
    pub no_seed: bool,
}

impl ServeArgs {
    /// Layers the command-line flags over `config`.
    pub fn apply(&self, config: &mut Config) {
        if let Some(host) = &self.host {
            config.server.get_or_insert_with(Default::default).host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.get_or_insert_with(Default::default).port = port;
        }
        if let Some(backend) = self.storage {
            config.storage.get_or_insert_with(StorageConfig::default).backend = backend;
        }
        if let Some(path) = &self.db_path {
            config.storage.get_or_insert_with(StorageConfig::default).path = Some(path.clone());
        }
        if self.no_seed {
            config.seed_sample_tasks = Some(false);
        }
    }
}

/// Opens the configured store and seeds it when that is enabled.
pub fn prepare_storage(config: &Config, data_storage: &DataStorage) -> Result<Arc<dyn storage::Storage>> {
    let store = storage::open(config, data_storage)?;
    msg_info!(Message::StorageOpened(store.describe()));

    if config.storage_or_default().backend == StorageBackend::Memory {
        msg_warning!(Message::MemoryStorageVolatile);
    }

    if config.seed_sample_tasks() {
        match seed_sample_tasks(store.as_ref())? {
            0 => msg_info!(Message::SampleTasksSkipped),
            count => msg_info!(Message::SampleTasksSeeded(count)),
        }
    }

    Ok(store)
}

pub async fn cmd(args: ServeArgs) -> Result<()> {
    let mut config = Config::read()?;
    config.apply_env_overrides()?;
    args.apply(&mut config);

    let store = prepare_storage(&config, &DataStorage::new())?;
    let router = create_router(AppState::new(store));

    let server = config.server_or_default();
    let listener = TcpListener::bind((server.host.as_str(), server.port)).await?;
    msg_success!(Message::ServerStarted(listener.local_addr()?.to_string()));

    axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

    msg_info!(Message::ServerStopped);
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            msg_warning!(Message::ShutdownSignalFailed(error.to_string()));
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => {
                msg_warning!(Message::ShutdownSignalFailed(error.to_string()));
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

    msg_info!(Message::ServerShuttingDown);
}
