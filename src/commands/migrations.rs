use crate::{
    db::{
        db::Db,
        migrations::{get_db_version, needs_migration, MigrationManager},
    },
    libs::{
        config::{Config, StorageBackend},
        data_storage::DataStorage,
        messages::Message,
        view::View,
    },
    msg_bail_anyhow, msg_info, msg_print,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use rusqlite::Connection;
use std::path::Path;

#[derive(Debug, Args)]
pub struct MigrationsArgs {
    #[command(subcommand)]
    command: MigrationsCommand,
}

#[derive(Debug, Subcommand)]
enum MigrationsCommand {
    /// Show the schema version and whether migrations are pending
    Status,
    /// List applied migrations
    History,
    /// Apply pending migrations
    Apply,
}

pub fn cmd(args: MigrationsArgs) -> Result<()> {
    let mut config = Config::read()?;
    config.apply_env_overrides()?;

    if config.storage_or_default().backend != StorageBackend::Sqlite {
        msg_bail_anyhow!(Message::SqliteBackendRequired);
    }

    let path = config.database_path(&DataStorage::new())?;

    match args.command {
        MigrationsCommand::Status => {
            let conn = open_existing(&path)?;
            msg_print!(Message::DatabaseVersion(get_db_version(&conn)?));
            if needs_migration(&conn)? {
                msg_info!(Message::DatabaseNeedsUpdate);
            } else {
                msg_info!(Message::DatabaseUpToDate);
            }
        }
        MigrationsCommand::History => {
            let conn = open_existing(&path)?;
            // An untouched file has no tracking table yet.
            let history = if get_db_version(&conn)? == 0 {
                Vec::new()
            } else {
                MigrationManager::new().get_migration_history(&conn)?
            };

            msg_print!(Message::MigrationHistory, true);
            View::migrations(&history)?;
        }
        MigrationsCommand::Apply => {
            let db = Db::open(&path)?;
            msg_info!(Message::DatabaseVersion(get_db_version(&db.conn)?));
        }
    }

    Ok(())
}

fn open_existing(path: &Path) -> Result<Connection> {
    if !path.exists() {
        msg_bail_anyhow!(Message::DatabaseFileMissing(path.display().to_string()));
    }
    Db::open_without_migrations(path)
}
