use crate::{
    db::db::Db,
    db::tasks::Tasks,
    libs::{
        config::{Config, StorageBackend},
        data_storage::DataStorage,
        messages::Message,
        task::TaskFilter,
        view::View,
    },
    msg_bail_anyhow, msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct TasksArgs {
    /// Which tasks to show
    #[arg(short, long, value_enum, default_value_t = TaskFilter::All)]
    status: TaskFilter,
}

pub fn cmd(args: TasksArgs) -> Result<()> {
    let mut config = Config::read()?;
    config.apply_env_overrides()?;

    // The memory backend lives inside the server process only.
    if config.storage_or_default().backend != StorageBackend::Sqlite {
        msg_bail_anyhow!(Message::SqliteBackendRequired);
    }

    let db = Db::open(&config.database_path(&DataStorage::new())?)?;
    let tasks = Tasks::new(&db.conn).fetch(args.status)?;

    if tasks.is_empty() {
        msg_info!(Message::TasksNotFound);
        return Ok(());
    }

    msg_print!(Message::TasksHeader(args.status.to_string()), true);
    View::tasks(&tasks)
}
