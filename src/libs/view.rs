use super::task::Task;
use crate::db::migrations::AppliedMigration;
use anyhow::Result;
use chrono::Local;
use prettytable::{row, Table};

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "DESCRIPTION", "DONE", "CREATED", "COMPLETED"]);
        for task in tasks {
            let done = if task.completed { "✓" } else { "" };
            let created = task.created_at.with_timezone(&Local).format(DATETIME_FORMAT).to_string();
            let completed = task
                .completed_at
                .map(|at| at.with_timezone(&Local).format(DATETIME_FORMAT).to_string())
                .unwrap_or_default();
            table.add_row(row![task.id, task.title, task.description, done, created, completed]);
        }
        table.printstd();

        Ok(())
    }

    pub fn migrations(history: &[AppliedMigration]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["VERSION", "NAME", "APPLIED AT"]);
        for migration in history {
            let version = format!("v{}", migration.version);
            table.add_row(row![version, migration.name, migration.applied_at]);
        }
        table.printstd();

        Ok(())
    }
}
