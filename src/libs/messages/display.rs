//! Display implementation for yarukoto application messages.
//!
//! This module provides the `Display` implementation for the `Message` enum,
//! turning structured message data into the text users actually see. It is
//! the single place where wording lives.
//!
//! ## Message Categories
//!
//! - **Task API Messages**: Response bodies returned by the HTTP API. These
//!   are shown to end users by the browser client and are written in Japanese.
//! - **Validation Messages**: One message per field rule, also in Japanese.
//! - **Server Messages**: Lifecycle events logged by the `serve` command.
//! - **Configuration Messages**: Setup wizard prompts and results.
//! - **Migration Messages**: Schema version reporting for the SQLite backend.
//!
//! ## Usage Integration
//!
//! ```rust
//! use yarukoto::libs::messages::Message;
//!
//! assert_eq!(Message::TaskNotFound.to_string(), "タスクが見つかりません");
//! assert_eq!(Message::TitleTooLong(100).to_string(), "タイトルは100文字以内にしてください");
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    /// Converts a `Message` variant into human-readable text.
    ///
    /// Every variant is matched explicitly, so adding a message forces a
    /// wording decision here.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK API MESSAGES ===
            Message::InvalidTaskId => "無効なIDです".to_string(),
            Message::TaskNotFound => "タスクが見つかりません".to_string(),
            Message::RouteNotFound => "エンドポイントが見つかりません".to_string(),
            Message::InvalidRequestBody => "リクエストボディが不正です".to_string(),
            Message::RequestBodyTooLarge => "リクエストボディが大きすぎます".to_string(),
            Message::InvalidQueryString => "クエリパラメータが不正です".to_string(),
            Message::MethodNotAllowed => "このメソッドは使用できません".to_string(),
            Message::InvalidStatusFilter(value) => format!("無効なフィルターです: {}", value),
            Message::ValidationFailed(details) => format!("入力エラー: {}", details),
            Message::TasksFetchFailed => "タスクの取得に失敗しました".to_string(),
            Message::TaskCreateFailed => "タスクの作成に失敗しました".to_string(),
            Message::TaskUpdateFailed => "タスクの更新に失敗しました".to_string(),
            Message::TaskDeleteFailed => "タスクの削除に失敗しました".to_string(),

            // === VALIDATION MESSAGES ===
            Message::TitleRequired => "タイトルは必須です".to_string(),
            Message::TitleNotString => "タイトルは文字列で入力してください".to_string(),
            Message::TitleTooLong(max) => format!("タイトルは{}文字以内にしてください", max),
            Message::DescriptionNotString => "説明は文字列で入力してください".to_string(),
            Message::DescriptionTooLong(max) => format!("説明は{}文字以内にしてください", max),
            Message::CompletedNotBoolean => "完了状態は真偽値で指定してください".to_string(),
            Message::FieldNotUpdatable(field) => format!("更新できない項目です: {}", field),

            // === SERVER MESSAGES ===
            Message::ServerStarted(address) => format!("Server listening on http://{}", address),
            Message::ServerShuttingDown => "Shutdown signal received, finishing in-flight requests".to_string(),
            Message::ServerStopped => "Server stopped".to_string(),
            Message::ShutdownSignalFailed(error) => format!("Failed to listen for the shutdown signal: {}", error),
            Message::StorageOpened(backend) => format!("Task storage ready: {}", backend),
            Message::MemoryStorageVolatile => "Tasks are kept in memory and will be lost when the server stops".to_string(),
            Message::SampleTasksSeeded(count) => format!("Seeded {} sample task(s)", count),
            Message::SampleTasksSkipped => "Storage already contains tasks, sample data skipped".to_string(),

            // === CLI TASK MESSAGES ===
            Message::TasksHeader(filter) => format!("Tasks ({}):", filter),
            Message::TasksNotFound => "No tasks found".to_string(),
            Message::SqliteBackendRequired => "This command needs the SQLite storage backend (set storage.backend to \"sqlite\")".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleServer => "Server settings".to_string(),
            Message::ConfigModuleStorage => "Storage settings".to_string(),
            Message::ConfigModuleSampleData => "Sample data".to_string(),
            Message::ConfigEnvOverrideInvalid(variable, value) => format!("Invalid value '{}' in environment variable {}", value, variable),
            Message::PromptSelectModules => "Select sections to configure".to_string(),
            Message::PromptServerHost => "Enter the address to listen on".to_string(),
            Message::PromptServerPort => "Enter the port to listen on".to_string(),
            Message::PromptStorageBackend => "Select the storage backend".to_string(),
            Message::PromptDatabasePath => "Enter the SQLite database path (empty for default)".to_string(),
            Message::PromptSeedSampleTasks => "Seed sample tasks into an empty store on start?".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending database migrations", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("✓ Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("✗ Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All database migrations completed successfully".to_string(),
            Message::DatabaseVersion(version) => format!("Current database version: {}", version),
            Message::DatabaseUpToDate => "Database schema is up to date".to_string(),
            Message::DatabaseNeedsUpdate => "Database schema needs to be updated".to_string(),
            Message::DatabaseFileMissing(path) => format!("No database at {} (run `migrations apply` or `serve` to create it)", path),
            Message::MigrationHistory => "Migration history:".to_string(),
        };

        write!(f, "{}", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_messages_are_japanese() {
        assert_eq!(Message::InvalidTaskId.to_string(), "無効なIDです");
        assert_eq!(Message::TaskDeleteFailed.to_string(), "タスクの削除に失敗しました");
        assert_eq!(Message::DescriptionTooLong(500).to_string(), "説明は500文字以内にしてください");
        assert_eq!(Message::MethodNotAllowed.to_string(), "このメソッドは使用できません");
    }

    #[test]
    fn validation_failed_wraps_details() {
        let msg = Message::ValidationFailed("タイトルは必須です (title)".to_string());
        assert_eq!(msg.to_string(), "入力エラー: タイトルは必須です (title)");
    }
}
