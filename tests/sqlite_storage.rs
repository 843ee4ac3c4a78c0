#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use yarukoto::db::sqlite::SqliteStorage;
    use yarukoto::db::storage::Storage;
    use yarukoto::libs::task::{NewTask, TaskFilter, TaskPatch};

    struct SqliteTestContext {
        _temp_dir: TempDir,
        db_path: PathBuf,
    }

    impl TestContext for SqliteTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db_path = temp_dir.path().join("tasks.db");
            SqliteTestContext {
                _temp_dir: temp_dir,
                db_path,
            }
        }
    }

    #[test_context(SqliteTestContext)]
    #[test]
    fn test_tasks_survive_reopen(ctx: &mut SqliteTestContext) {
        let created = {
            let store = SqliteStorage::open(&ctx.db_path).unwrap();
            let task = store.create_task(&NewTask::new("Persisted", Some("kept on disk"))).unwrap();
            store.update_task(task.id, &TaskPatch::completed(true)).unwrap().unwrap()
        };

        let store = SqliteStorage::open(&ctx.db_path).unwrap();
        let loaded = store.get_task(created.id).unwrap().unwrap();
        assert_eq!(loaded, created);
    }

    #[test_context(SqliteTestContext)]
    #[test]
    fn test_ids_not_reused_across_reopen(ctx: &mut SqliteTestContext) {
        let last_id = {
            let store = SqliteStorage::open(&ctx.db_path).unwrap();
            store.create_task(&NewTask::new("First", None)).unwrap();
            let second = store.create_task(&NewTask::new("Second", None)).unwrap();
            store.delete_task(second.id).unwrap();
            second.id
        };

        let store = SqliteStorage::open(&ctx.db_path).unwrap();
        let next = store.create_task(&NewTask::new("Third", None)).unwrap();
        assert!(next.id > last_id);
        assert_eq!(store.list_tasks(TaskFilter::All).unwrap().len(), 2);
    }

    #[test_context(SqliteTestContext)]
    #[test]
    fn test_describe_names_the_file(ctx: &mut SqliteTestContext) {
        let store = SqliteStorage::open(&ctx.db_path).unwrap();
        assert!(store.describe().starts_with("sqlite ("));
        assert!(store.describe().contains("tasks.db"));
    }

    #[test]
    fn test_open_fails_for_unwritable_location() {
        let temp_dir = tempfile::tempdir().unwrap();
        let missing_dir = temp_dir.path().join("missing").join("tasks.db");
        assert!(SqliteStorage::open(&missing_dir).is_err());
    }
}
