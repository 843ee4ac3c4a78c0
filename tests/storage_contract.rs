#[cfg(test)]
mod tests {
    use rstest::rstest;
    use std::sync::Arc;
    use yarukoto::db::memory::MemoryStorage;
    use yarukoto::db::seed::seed_sample_tasks;
    use yarukoto::db::sqlite::SqliteStorage;
    use yarukoto::db::storage::{Storage, StorageError};
    use yarukoto::libs::task::{NewTask, TaskFilter, TaskPatch};
    use yarukoto::libs::user::NewUser;

    #[derive(Debug, Clone, Copy)]
    enum Backend {
        Memory,
        Sqlite,
    }

    impl Backend {
        fn open(self) -> Arc<dyn Storage> {
            match self {
                Backend::Memory => Arc::new(MemoryStorage::new()),
                Backend::Sqlite => Arc::new(SqliteStorage::in_memory().unwrap()),
            }
        }
    }

    fn titles(store: &dyn Storage, filter: TaskFilter) -> Vec<String> {
        store.list_tasks(filter).unwrap().into_iter().map(|t| t.title).collect()
    }

    #[rstest]
    fn create_starts_incomplete(#[values(Backend::Memory, Backend::Sqlite)] backend: Backend) {
        let store = backend.open();

        let task = store.create_task(&NewTask::new("Buy milk", None)).unwrap();

        assert!(task.id > 0);
        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.description, "");
        assert!(!task.completed);
        assert!(task.completed_at.is_none());
        assert_eq!(store.get_task(task.id).unwrap(), Some(task));
    }

    #[rstest]
    fn ids_increase_and_are_never_reused(#[values(Backend::Memory, Backend::Sqlite)] backend: Backend) {
        let store = backend.open();

        let first = store.create_task(&NewTask::new("One", None)).unwrap();
        let second = store.create_task(&NewTask::new("Two", None)).unwrap();
        assert!(second.id > first.id);

        assert!(store.delete_task(second.id).unwrap());
        let third = store.create_task(&NewTask::new("Three", None)).unwrap();
        assert!(third.id > second.id);
    }

    #[rstest]
    fn list_keeps_insertion_order_and_filters_partition(#[values(Backend::Memory, Backend::Sqlite)] backend: Backend) {
        let store = backend.open();
        for title in ["a", "b", "c", "d"] {
            store.create_task(&NewTask::new(title, None)).unwrap();
        }
        let ids: Vec<i64> = store.list_tasks(TaskFilter::All).unwrap().iter().map(|t| t.id).collect();
        store.update_task(ids[1], &TaskPatch::completed(true)).unwrap();
        store.update_task(ids[3], &TaskPatch::completed(true)).unwrap();

        assert_eq!(titles(store.as_ref(), TaskFilter::All), vec!["a", "b", "c", "d"]);
        assert_eq!(titles(store.as_ref(), TaskFilter::Active), vec!["a", "c"]);
        assert_eq!(titles(store.as_ref(), TaskFilter::Completed), vec!["b", "d"]);
    }

    #[rstest]
    fn completing_stamps_and_reopening_clears(#[values(Backend::Memory, Backend::Sqlite)] backend: Backend) {
        let store = backend.open();
        let task = store.create_task(&NewTask::new("Ship release", Some("v1.0"))).unwrap();

        let done = store.update_task(task.id, &TaskPatch::completed(true)).unwrap().unwrap();
        assert!(done.completed);
        let stamp = done.completed_at.unwrap();
        assert!(stamp >= done.created_at);
        assert_eq!(done.created_at, task.created_at);

        let again = store.update_task(task.id, &TaskPatch::completed(true)).unwrap().unwrap();
        assert_eq!(again.completed_at, Some(stamp));

        let retitled = TaskPatch {
            title: Some("Ship release 1.0".to_string()),
            ..Default::default()
        };
        let renamed = store.update_task(task.id, &retitled).unwrap().unwrap();
        assert_eq!(renamed.title, "Ship release 1.0");
        assert_eq!(renamed.description, "v1.0");
        assert_eq!(renamed.completed_at, Some(stamp));

        let reopened = store.update_task(task.id, &TaskPatch::completed(false)).unwrap().unwrap();
        assert!(!reopened.completed);
        assert!(reopened.completed_at.is_none());
        assert_eq!(store.get_task(task.id).unwrap(), Some(reopened));
    }

    #[rstest]
    fn missing_ids_are_not_errors(#[values(Backend::Memory, Backend::Sqlite)] backend: Backend) {
        let store = backend.open();

        assert!(store.get_task(9999).unwrap().is_none());
        assert!(store.update_task(9999, &TaskPatch::completed(true)).unwrap().is_none());
        assert!(!store.delete_task(9999).unwrap());
    }

    #[rstest]
    fn delete_then_get_is_not_found(#[values(Backend::Memory, Backend::Sqlite)] backend: Backend) {
        let store = backend.open();
        let task = store.create_task(&NewTask::new("Temporary", None)).unwrap();

        assert!(store.delete_task(task.id).unwrap());
        assert!(store.get_task(task.id).unwrap().is_none());
        assert!(!store.delete_task(task.id).unwrap());
    }

    #[rstest]
    fn usernames_are_unique(#[values(Backend::Memory, Backend::Sqlite)] backend: Backend) {
        let store = backend.open();

        let alice = store.create_user(&NewUser::new("alice", "secret")).unwrap();
        assert_eq!(store.get_user(alice.id).unwrap(), Some(alice.clone()));
        assert_eq!(store.get_user_by_username("alice").unwrap(), Some(alice));
        assert!(store.get_user_by_username("bob").unwrap().is_none());

        let err = store.create_user(&NewUser::new("alice", "other")).unwrap_err();
        assert!(matches!(err, StorageError::DuplicateUsername(name) if name == "alice"));
    }

    #[rstest]
    fn seeding_fills_only_an_empty_store(#[values(Backend::Memory, Backend::Sqlite)] backend: Backend) {
        let store = backend.open();

        assert_eq!(seed_sample_tasks(store.as_ref()).unwrap(), 4);
        assert_eq!(store.list_tasks(TaskFilter::All).unwrap().len(), 4);

        let completed = store.list_tasks(TaskFilter::Completed).unwrap();
        assert_eq!(completed.len(), 2);
        assert!(completed.iter().all(|t| t.completed_at.is_some()));

        assert_eq!(seed_sample_tasks(store.as_ref()).unwrap(), 0);
        assert_eq!(store.list_tasks(TaskFilter::All).unwrap().len(), 4);
    }
}
