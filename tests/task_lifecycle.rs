//! Property tests for the task lifecycle rules.
//!
//! Arbitrary patch sequences are replayed against a single task, with the
//! clock moving forward between steps, and the completion invariants are
//! checked after every step.

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;
use yarukoto::db::memory::MemoryStorage;
use yarukoto::db::storage::Storage;
use yarukoto::libs::task::{NewTask, Task, TaskFilter, TaskPatch};

fn arb_patch() -> impl Strategy<Value = TaskPatch> {
    (
        proptest::option::of("[a-zA-Z0-9 ]{1,20}"),
        proptest::option::of("[a-zA-Z0-9 ]{0,40}"),
        proptest::option::of(any::<bool>()),
    )
        .prop_map(|(title, description, completed)| TaskPatch {
            title,
            description,
            completed,
        })
}

fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap()
}

proptest! {
    /// `completed_at` is set exactly when the task is complete.
    #[test]
    fn completion_stamp_tracks_completed(patches in proptest::collection::vec(arb_patch(), 0..30)) {
        let mut task = Task::new(1, &NewTask::new("Task", None), epoch());

        for (step, patch) in patches.iter().enumerate() {
            task.apply(patch, epoch() + Duration::seconds(step as i64 + 1));
            prop_assert_eq!(task.completed, task.completed_at.is_some());
            if let Some(stamp) = task.completed_at {
                prop_assert!(stamp >= task.created_at);
            }
        }
    }

    /// Only a false-to-true transition changes the stamp to a new time;
    /// patches that leave completion alone never touch it.
    #[test]
    fn stamp_changes_only_on_transitions(patches in proptest::collection::vec(arb_patch(), 1..30)) {
        let mut task = Task::new(1, &NewTask::new("Task", None), epoch());

        for (step, patch) in patches.iter().enumerate() {
            let now = epoch() + Duration::seconds(step as i64 + 1);
            let before = task.clone();
            task.apply(patch, now);

            match (before.completed, patch.completed) {
                (false, Some(true)) => prop_assert_eq!(task.completed_at, Some(now)),
                (true, Some(true)) | (_, None) => prop_assert_eq!(task.completed_at, before.completed_at),
                (_, Some(false)) => prop_assert_eq!(task.completed_at, None),
            }
            prop_assert_eq!(task.id, before.id);
            prop_assert_eq!(task.created_at, before.created_at);
        }
    }

    /// Fields absent from a patch keep their previous values.
    #[test]
    fn absent_fields_are_preserved(patch in arb_patch()) {
        let mut task = Task::new(1, &NewTask::new("Original", Some("details")), epoch());
        task.apply(&patch, epoch());

        prop_assert_eq!(&task.title, patch.title.as_deref().unwrap_or("Original"));
        prop_assert_eq!(&task.description, patch.description.as_deref().unwrap_or("details"));
    }

    /// Active and completed lists split the full list without overlap.
    #[test]
    fn filters_partition_the_store(completions in proptest::collection::vec(any::<bool>(), 0..20)) {
        let store = MemoryStorage::new();
        for (i, completed) in completions.iter().enumerate() {
            let task = store.create_task(&NewTask::new(&format!("Task {}", i), None)).unwrap();
            if *completed {
                store.update_task(task.id, &TaskPatch::completed(true)).unwrap();
            }
        }

        let all = store.list_tasks(TaskFilter::All).unwrap();
        let active = store.list_tasks(TaskFilter::Active).unwrap();
        let completed = store.list_tasks(TaskFilter::Completed).unwrap();

        prop_assert_eq!(all.len(), completions.len());
        prop_assert_eq!(active.len() + completed.len(), all.len());
        prop_assert!(active.iter().all(|t| !t.completed));
        prop_assert!(completed.iter().all(|t| t.completed));
        prop_assert!(all.windows(2).all(|pair| pair[0].id < pair[1].id));
    }
}
