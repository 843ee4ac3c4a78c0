use super::storage::{Storage, StorageError};
use crate::libs::task::{NewTask, TaskFilter, TaskPatch};

/// Demo tasks: (title, description, completed).
const SAMPLE_TASKS: [(&str, &str, bool); 4] = [
    ("プロジェクト計画書の作成", "次回のミーティングまでに計画書の草案を作成する", false),
    ("APIドキュメントの更新", "新しいエンドポイントの仕様をドキュメントに反映させる", true),
    ("バグ修正 #1234", "ログイン画面でのバリデーションエラーを修正する", false),
    ("デザインレビュー", "UIデザインの最終確認と承認", true),
];

/// Fills an empty store with the demo tasks. Returns how many were created;
/// a store that already holds tasks is left alone and `0` is returned.
pub fn seed_sample_tasks(storage: &dyn Storage) -> Result<usize, StorageError> {
    if !storage.list_tasks(TaskFilter::All)?.is_empty() {
        return Ok(0);
    }

    for (title, description, completed) in SAMPLE_TASKS {
        let task = storage.create_task(&NewTask::new(title, Some(description)))?;
        if completed {
            storage.update_task(task.id, &TaskPatch::completed(true))?;
        }
    }

    Ok(SAMPLE_TASKS.len())
}
