use crate::domain::Task;
use anyhow::Result;
use std::path::Path;
use thiserror::Error;

/// Why a task snapshot could not be decoded
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("malformed task snapshot: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Decode a serialized task list
pub fn decode_tasks(content: &str) -> Result<Vec<Task>, SnapshotError> {
    let mut tasks: Vec<Task> = serde_json::from_str(content)?;
    // Enforce the minimum estimate on hand-edited snapshots
    for task in &mut tasks {
        task.time_required = task.time_required.max(1);
    }
    Ok(tasks)
}

/// Load the task snapshot. A missing or malformed file means "no tasks";
/// it is never a fatal error.
pub fn load_tasks<P: AsRef<Path>>(path: P) -> Vec<Task> {
    let content = match super::read_file(&path) {
        Ok(content) => content,
        Err(_) => return Vec::new(),
    };
    if content.trim().is_empty() {
        return Vec::new();
    }

    match decode_tasks(&content) {
        Ok(tasks) => tasks,
        Err(e) => {
            eprintln!("Warning: discarding unreadable snapshot: {}", e);
            Vec::new()
        }
    }
}

/// Save the task snapshot atomically
pub fn save_tasks<P: AsRef<Path>>(path: P, tasks: &[Task]) -> Result<()> {
    let json = serde_json::to_string_pretty(tasks)?;
    super::atomic_write(path, &json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Priority;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("tasks.json");

        assert!(load_tasks(&path).is_empty());
    }

    #[test]
    fn test_load_malformed_file_is_empty() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("tasks.json");
        super::super::atomic_write(&path, "{ not json ]").unwrap();

        assert!(load_tasks(&path).is_empty());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("tasks.json");

        let tasks = vec![
            Task::new("first".to_string(), None, Priority::High, 2),
            Task::new("second".to_string(), None, Priority::Low, 1),
        ];
        save_tasks(&path, &tasks).unwrap();

        let loaded = load_tasks(&path);
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].id, tasks[0].id);
        assert_eq!(loaded[0].title, "first");
        assert_eq!(loaded[0].priority, Priority::High);
        assert_eq!(loaded[1].title, "second");
    }

    #[test]
    fn test_decode_clamps_zero_estimate() {
        let json = format!(
            r#"[{{"id":"{}","title":"x","date":"2026-08-30","priority":"medium","time_required":0,"completed":false}}]"#,
            uuid::Uuid::new_v4()
        );
        let tasks = decode_tasks(&json).unwrap();
        assert_eq!(tasks[0].time_required, 1);
    }

    #[test]
    fn test_decode_rejects_bad_priority() {
        let json = format!(
            r#"[{{"id":"{}","title":"x","date":"2026-08-30","priority":"urgent","time_required":1,"completed":false}}]"#,
            uuid::Uuid::new_v4()
        );
        assert!(decode_tasks(&json).is_err());
    }
}
