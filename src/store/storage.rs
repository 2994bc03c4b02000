//! Task store - JSON file persistence and collection operations

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::{get_app_dir, Result, Status, StoreError, Task, TASKS_FILE};

/// Handle to the persisted task collection. Every mutating operation is a
/// whole-collection load, one mutation, and a full rewrite of the file;
/// reads load and do not write.
pub struct TaskStore {
    tasks_path: PathBuf,
}

impl TaskStore {
    /// Open the store in `data_dir`, or the default app directory when none
    /// is given. Creates the directory if missing; the tasks file itself is
    /// only created on the first save.
    pub fn open(data_dir: Option<PathBuf>) -> Result<Self> {
        let dir = match data_dir {
            Some(dir) => dir,
            None => get_app_dir()?,
        };
        fs::create_dir_all(&dir)?;
        Ok(Self {
            tasks_path: dir.join(TASKS_FILE),
        })
    }

    /// Store backed by an explicit file path. Used by tests and embedders
    /// that manage their own locations.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self {
            tasks_path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.tasks_path
    }

    /// Load the full collection. A missing or blank file is an empty
    /// collection, not an error.
    pub fn load(&self) -> Result<Vec<Task>> {
        if !self.tasks_path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.tasks_path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let tasks: Vec<Task> =
            serde_json::from_str(&content).map_err(|source| StoreError::Corrupt {
                path: self.tasks_path.display().to_string(),
                source,
            })?;
        debug!(count = tasks.len(), path = %self.tasks_path.display(), "loaded tasks");
        Ok(tasks)
    }

    /// Serialize the whole collection and overwrite the file in one step.
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        let content = serde_json::to_string_pretty(tasks)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        fs::write(&self.tasks_path, content)?;
        debug!(count = tasks.len(), path = %self.tasks_path.display(), "saved tasks");
        Ok(())
    }

    /// Append a new task with the next free id and persist. The new task
    /// starts as `todo` with `created_at == updated_at`.
    pub fn add(&self, description: &str) -> Result<Task> {
        let mut tasks = self.load()?;
        let task = Task::new(next_id(&tasks), description);
        tasks.push(task.clone());
        self.save(&tasks)?;
        Ok(task)
    }

    /// Replace the description of the task with `id` and persist.
    /// `NotFound` leaves the file untouched.
    pub fn update(&self, id: u32, description: &str) -> Result<Task> {
        let mut tasks = self.load()?;
        let task = tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))?;
        task.description = description.to_string();
        task.touch();
        let updated = task.clone();
        self.save(&tasks)?;
        Ok(updated)
    }

    /// Remove the task with `id` and persist. `NotFound` leaves the file
    /// untouched.
    pub fn delete(&self, id: u32) -> Result<()> {
        let mut tasks = self.load()?;
        let before = tasks.len();
        tasks.retain(|t| t.id != id);
        if tasks.len() == before {
            return Err(StoreError::NotFound(id));
        }
        self.save(&tasks)?;
        Ok(())
    }

    /// Move the task with `id` to `status` and persist. Any of the three
    /// statuses is a valid target; no transition ordering is enforced.
    pub fn set_status(&self, id: u32, status: Status) -> Result<Task> {
        let mut tasks = self.load()?;
        let task = tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))?;
        task.status = status;
        task.touch();
        let updated = task.clone();
        self.save(&tasks)?;
        Ok(updated)
    }

    /// Tasks in creation order, optionally narrowed to one status.
    pub fn list(&self, filter: Option<Status>) -> Result<Vec<Task>> {
        let tasks = self.load()?;
        match filter {
            Some(status) => Ok(tasks.into_iter().filter(|t| t.status == status).collect()),
            None => Ok(tasks),
        }
    }

    /// Formatted export lines, one per task, recomputed from a fresh
    /// `list()` on each call. Empty collection yields zero lines.
    pub fn export_lines(&self) -> Result<impl Iterator<Item = String>> {
        let tasks = self.list(None)?;
        Ok(tasks.into_iter().map(|t| t.export_line()))
    }
}

/// Next free id: `max(existing ids) + 1`, or 1 for an empty collection.
/// Computed from the live collection on every call; deleted ids below the
/// current maximum are never handed out again.
fn next_id(tasks: &[Task]) -> u32 {
    tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1
}
