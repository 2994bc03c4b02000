//! Task data model

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Todo,
    InProgress,
    Done,
}

impl Status {
    /// Parse a status from its canonical text form
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "todo" => Some(Self::Todo),
            "in-progress" => Some(Self::InProgress),
            "done" => Some(Self::Done),
            _ => None,
        }
    }

    /// Get the text label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single trackable unit of work. Field names match the persisted
/// JSON format; every field is required on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u32,
    pub description: String,
    pub status: Status,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    pub fn new(id: u32, description: &str) -> Self {
        let now = now();
        Self {
            id,
            description: description.to_string(),
            status: Status::Todo,
            created_at: now,
            updated_at: now,
        }
    }

    /// Refresh `updated_at`; called on every mutation of the task
    pub fn touch(&mut self) {
        self.updated_at = now();
    }

    /// One export line: `[<id>] <description> - <status> (Created: <createdAt>)`
    pub fn export_line(&self) -> String {
        format!(
            "[{}] {} - {} (Created: {})",
            self.id,
            self.description,
            self.status,
            self.created_at.format("%Y-%m-%dT%H:%M:%SZ")
        )
    }
}

/// Current time at second precision. Timestamps are stored whole-second
/// so a round-trip through the JSON file compares equal.
pub(crate) fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse_canonical_values() {
        assert_eq!(Status::parse("todo"), Some(Status::Todo));
        assert_eq!(Status::parse("in-progress"), Some(Status::InProgress));
        assert_eq!(Status::parse("done"), Some(Status::Done));
    }

    #[test]
    fn test_status_parse_trims_whitespace() {
        assert_eq!(Status::parse("  done  "), Some(Status::Done));
    }

    #[test]
    fn test_status_parse_rejects_unknown() {
        assert_eq!(Status::parse("blocked"), None);
        assert_eq!(Status::parse(""), None);
        assert_eq!(Status::parse("Done"), None);
    }

    #[test]
    fn test_status_display_matches_label() {
        assert_eq!(Status::InProgress.to_string(), "in-progress");
    }

    #[test]
    fn test_new_task_starts_todo_with_equal_timestamps() {
        let task = Task::new(1, "write tests");
        assert_eq!(task.id, 1);
        assert_eq!(task.status, Status::Todo);
        assert_eq!(task.created_at, task.updated_at);
        assert_eq!(task.created_at.timestamp_subsec_nanos(), 0);
    }

    #[test]
    fn test_touch_never_moves_updated_at_backwards() {
        let mut task = Task::new(1, "a");
        let created = task.created_at;
        task.touch();
        assert_eq!(task.created_at, created);
        assert!(task.updated_at >= created);
    }

    #[test]
    fn test_task_serializes_with_camel_case_fields() {
        let task = Task::new(3, "ship it");
        let json = serde_json::to_string(&task).unwrap();
        assert!(json.contains("\"createdAt\""));
        assert!(json.contains("\"updatedAt\""));
        assert!(json.contains("\"status\":\"todo\""));
    }

    #[test]
    fn test_task_deserializes_persisted_format() {
        let json = r#"{
            "id": 7,
            "description": "buy milk",
            "status": "in-progress",
            "createdAt": "2024-05-01T09:30:00Z",
            "updatedAt": "2024-05-02T10:00:00Z"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, 7);
        assert_eq!(task.status, Status::InProgress);
        assert!(task.created_at <= task.updated_at);
    }

    #[test]
    fn test_task_with_missing_field_is_rejected() {
        let json = r#"{"id": 1, "description": "x", "status": "todo"}"#;
        assert!(serde_json::from_str::<Task>(json).is_err());
    }

    #[test]
    fn test_export_line_format() {
        let mut task = Task::new(4, "water plants");
        task.created_at = "2024-05-01T09:30:00Z".parse().unwrap();
        assert_eq!(
            task.export_line(),
            "[4] water plants - todo (Created: 2024-05-01T09:30:00Z)"
        );
    }
}
