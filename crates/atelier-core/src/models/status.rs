//! Task status values reported by the workflow engine.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Status of a task as reported in `detail.status`.
///
/// The backend does not publish a closed set of values, so anything not
/// recognized is kept verbatim in [`TaskStatus::Unknown`] and treated as not
/// completed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskStatus {
    /// Task has not been picked up
    #[default]
    Pending,

    /// Task is being worked on
    InProgress,

    /// Task has been finished
    Done,

    /// Inspection task passed
    Pass,

    /// Inspection task failed; a terminal outcome, not a retry signal
    Fail,

    /// Task has been completed
    Completed,

    /// Task was withdrawn
    Cancelled,

    /// Any value this crate does not know about
    Unknown(String),
}

impl TaskStatus {
    /// Parse a status string. Never fails; unrecognized input is preserved.
    pub fn parse(raw: &str) -> Self {
        let normalized: String = raw
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-' && *c != ' ')
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "pending" => TaskStatus::Pending,
            "inprogress" => TaskStatus::InProgress,
            "done" => TaskStatus::Done,
            "pass" => TaskStatus::Pass,
            "fail" => TaskStatus::Fail,
            "completed" => TaskStatus::Completed,
            "cancelled" => TaskStatus::Cancelled,
            _ => TaskStatus::Unknown(raw.to_string()),
        }
    }

    /// Whether the status counts as finished work for rollups.
    ///
    /// `Fail` is included: a failed inspection is a finished task.
    pub fn is_completed(&self) -> bool {
        matches!(
            self,
            TaskStatus::Done | TaskStatus::Pass | TaskStatus::Fail | TaskStatus::Completed
        )
    }

    /// Wire representation.
    pub fn as_str(&self) -> &str {
        match self {
            TaskStatus::Pending => "PENDING",
            TaskStatus::InProgress => "IN_PROGRESS",
            TaskStatus::Done => "DONE",
            TaskStatus::Pass => "PASS",
            TaskStatus::Fail => "FAIL",
            TaskStatus::Completed => "COMPLETED",
            TaskStatus::Cancelled => "CANCELLED",
            TaskStatus::Unknown(raw) => raw,
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use atelier_core::models::TaskStatus;
    ///
    /// assert_eq!(TaskStatus::Done.with_icon(), "✓ Done");
    /// assert_eq!(TaskStatus::Fail.with_icon(), "✗ Fail");
    /// assert_eq!(TaskStatus::parse("ON_HOLD").with_icon(), "? ON_HOLD");
    /// ```
    pub fn with_icon(&self) -> String {
        match self {
            TaskStatus::Pending => "○ Pending".to_string(),
            TaskStatus::InProgress => "➤ In Progress".to_string(),
            TaskStatus::Done => "✓ Done".to_string(),
            TaskStatus::Pass => "✓ Pass".to_string(),
            TaskStatus::Fail => "✗ Fail".to_string(),
            TaskStatus::Completed => "✓ Completed".to_string(),
            TaskStatus::Cancelled => "⊘ Cancelled".to_string(),
            TaskStatus::Unknown(raw) => format!("? {raw}"),
        }
    }
}

impl From<String> for TaskStatus {
    fn from(raw: String) -> Self {
        TaskStatus::parse(&raw)
    }
}

impl From<TaskStatus> for String {
    fn from(status: TaskStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
