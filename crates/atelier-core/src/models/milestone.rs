//! Milestone model definition and related functionality.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Id, MilestoneKind};

/// Reference to the task currently active within a milestone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CurrentTask {
    /// Display name of the active task
    pub name: String,
}

/// A named stage in an order item's production pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    /// Opaque identifier
    pub id: Id,

    /// Position in the pipeline, unique within one order item
    pub sequence_order: i64,

    /// Free-text label
    pub name: String,

    /// Optional longer description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Derived completion percentage (0-100); may lag behind task state
    pub progress: u8,

    /// Authoritative completion flag
    pub is_done: bool,

    /// Task currently active within the milestone
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_task: Option<CurrentTask>,

    /// Role of the milestone in the quality-check cycle
    pub kind: MilestoneKind,
}

impl Milestone {
    /// Progress is at 100% and the completion flag is set.
    pub fn is_fully_done(&self) -> bool {
        self.progress == 100 && self.is_done
    }

    /// Work has started but the milestone is not flagged done.
    pub fn is_in_progress(&self) -> bool {
        self.progress > 0 && !self.is_done
    }

    /// No progress recorded yet.
    pub fn is_not_started(&self) -> bool {
        self.progress == 0
    }

    /// A quality check whose tasks are all finished but whose verdict has not
    /// been recorded: `progress == 100` while `is_done` is still false.
    pub fn is_quality_check_pending(&self) -> bool {
        self.kind == MilestoneKind::QualityCheck && self.progress == 100 && !self.is_done
    }
}
