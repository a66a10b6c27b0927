//! Task model definition.

use std::collections::HashMap;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Id, TaskStatus};

/// Tasks grouped by the id of the milestone they belong to.
pub type TaskMap = HashMap<Id, Vec<Task>>;

/// Completion details attached to a task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(default, rename_all = "camelCase")]
pub struct TaskDetail {
    /// Reported status
    #[serde(default, deserialize_with = "crate::models::de::null_as_default")]
    #[cfg_attr(feature = "schema", schemars(with = "String"))]
    pub status: TaskStatus,

    /// Free-form note left on completion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// Image reference left on completion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Assignee id
    #[serde(skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "schema", schemars(with = "Option<super::id::IdSchema>"))]
    pub charge_id: Option<Id>,

    /// Assignee display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charge_name: Option<String>,
}

/// A unit of work within a milestone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Opaque identifier
    #[serde(default, deserialize_with = "crate::models::de::null_as_default")]
    #[cfg_attr(feature = "schema", schemars(with = "super::id::IdSchema"))]
    pub id: Id,

    /// Display name
    #[serde(default, deserialize_with = "crate::models::de::null_as_default")]
    pub name: String,

    /// Position within the milestone
    #[serde(default, deserialize_with = "crate::models::de::null_as_default")]
    pub sequence_order: i64,

    /// Status and completion annotations
    #[serde(default, deserialize_with = "crate::models::de::null_as_default")]
    pub detail: TaskDetail,
}

impl Task {
    /// Whether the task counts as finished work.
    pub fn is_completed(&self) -> bool {
        self.detail.status.is_completed()
    }
}
