//! Adapters from the raw status-timeline and task-detail feeds to the
//! resolver's input shape.
//!
//! Both feeds are keyed by order item and fetched independently, so they can
//! disagree: a task-detail entry may reference a milestone id the timeline
//! does not know, or omit fields entirely. Everything here defaults instead of
//! failing: missing orders become `0`, missing lists become empty, and
//! out-of-range progress is clamped.

use std::path::Path;

use jiff::Timestamp;
use log::warn;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    error::{AtelierError, Result},
    models::{CurrentTask, Id, KindRules, Milestone, MilestoneKind, Task, TaskMap},
};

/// Milestone header as carried by the status-timeline feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(default, rename_all = "camelCase")]
pub struct MilestoneRef {
    #[cfg_attr(feature = "schema", schemars(with = "crate::models::IdSchema"))]
    #[serde(default, deserialize_with = "crate::models::de::null_as_default")]
    pub id: Id,
    #[serde(default, deserialize_with = "crate::models::de::null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "crate::models::de::null_as_default")]
    pub sequence_order: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Explicit role, when the backend supplies one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<MilestoneKind>,
}

/// One row of the status-timeline feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(default, rename_all = "camelCase")]
pub struct TimelineEntry {
    #[serde(default, deserialize_with = "crate::models::de::null_as_default")]
    pub milestone: MilestoneRef,
    #[serde(default, deserialize_with = "crate::models::de::null_as_default")]
    pub progress: f64,
    #[serde(default, deserialize_with = "crate::models::de::null_as_default")]
    pub is_done: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_task: Option<CurrentTask>,
}

impl TimelineEntry {
    /// Convert to a [`Milestone`], resolving its kind and clamping progress.
    pub fn to_milestone(&self, rules: &KindRules) -> Milestone {
        let header = &self.milestone;
        let kind = header
            .kind
            .unwrap_or_else(|| rules.classify(&header.name));

        Milestone {
            id: header.id.clone(),
            sequence_order: header.sequence_order,
            name: header.name.clone(),
            description: header.description.clone(),
            progress: clamp_progress(&header.id, self.progress),
            is_done: self.is_done,
            current_task: self.current_task.clone(),
            kind,
        }
    }
}

fn clamp_progress(id: &Id, raw: f64) -> u8 {
    if !(0.0..=100.0).contains(&raw) {
        warn!("Milestone {id} reported progress {raw}, clamping to 0..=100");
    }
    // Floor so that 99.6% never reads as complete.
    raw.clamp(0.0, 100.0).floor() as u8
}

/// One milestone of the task-detail feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(default, rename_all = "camelCase")]
pub struct TaskDetailMilestone {
    #[cfg_attr(feature = "schema", schemars(with = "crate::models::IdSchema"))]
    #[serde(default, deserialize_with = "crate::models::de::null_as_default")]
    pub id: Id,
    #[serde(default, deserialize_with = "crate::models::de::null_as_default")]
    pub sequence_order: i64,
    #[serde(default, deserialize_with = "crate::models::de::null_as_default")]
    pub tasks: Vec<Task>,
}

/// Point-in-time snapshot of a single order item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(default, rename_all = "camelCase")]
pub struct OrderItemSnapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "schema", schemars(with = "Option<crate::models::IdSchema>"))]
    pub order_item_id: Option<Id>,

    /// When the data layer fetched this snapshot (RFC 3339)
    #[serde(skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "schema", schemars(with = "Option<String>"))]
    pub fetched_at: Option<Timestamp>,

    #[serde(default, deserialize_with = "crate::models::de::null_as_default")]
    pub timeline: Vec<TimelineEntry>,
    #[serde(default, deserialize_with = "crate::models::de::null_as_default")]
    pub task_details: Vec<TaskDetailMilestone>,
}

impl OrderItemSnapshot {
    /// Merge both feeds into resolver input.
    ///
    /// Task lists are attached to a timeline milestone by id, falling back
    /// to `sequenceOrder` when the id is unknown. Lists matching neither are
    /// dropped.
    pub fn to_parts(&self, rules: &KindRules) -> (Vec<Milestone>, TaskMap) {
        let milestones: Vec<Milestone> = self
            .timeline
            .iter()
            .map(|entry| entry.to_milestone(rules))
            .collect();

        let mut tasks = TaskMap::new();
        for detail in &self.task_details {
            let owner = milestones
                .iter()
                .find(|m| m.id == detail.id)
                .or_else(|| {
                    milestones
                        .iter()
                        .find(|m| m.sequence_order == detail.sequence_order)
                });

            match owner {
                Some(milestone) => tasks
                    .entry(milestone.id.clone())
                    .or_default()
                    .extend(detail.tasks.iter().cloned()),
                None => warn!(
                    "Dropping {} task(s) for unknown milestone {} (sequence {})",
                    detail.tasks.len(),
                    detail.id,
                    detail.sequence_order
                ),
            }
        }

        (milestones, tasks)
    }
}

/// Input document: one snapshot or a list of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(untagged)]
pub enum SnapshotDocument {
    Many(Vec<OrderItemSnapshot>),
    One(OrderItemSnapshot),
}

impl SnapshotDocument {
    /// Parse a document from JSON text.
    ///
    /// Dispatches on the leading token rather than trying each variant, so
    /// a malformed value is reported with its line and column.
    pub fn from_json(text: &str) -> Result<Self> {
        let document = if text.trim_start().starts_with('[') {
            SnapshotDocument::Many(serde_json::from_str(text)?)
        } else {
            SnapshotDocument::One(serde_json::from_str(text)?)
        };
        Ok(document)
    }

    /// Read and parse a document from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| AtelierError::file_system(path, e))?;
        Self::from_json(&text)
    }

    /// Flatten into a list of snapshots.
    pub fn into_snapshots(self) -> Vec<OrderItemSnapshot> {
        match self {
            SnapshotDocument::Many(many) => many,
            SnapshotDocument::One(one) => vec![one],
        }
    }
}
