//! Resolver output.

use serde::Serialize;

use super::rollup::{CollapsedView, CompletedGroup};
use crate::models::{Milestone, Task};

/// Visual treatment of the highlighted milestone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Theme {
    /// Regular production stage
    Normal,

    /// Quality check pending or rework in progress
    Failure,
}

/// A single milestone to highlight, with rollups of finished work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentMilestone {
    pub milestone: Milestone,
    pub theme: Theme,
    /// Completed tasks of the highlighted milestone
    pub completed_tasks: Vec<Task>,
    /// Completed tasks of every milestone at 100% progress
    pub prior_completed_groups: Vec<CompletedGroup>,
}

/// Every milestone is finished.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllDone {
    /// Completed tasks per milestone, in pipeline order
    pub groups: Vec<CompletedGroup>,
    pub total_completed_tasks: usize,
    /// Preview to show first when the rollup is long
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<CollapsedView>,
}

impl AllDone {
    /// Whether the UI should start collapsed and offer an expand action.
    pub fn is_collapsible(&self) -> bool {
        self.collapsed.is_some()
    }
}

/// What the progress timeline should render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RenderDecision {
    /// No milestones assigned
    Empty,
    /// One milestone is in progress or up next
    Current(CurrentMilestone),
    /// The pipeline is finished
    AllDone(AllDone),
}

impl RenderDecision {
    /// The highlighted milestone, if any.
    pub fn current_milestone(&self) -> Option<&Milestone> {
        match self {
            RenderDecision::Current(current) => Some(&current.milestone),
            _ => None,
        }
    }

    pub fn is_all_done(&self) -> bool {
        matches!(self, RenderDecision::AllDone(_))
    }
}
