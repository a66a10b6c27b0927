//! Completed-task rollups.

use serde::Serialize;

use crate::models::{Id, Milestone, Task, TaskMap};

/// Completed tasks of one milestone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedGroup {
    pub milestone_id: Id,
    pub milestone_name: String,
    pub sequence_order: i64,
    pub tasks: Vec<Task>,
}

/// Completed tasks from a list, ordered by `sequence_order`.
///
/// Equal orders fall back to the task id so the result does not depend on
/// the order the feed delivered them in.
pub fn completed_tasks(tasks: &[Task]) -> Vec<Task> {
    let mut completed: Vec<Task> = tasks.iter().filter(|t| t.is_completed()).cloned().collect();
    completed.sort_by(|a, b| {
        a.sequence_order
            .cmp(&b.sequence_order)
            .then_with(|| a.id.cmp(&b.id))
    });
    completed
}

/// Completed tasks of the given milestone, looked up in the task map.
pub fn completed_tasks_of(milestone: &Milestone, tasks: &TaskMap) -> Vec<Task> {
    tasks
        .get(&milestone.id)
        .map(|list| completed_tasks(list))
        .unwrap_or_default()
}

/// One group per milestone, in the order given, skipping milestones without
/// completed tasks.
pub fn completed_groups<'a, I>(milestones: I, tasks: &TaskMap) -> Vec<CompletedGroup>
where
    I: IntoIterator<Item = &'a Milestone>,
{
    milestones
        .into_iter()
        .filter_map(|milestone| {
            let completed = completed_tasks_of(milestone, tasks);
            (!completed.is_empty()).then(|| CompletedGroup {
                milestone_id: milestone.id.clone(),
                milestone_name: milestone.name.clone(),
                sequence_order: milestone.sequence_order,
                tasks: completed,
            })
        })
        .collect()
}

/// Total number of tasks across groups.
pub fn total_tasks(groups: &[CompletedGroup]) -> usize {
    groups.iter().map(|g| g.tasks.len()).sum()
}

/// Truncated preview of a long rollup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollapsedView {
    /// Leading groups, each cut down to the leading tasks
    pub groups: Vec<CompletedGroup>,

    /// Tasks left out of the preview
    pub hidden_tasks: usize,
}

impl CollapsedView {
    /// Keep the first `max_groups` groups and the first `max_tasks` tasks of
    /// each.
    pub fn new(groups: &[CompletedGroup], max_groups: usize, max_tasks: usize) -> Self {
        let preview: Vec<CompletedGroup> = groups
            .iter()
            .take(max_groups)
            .map(|group| CompletedGroup {
                tasks: group.tasks.iter().take(max_tasks).cloned().collect(),
                ..group.clone()
            })
            .collect();
        let hidden_tasks = total_tasks(groups) - total_tasks(&preview);

        Self {
            groups: preview,
            hidden_tasks,
        }
    }
}
