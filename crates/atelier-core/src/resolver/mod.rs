//! Milestone progress resolution.
//!
//! Given the milestones of one order item and their tasks, the [`Resolver`]
//! decides which single milestone the progress timeline highlights, or that
//! the pipeline is finished. It is a pure function of its input: no I/O, no
//! shared state, safe to call again on every refetched snapshot.
//!
//! # Selection rules
//!
//! Milestones are first sorted by `sequence_order`; input order is never
//! trusted.
//!
//! 1. If a quality check is waiting on its verdict (`progress == 100`,
//!    `is_done == false`):
//!    - an unfinished rework milestone is shown;
//!    - a finished rework milestone hands over to the first unfinished
//!      milestone after it;
//!    - without a rework milestone, the first unfinished milestone after the
//!      quality check is shown.
//! 2. Otherwise the first milestone in progress is shown, then the first one
//!    not yet started.
//! 3. If nothing qualifies, the pipeline is reported as all done.
//!
//! "Unfinished" means not `progress == 100 && is_done`.
//!
//! # Examples
//!
//! ```rust
//! use atelier_core::{
//!     models::{Id, Milestone, MilestoneKind, TaskMap},
//!     resolver::{resolve, RenderDecision},
//! };
//!
//! let milestone = |id: &str, order, progress, is_done| Milestone {
//!     id: Id::new(id),
//!     sequence_order: order,
//!     name: id.to_string(),
//!     description: None,
//!     progress,
//!     is_done,
//!     current_task: None,
//!     kind: MilestoneKind::Normal,
//! };
//!
//! let milestones = vec![
//!     milestone("Sewing", 2, 40, false),
//!     milestone("Cutting", 1, 100, true),
//! ];
//! let decision = resolve(&milestones, &TaskMap::new());
//! assert_eq!(decision.current_milestone().map(|m| m.name.as_str()), Some("Sewing"));
//! ```

pub mod builder;
pub mod decision;
pub mod rollup;


use log::debug;

pub use builder::ResolverBuilder;
pub use decision::{AllDone, CurrentMilestone, RenderDecision, Theme};
pub use rollup::{CollapsedView, CompletedGroup};

use crate::{
    config::ResolverConfig,
    models::{Milestone, MilestoneKind, TaskMap},
    snapshot::OrderItemSnapshot,
};

/// Resolve with the default configuration.
pub fn resolve(milestones: &[Milestone], tasks: &TaskMap) -> RenderDecision {
    Resolver::default().resolve(milestones, tasks)
}

/// Stateless decision function bound to a configuration.
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    config: ResolverConfig,
}

impl Resolver {
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Decide what the progress timeline should render.
    pub fn resolve(&self, milestones: &[Milestone], tasks: &TaskMap) -> RenderDecision {
        if milestones.is_empty() {
            debug!("No milestones assigned");
            return RenderDecision::Empty;
        }

        let sorted = sort_milestones(milestones);
        match select_current(&sorted) {
            Some(milestone) => self.current(milestone, &sorted, tasks),
            None => self.all_done(&sorted, tasks),
        }
    }

    /// Merge the snapshot's feeds with this resolver's kind rules and resolve.
    pub fn resolve_snapshot(&self, snapshot: &OrderItemSnapshot) -> RenderDecision {
        let (milestones, tasks) = snapshot.to_parts(&self.config.kind_rules);
        self.resolve(&milestones, &tasks)
    }

    fn current(
        &self,
        milestone: &Milestone,
        sorted: &[&Milestone],
        tasks: &TaskMap,
    ) -> RenderDecision {
        let theme = if milestone.kind.is_quality_related() {
            Theme::Failure
        } else {
            Theme::Normal
        };

        let finished = sorted.iter().copied().filter(|m| m.progress == 100);

        RenderDecision::Current(CurrentMilestone {
            milestone: milestone.clone(),
            theme,
            completed_tasks: rollup::completed_tasks_of(milestone, tasks),
            prior_completed_groups: rollup::completed_groups(finished, tasks),
        })
    }

    fn all_done(&self, sorted: &[&Milestone], tasks: &TaskMap) -> RenderDecision {
        let groups = rollup::completed_groups(sorted.iter().copied(), tasks);
        let total_completed_tasks = rollup::total_tasks(&groups);
        debug!("All milestones done, {total_completed_tasks} completed task(s)");

        let collapsed = (total_completed_tasks > self.config.collapse_threshold).then(|| {
            CollapsedView::new(
                &groups,
                self.config.preview_groups,
                self.config.preview_tasks,
            )
        });

        RenderDecision::AllDone(AllDone {
            groups,
            total_completed_tasks,
            collapsed,
        })
    }
}

/// Ascending `sequence_order`; equal orders only occur in malformed input
/// and are ordered by id.
fn sort_milestones(milestones: &[Milestone]) -> Vec<&Milestone> {
    let mut sorted: Vec<&Milestone> = milestones.iter().collect();
    sorted.sort_by(|a, b| {
        a.sequence_order
            .cmp(&b.sequence_order)
            .then_with(|| a.id.cmp(&b.id))
    });
    sorted
}

fn select_current<'a>(sorted: &[&'a Milestone]) -> Option<&'a Milestone> {
    if let Some(pending) = sorted.iter().find(|m| m.is_quality_check_pending()) {
        let rework = sorted
            .iter()
            .find(|m| m.kind == MilestoneKind::QualityCheckRework);

        return match rework {
            Some(rework) if !rework.is_fully_done() => {
                debug!("Quality check {} failed, rework {} in progress", pending.id, rework.id);
                Some(*rework)
            }
            Some(rework) => {
                debug!("Rework {} finished", rework.id);
                first_unfinished_after(sorted, rework.sequence_order)
            }
            None => {
                debug!("Quality check {} awaiting verdict", pending.id);
                first_unfinished_after(sorted, pending.sequence_order)
            }
        };
    }

    let selected = sorted
        .iter()
        .find(|m| m.is_in_progress())
        .or_else(|| sorted.iter().find(|m| m.is_not_started()))
        .copied();
    if let Some(milestone) = selected {
        debug!("Milestone {} is current", milestone.id);
    }
    selected
}

fn first_unfinished_after<'a>(sorted: &[&'a Milestone], order: i64) -> Option<&'a Milestone> {
    sorted
        .iter()
        .find(|m| m.sequence_order > order && !m.is_fully_done())
        .copied()
}
