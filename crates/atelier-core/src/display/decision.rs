//! Rendering of resolver decisions.

use std::fmt;

use super::collections::{CompletedGroups, Tasks};
use crate::resolver::{AllDone, CurrentMilestone, RenderDecision};

/// Wrapper that renders a [`RenderDecision`] as markdown.
///
/// Long all-done rollups are shown collapsed unless `expanded` is set. The
/// flag is view state owned by the caller; the decision itself never changes.
pub struct DecisionView<'a> {
    pub decision: &'a RenderDecision,
    pub expanded: bool,
}

impl<'a> DecisionView<'a> {
    /// Create a collapsed view.
    pub fn new(decision: &'a RenderDecision) -> Self {
        Self {
            decision,
            expanded: false,
        }
    }

    /// Show every completed task, even past the collapse threshold.
    pub fn expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    fn fmt_current(current: &CurrentMilestone, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Current milestone")?;
        writeln!(f)?;
        write!(f, "{}", current.milestone)?;
        writeln!(f, "- Theme: {}", current.theme)?;
        writeln!(f)?;

        if !current.completed_tasks.is_empty() {
            writeln!(f, "#### Completed tasks")?;
            writeln!(f)?;
            write!(f, "{}", Tasks(&current.completed_tasks))?;
            writeln!(f)?;
        }

        if !current.prior_completed_groups.is_empty() {
            writeln!(f, "## Finished milestones")?;
            writeln!(f)?;
            write!(f, "{}", CompletedGroups(&current.prior_completed_groups))?;
        }
        Ok(())
    }

    fn fmt_all_done(&self, done: &AllDone, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## All milestones done")?;
        writeln!(f)?;
        writeln!(f, "Completed tasks: {}", done.total_completed_tasks)?;
        writeln!(f)?;

        match &done.collapsed {
            Some(preview) if !self.expanded => {
                write!(f, "{}", CompletedGroups(&preview.groups))?;
                if preview.hidden_tasks > 0 {
                    writeln!(
                        f,
                        "_{} more completed task(s) hidden._",
                        preview.hidden_tasks
                    )?;
                }
                Ok(())
            }
            _ => write!(f, "{}", CompletedGroups(&done.groups)),
        }
    }
}

impl<'a> fmt::Display for DecisionView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.decision {
            RenderDecision::Empty => writeln!(f, "No milestones assigned."),
            RenderDecision::Current(current) => Self::fmt_current(current, f),
            RenderDecision::AllDone(done) => self.fmt_all_done(done, f),
        }
    }
}

impl fmt::Display for RenderDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", DecisionView::new(self))
    }
}
