//! Display implementations for domain models.
//!
//! All output is markdown so the CLI can render it through termimad or
//! print it verbatim.

use std::fmt;

use crate::{
    models::{Milestone, MilestoneKind, Task},
    resolver::{CompletedGroup, Theme},
};

impl Milestone {
    /// Short status label with an icon.
    ///
    /// ```rust
    /// use atelier_core::models::{Id, Milestone, MilestoneKind};
    ///
    /// let mut milestone = Milestone {
    ///     id: Id::new("1"),
    ///     sequence_order: 1,
    ///     name: "Sewing".to_string(),
    ///     description: None,
    ///     progress: 40,
    ///     is_done: false,
    ///     current_task: None,
    ///     kind: MilestoneKind::Normal,
    /// };
    /// assert_eq!(milestone.status_label(), "➤ 40%");
    ///
    /// milestone.progress = 0;
    /// assert_eq!(milestone.status_label(), "○ Not started");
    /// ```
    pub fn status_label(&self) -> String {
        if self.is_fully_done() {
            "✓ Done".to_string()
        } else if self.is_quality_check_pending() {
            "⧗ Awaiting verdict".to_string()
        } else if self.is_done {
            format!("✓ Done at {}%", self.progress)
        } else if self.is_not_started() {
            "○ Not started".to_string()
        } else {
            format!("➤ {}%", self.progress)
        }
    }
}

impl fmt::Display for MilestoneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MilestoneKind::Normal => "normal",
            MilestoneKind::QualityCheck => "quality check",
            MilestoneKind::QualityCheckRework => "quality check rework",
        };
        f.write_str(label)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Normal => f.write_str("normal"),
            Theme::Failure => f.write_str("failure"),
        }
    }
}

impl fmt::Display for Milestone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {}. {} ({})",
            self.sequence_order,
            self.name,
            self.status_label()
        )?;
        writeln!(f)?;

        if self.kind != MilestoneKind::Normal {
            writeln!(f, "- Kind: {}", self.kind)?;
        }
        if let Some(task) = &self.current_task {
            writeln!(f, "- Current task: {}", task.name)?;
        }
        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        Ok(())
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let detail = &self.detail;
        write!(f, "- {} ({})", self.name, detail.status.with_icon())?;
        if let Some(assignee) = &detail.charge_name {
            write!(f, " @{assignee}")?;
        }
        writeln!(f)?;

        if let Some(note) = &detail.note {
            writeln!(f, "  - Note: {note}")?;
        }
        if let Some(image) = &detail.image {
            writeln!(f, "  - Image: {image}")?;
        }
        Ok(())
    }
}

impl fmt::Display for CompletedGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "#### {}. {}", self.sequence_order, self.milestone_name)?;
        writeln!(f)?;
        for task in &self.tasks {
            write!(f, "{task}")?;
        }
        writeln!(f)
    }
}
