//! Collection wrapper types for displaying groups of completed tasks.

use std::fmt;

use crate::{models::Task, resolver::CompletedGroup};

/// Newtype wrapper for displaying a list of completed-task groups.
///
/// # Examples
///
/// ```rust
/// use atelier_core::{display::CompletedGroups, models::Id, resolver::CompletedGroup};
///
/// let groups = vec![CompletedGroup {
///     milestone_id: Id::new("7"),
///     milestone_name: "Cutting".to_string(),
///     sequence_order: 1,
///     tasks: vec![],
/// }];
/// let output = CompletedGroups(&groups).to_string();
/// assert!(output.contains("#### 1. Cutting"));
///
/// assert_eq!(CompletedGroups(&[]).to_string(), "No completed tasks.\n");
/// ```
pub struct CompletedGroups<'a>(pub &'a [CompletedGroup]);

impl<'a> fmt::Display for CompletedGroups<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No completed tasks.")
        } else {
            for group in self.0 {
                write!(f, "{group}")?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying a flat list of tasks.
pub struct Tasks<'a>(pub &'a [Task]);

impl<'a> fmt::Display for Tasks<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No completed tasks.")
        } else {
            for task in self.0 {
                write!(f, "{task}")?;
            }
            Ok(())
        }
    }
}
