//! Result type pairing an order item with its resolved decision.

use std::fmt;

use super::{datetime::LocalDateTime, decision::DecisionView};
use crate::{resolver::RenderDecision, snapshot::OrderItemSnapshot};

/// An order item snapshot together with the decision resolved from it.
pub struct ResolvedOrderItem<'a> {
    pub snapshot: &'a OrderItemSnapshot,
    pub decision: &'a RenderDecision,
    pub expanded: bool,
}

impl<'a> fmt::Display for ResolvedOrderItem<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.snapshot.order_item_id {
            Some(id) => writeln!(f, "# Order item {id}")?,
            None => writeln!(f, "# Order item")?,
        }
        writeln!(f)?;

        writeln!(f, "- Milestones: {}", self.snapshot.timeline.len())?;
        if let Some(fetched_at) = &self.snapshot.fetched_at {
            writeln!(f, "- Fetched: {}", LocalDateTime(fetched_at))?;
        }
        writeln!(f)?;

        write!(
            f,
            "{}",
            DecisionView::new(self.decision).expanded(self.expanded)
        )
    }
}
