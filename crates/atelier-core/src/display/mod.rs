//! Markdown rendering for milestones, tasks and resolver decisions.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! collections and decisions go through small wrapper types so that the same
//! data can be shown collapsed or expanded, standalone or under an order item
//! header.
//!
//! - [`collections`]: `CompletedGroups`, `Tasks`
//! - [`decision`]: `DecisionView`
//! - [`results`]: `ResolvedOrderItem`
//! - [`datetime`]: `LocalDateTime`
//!
//! ```rust
//! use atelier_core::{display::DecisionView, resolver::RenderDecision};
//!
//! let output = DecisionView::new(&RenderDecision::Empty).to_string();
//! assert_eq!(output, "No milestones assigned.\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod decision;
pub mod models;
pub mod results;

#[cfg(test)]
mod tests;

pub use collections::{CompletedGroups, Tasks};
pub use datetime::LocalDateTime;
pub use decision::DecisionView;
pub use results::ResolvedOrderItem;
