//! Data models for milestones and tasks.
//!
//! These types are the resolver's view of an order item: a set of
//! [`Milestone`]s and, per milestone, the [`Task`]s that belong to it. They are
//! produced from the raw feeds by [`crate::snapshot`] and never mutated by the
//! resolver. Display implementations live in [`crate::display::models`].
//!
//! # Completion signals
//!
//! A milestone carries two completion signals that are deliberately kept
//! apart:
//!
//! - `progress`: derived percentage, may lag behind the tasks
//! - `is_done`: authoritative flag set by the workflow engine
//!
//! `progress == 100 && !is_done` on a quality-check milestone is the
//! "verdict pending" state the resolver keys on.
//!
//! # Examples
//!
//! ```rust
//! use atelier_core::models::{Id, Milestone, MilestoneKind};
//!
//! let milestone = Milestone {
//!     id: Id::new("m-1"),
//!     sequence_order: 1,
//!     name: "Quality Check".to_string(),
//!     description: None,
//!     progress: 100,
//!     is_done: false,
//!     current_task: None,
//!     kind: MilestoneKind::QualityCheck,
//! };
//! assert!(milestone.is_quality_check_pending());
//! assert!(!milestone.is_fully_done());
//! ```

pub(crate) mod de;
mod id;
pub mod kind;
pub mod milestone;
pub mod status;
pub mod task;

#[cfg(test)]
mod tests;

pub use id::Id;
#[cfg(feature = "schema")]
pub(crate) use id::IdSchema;
pub use kind::{KindRules, MilestoneKind};
pub use milestone::{CurrentTask, Milestone};
pub use status::TaskStatus;
pub use task::{Task, TaskDetail, TaskMap};
