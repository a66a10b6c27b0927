//! Core library for the atelier production dashboard.
//!
//! The centerpiece is the milestone progress [`resolver`]: a pure function
//! from an order item's milestones and tasks to a [`RenderDecision`] telling
//! the progress timeline which milestone to highlight, or that the pipeline
//! is finished. Around it sit the feed adapters in [`snapshot`], the
//! [`config`] that shapes the output, and markdown rendering in [`display`].
//!
//! # Quick Start
//!
//! ```rust
//! use atelier_core::{ResolverBuilder, SnapshotDocument, display::ResolvedOrderItem};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let resolver = ResolverBuilder::new().build()?;
//!
//! let document = SnapshotDocument::from_json(r#"{
//!     "orderItemId": 1,
//!     "timeline": [
//!         { "milestone": { "id": 1, "name": "Cutting", "sequenceOrder": 1 },
//!           "progress": 100, "isDone": true },
//!         { "milestone": { "id": 2, "name": "Sewing", "sequenceOrder": 2 },
//!           "progress": 30, "isDone": false }
//!     ]
//! }"#)?;
//!
//! for snapshot in document.into_snapshots() {
//!     let decision = resolver.resolve_snapshot(&snapshot);
//!     assert_eq!(decision.current_milestone().map(|m| m.name.as_str()), Some("Sewing"));
//!     println!("{}", ResolvedOrderItem { snapshot: &snapshot, decision: &decision, expanded: false });
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod resolver;
pub mod snapshot;

// Re-export commonly used types
pub use config::ResolverConfig;
pub use display::{DecisionView, ResolvedOrderItem};
pub use error::{AtelierError, Result};
pub use models::{Id, Milestone, MilestoneKind, Task, TaskMap, TaskStatus};
pub use resolver::{resolve, RenderDecision, Resolver, ResolverBuilder, Theme};
pub use snapshot::{OrderItemSnapshot, SnapshotDocument};
