//! Resolver configuration.
//!
//! Every field has a default, so an empty JSON object is a valid
//! configuration file and a partial one overrides only what it names.
//!
//! ```json
//! {
//!   "collapseThreshold": 6,
//!   "previewGroups": 2,
//!   "previewTasks": 2,
//!   "kindRules": { "qualityCheck": "quality check", "rework": "quality check failed" }
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    error::{AtelierError, Result},
    models::KindRules,
};

/// Completed-task count above which the all-done rollup collapses.
pub const DEFAULT_COLLAPSE_THRESHOLD: usize = 6;

/// Groups shown in a collapsed rollup.
pub const DEFAULT_PREVIEW_GROUPS: usize = 2;

/// Tasks shown per group in a collapsed rollup.
pub const DEFAULT_PREVIEW_TASKS: usize = 2;

/// Settings that shape the resolver's output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResolverConfig {
    /// Collapse the all-done rollup when more tasks than this are completed
    pub collapse_threshold: usize,

    /// Number of groups in the collapsed preview
    pub preview_groups: usize,

    /// Number of tasks per group in the collapsed preview
    pub preview_tasks: usize,

    /// Name rules for milestones without an explicit kind
    pub kind_rules: KindRules,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            collapse_threshold: DEFAULT_COLLAPSE_THRESHOLD,
            preview_groups: DEFAULT_PREVIEW_GROUPS,
            preview_tasks: DEFAULT_PREVIEW_TASKS,
            kind_rules: KindRules::default(),
        }
    }
}

impl ResolverConfig {
    /// Read a configuration file and validate it.
    ///
    /// # Errors
    ///
    /// Returns `AtelierError::FileSystem` if the file cannot be read,
    /// `AtelierError::Serialization` if it is not valid JSON and
    /// `AtelierError::InvalidInput` if a value is out of range.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| AtelierError::file_system(path, e))?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the resolver cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.preview_groups == 0 {
            return Err(AtelierError::invalid_input("previewGroups")
                .with_reason("must be at least 1"));
        }
        if self.preview_tasks == 0 {
            return Err(AtelierError::invalid_input("previewTasks")
                .with_reason("must be at least 1"));
        }
        if self.kind_rules.quality_check.trim().is_empty() {
            return Err(AtelierError::invalid_input("kindRules.qualityCheck")
                .with_reason("cannot be empty"));
        }
        if self.kind_rules.rework.trim().is_empty() {
            return Err(AtelierError::invalid_input("kindRules.rework")
                .with_reason("cannot be empty"));
        }
        Ok(())
    }
}
