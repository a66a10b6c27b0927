//! Milestone roles in the production pipeline.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The role a milestone plays in the quality-check cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MilestoneKind {
    /// Ordinary production stage
    #[default]
    Normal,

    /// Review stage whose completion waits on a pass/fail verdict
    QualityCheck,

    /// Corrective stage entered after a failed quality check
    QualityCheckRework,
}

impl MilestoneKind {
    /// Whether the milestone belongs to the quality-check cycle at all.
    pub fn is_quality_related(&self) -> bool {
        !matches!(self, MilestoneKind::Normal)
    }
}

/// Substring rules used to derive a [`MilestoneKind`] from a free-text name
/// when the backend does not send an explicit kind.
///
/// Matching is case-insensitive. The rework rule wins over the quality-check
/// rule since the default rework label contains the quality-check label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(default, rename_all = "camelCase")]
pub struct KindRules {
    /// Substring marking a quality-check milestone
    pub quality_check: String,

    /// Substring marking a quality-check rework milestone
    pub rework: String,
}

impl Default for KindRules {
    fn default() -> Self {
        Self {
            quality_check: "quality check".to_string(),
            rework: "quality check failed".to_string(),
        }
    }
}

impl KindRules {
    /// Classify a milestone name.
    ///
    /// ```rust
    /// use atelier_core::models::{KindRules, MilestoneKind};
    ///
    /// let rules = KindRules::default();
    /// assert_eq!(rules.classify("Final Quality Check"), MilestoneKind::QualityCheck);
    /// assert_eq!(rules.classify("QUALITY CHECK FAILED"), MilestoneKind::QualityCheckRework);
    /// assert_eq!(rules.classify("Cutting"), MilestoneKind::Normal);
    /// ```
    pub fn classify(&self, name: &str) -> MilestoneKind {
        let name = name.to_lowercase();
        if name.contains(&self.rework.to_lowercase()) {
            MilestoneKind::QualityCheckRework
        } else if name.contains(&self.quality_check.to_lowercase()) {
            MilestoneKind::QualityCheck
        } else {
            MilestoneKind::Normal
        }
    }
}
