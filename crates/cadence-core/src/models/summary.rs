//! Outcome of a recurring-activity sweep.

use serde::{Deserialize, Serialize};

/// A template that could not be fired during a sweep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateFailure {
    /// Template the failure belongs to
    pub template_id: u64,
    /// Underlying error message
    pub message: String,
}

/// Summary returned by one pass over all active templates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepSummary {
    /// Human readable one-line result
    pub message: String,
    /// Number of instances inserted by this run
    pub created_count: usize,
    /// Templates that were due but had already been fired today by another run
    #[serde(default)]
    pub already_fired_count: usize,
    /// Templates skipped because their recurrence type is not recognized
    #[serde(default)]
    pub skipped_count: usize,
    /// Per-template failures; omitted when the run was clean
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<TemplateFailure>,
}

impl SweepSummary {
    /// Builds the summary and its message from the run counters.
    pub fn new(
        examined: usize,
        created_count: usize,
        already_fired_count: usize,
        skipped_count: usize,
        errors: Vec<TemplateFailure>,
    ) -> Self {
        let mut message = format!(
            "Created {created_count} recurring activit{} from {examined} template{}",
            if created_count == 1 { "y" } else { "ies" },
            if examined == 1 { "" } else { "s" },
        );
        if !errors.is_empty() {
            message.push_str(&format!(" ({} failed)", errors.len()));
        }

        Self {
            message,
            created_count,
            already_fired_count,
            skipped_count,
            errors,
        }
    }

    /// Whether any template failed.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
