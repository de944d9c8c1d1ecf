//! Filter types for querying activities.

use super::{ActivityStatus, Priority};

/// Filter options for listing activities.
#[derive(Debug, Clone, Default)]
pub struct ActivityFilter {
    /// Only activities in this status
    pub status: Option<ActivityStatus>,

    /// Only activities of this department
    pub department_id: Option<u64>,

    /// Only activities with this priority
    pub priority: Option<Priority>,

    /// Only recurring templates
    pub templates_only: bool,

    /// Only instances spawned from this template
    pub parent_activity_id: Option<u64>,
}

impl From<&crate::params::ListActivities> for ActivityFilter {
    /// Convert ListActivities parameters to an ActivityFilter.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cadence_core::{models::ActivityFilter, params::ListActivities};
    ///
    /// let params = ListActivities {
    ///     templates: true,
    ///     ..Default::default()
    /// };
    /// let filter: ActivityFilter = (&params).into();
    /// assert!(filter.templates_only);
    /// assert_eq!(filter.status, None);
    /// ```
    fn from(params: &crate::params::ListActivities) -> Self {
        Self {
            status: params.status,
            department_id: params.department_id,
            priority: None,
            templates_only: params.templates,
            parent_activity_id: params.parent_id,
        }
    }
}
