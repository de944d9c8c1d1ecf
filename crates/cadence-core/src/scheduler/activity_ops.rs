//! Activity operations for the Scheduler.

use super::Scheduler;
use crate::{
    display::Activities,
    error::{CadenceError, Result},
    models::{Activity, ActivityFilter},
    params::{CreateActivity, Id, ListActivities, UpdateStatus},
};

impl Scheduler {
    /// Creates a one-off activity after validating the parameters.
    pub async fn create_activity(&self, params: &CreateActivity) -> Result<Activity> {
        let activity = params.validate()?;
        self.with_database(move |db| db.create_activity(&activity))
            .await
    }

    /// Retrieves an activity by its ID.
    pub async fn get_activity(&self, params: &Id) -> Result<Option<Activity>> {
        let id = params.id;
        self.with_database(move |db| db.get_activity(id)).await
    }

    /// Retrieves an activity, failing when it does not exist.
    pub async fn show_activity(&self, params: &Id) -> Result<Activity> {
        self.get_activity(params)
            .await?
            .ok_or(CadenceError::ActivityNotFound { id: params.id })
    }

    /// Lists activities matching the parameters.
    pub async fn list_activities(&self, params: &ListActivities) -> Result<Activities> {
        let filter = ActivityFilter::from(params);
        let activities = self
            .with_database(move |db| db.list_activities(Some(&filter)))
            .await?;
        Ok(Activities(activities))
    }

    /// Moves an activity to a new status.
    pub async fn update_status(&self, params: &UpdateStatus) -> Result<Activity> {
        let status = params.validate()?;
        let id = params.id;
        self.with_database(move |db| db.update_status(id, status))
            .await
    }
}
