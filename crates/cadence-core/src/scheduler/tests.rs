//! Tests for the scheduler module.

use tempfile::TempDir;

use super::*;
use crate::{
    models::{ActivityStatus, RecurrenceType},
    params::{CreateActivity, Id, ListActivities, RunSweep, SetRecurrence, UpdateStatus},
};

/// Helper function to create a test scheduler
async fn create_test_scheduler() -> (TempDir, Scheduler) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("nested").join("test.db");
    let scheduler = SchedulerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create scheduler");
    (temp_dir, scheduler)
}

fn sweep_on(date: &str) -> RunSweep {
    RunSweep {
        date: Some(date.to_string()),
        timezone: None,
    }
}

#[tokio::test]
async fn test_builder_creates_missing_directories() {
    let (_temp_dir, scheduler) = create_test_scheduler().await;
    assert!(scheduler.database_path().exists());
}

#[tokio::test]
async fn test_create_and_show_activity() {
    let (_temp_dir, scheduler) = create_test_scheduler().await;

    let created = scheduler
        .create_activity(&CreateActivity {
            name: "Clean shelves".to_string(),
            description: Some("Aisle 3".to_string()),
            deadline: Some("2024-02-01".to_string()),
            ..Default::default()
        })
        .await
        .expect("Failed to create activity");

    let shown = scheduler
        .show_activity(&Id { id: created.id })
        .await
        .expect("Failed to show activity");
    assert_eq!(shown, created);

    let err = scheduler
        .show_activity(&Id { id: created.id + 1 })
        .await
        .unwrap_err();
    assert!(matches!(err, CadenceError::ActivityNotFound { .. }));
}

#[tokio::test]
async fn test_invalid_params_are_rejected_before_storage() {
    let (_temp_dir, scheduler) = create_test_scheduler().await;

    let err = scheduler
        .create_activity(&CreateActivity {
            name: String::new(),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, CadenceError::InvalidInput { .. }));

    let err = scheduler
        .set_recurrence(&SetRecurrence {
            id: 1,
            recurrence_type: "monthly".to_string(),
            day: Some(32),
            month: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, CadenceError::InvalidInput { .. }));

    let listed = scheduler
        .list_activities(&ListActivities::default())
        .await
        .unwrap();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn test_update_status_through_scheduler() {
    let (_temp_dir, scheduler) = create_test_scheduler().await;
    let activity = scheduler
        .create_activity(&CreateActivity {
            name: "Audit".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();

    let updated = scheduler
        .update_status(&UpdateStatus {
            id: activity.id,
            status: "cancelled".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(updated.status, ActivityStatus::Cancelled);

    let err = scheduler
        .update_status(&UpdateStatus {
            id: activity.id,
            status: "in_progress".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, CadenceError::InvalidTransition { .. }));
}

#[tokio::test]
async fn test_recurrence_lifecycle_and_sweep() {
    let (_temp_dir, scheduler) = create_test_scheduler().await;
    let activity = scheduler
        .create_activity(&CreateActivity {
            name: "Yearly fire drill".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();

    let template = scheduler
        .set_recurrence(&SetRecurrence {
            id: activity.id,
            recurrence_type: "yearly".to_string(),
            day: Some(29),
            month: Some(2),
        })
        .await
        .unwrap();
    assert_eq!(
        template.recurrence.as_ref().map(|r| r.kind.clone()),
        Some(RecurrenceType::Yearly)
    );

    // 2023 has no February 29, so the rule fires on the 28th.
    let summary = scheduler.run_sweep(&sweep_on("2023-02-28")).await.unwrap();
    assert_eq!(summary.created_count, 1);

    scheduler
        .pause_recurrence(&Id { id: activity.id })
        .await
        .unwrap();
    assert!(scheduler.active_templates().await.unwrap().is_empty());
    let summary = scheduler.run_sweep(&sweep_on("2024-02-29")).await.unwrap();
    assert_eq!(summary.created_count, 0);

    scheduler
        .resume_recurrence(&Id { id: activity.id })
        .await
        .unwrap();
    let summary = scheduler.run_sweep(&sweep_on("2024-02-29")).await.unwrap();
    assert_eq!(summary.created_count, 1);

    let instances = scheduler
        .list_activities(&ListActivities {
            parent_id: Some(activity.id),
            ..Default::default()
        })
        .await
        .unwrap();
    let deadlines: Vec<String> = instances
        .iter()
        .filter_map(|a| a.deadline.map(|d| d.to_string()))
        .collect();
    assert_eq!(deadlines, ["2024-02-29", "2025-02-28"]);
}

#[tokio::test]
async fn test_list_templates_only() {
    let (_temp_dir, scheduler) = create_test_scheduler().await;
    for name in ["plain", "template"] {
        scheduler
            .create_activity(&CreateActivity {
                name: name.to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
    }
    scheduler
        .set_recurrence(&SetRecurrence {
            id: 2,
            recurrence_type: "daily".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();
    scheduler.run_sweep(&sweep_on("2024-01-15")).await.unwrap();

    let templates = scheduler
        .list_activities(&ListActivities {
            templates: true,
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(templates.len(), 1);
    assert_eq!(templates[0].name, "template");

    let all = scheduler
        .list_activities(&ListActivities::default())
        .await
        .unwrap();
    assert_eq!(all.len(), 3);
}

#[tokio::test]
async fn test_sweep_rejects_bad_date() {
    let (_temp_dir, scheduler) = create_test_scheduler().await;
    let err = scheduler.run_sweep(&sweep_on("15/01/2024")).await.unwrap_err();
    assert!(matches!(err, CadenceError::InvalidInput { .. }));
}
