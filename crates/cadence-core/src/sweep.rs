//! Batch pass over all active recurring templates.
//!
//! [`run_sweep`] reads the active templates from an [`ActivityStore`],
//! evaluates each against the reference date and asks the store to fire the
//! ones that are due. A failure on one template, including a stored row that
//! cannot be decoded, is logged and recorded in the returned
//! [`SweepSummary`]; only a failure to query the template list aborts the run.
//!
//! The sweep itself is sequential and holds no state between templates.
//! Callers must not run two sweeps against the same store concurrently; the
//! SQLite store's conditional marker update turns a lost race into
//! [`FireOutcome::AlreadyFired`] rather than a duplicate instance.

use jiff::civil::Date;
use log::{debug, error, info, warn};

use crate::{
    error::{CadenceError, Result},
    models::{NewInstance, RecurringTemplate, SweepSummary, TemplateFailure},
};

/// What happened when a due template was handed to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireOutcome {
    /// A new instance row was inserted with this ID
    Created(u64),
    /// The template's marker already equals the reference date
    AlreadyFired,
}

/// One active template as read from storage. A row whose columns cannot be
/// decoded is returned as the failure to report for it.
pub type LoadedTemplate = std::result::Result<RecurringTemplate, TemplateFailure>;

/// Storage used by the sweep.
pub trait ActivityStore {
    /// Root templates that are recurring and active.
    ///
    /// Only a failure of the query itself is an error; undecodable rows are
    /// returned individually as [`TemplateFailure`]s.
    fn active_templates(&mut self) -> Result<Vec<LoadedTemplate>>;

    /// Insert `instance` and set the template's last-fired marker to `today`
    /// as one unit.
    ///
    /// Implementations must not leave the marker updated when the insert
    /// fails, and must report [`FireOutcome::AlreadyFired`] without inserting
    /// when the marker already equals `today`.
    fn fire(
        &mut self,
        template: &RecurringTemplate,
        instance: &NewInstance,
        today: Date,
    ) -> Result<FireOutcome>;
}

/// Runs one sweep over every active template for `today`.
///
/// # Errors
///
/// Returns `CadenceError::TemplateFetch` when the template list cannot be
/// queried. Every other failure is reported in [`SweepSummary::errors`].
pub fn run_sweep<S>(store: &mut S, today: Date) -> Result<SweepSummary>
where
    S: ActivityStore + ?Sized,
{
    let templates = store
        .active_templates()
        .map_err(CadenceError::template_fetch)?;

    info!(
        "Sweeping {} recurring template(s) for {today}",
        templates.len()
    );

    let mut created = 0;
    let mut already_fired = 0;
    let mut skipped = 0;
    let mut errors = Vec::new();

    for loaded in &templates {
        let template = match loaded {
            Ok(template) => template,
            Err(failure) => {
                error!(
                    "Template {} could not be read: {}",
                    failure.template_id, failure.message
                );
                errors.push(failure.clone());
                continue;
            }
        };

        if !template.recurrence.kind.is_known() {
            warn!(
                "Template {} has unrecognized recurrence type '{}', skipping",
                template.id, template.recurrence.kind
            );
            skipped += 1;
            continue;
        }

        match fire_if_due(store, template, today) {
            Ok(Some(FireOutcome::Created(instance_id))) => {
                info!(
                    "Template {} fired: created activity {instance_id}",
                    template.id
                );
                created += 1;
            }
            Ok(Some(FireOutcome::AlreadyFired)) => {
                info!(
                    "Template {} was already fired for {today} by another run",
                    template.id
                );
                already_fired += 1;
            }
            Ok(None) => debug!("Template {} not due on {today}", template.id),
            Err(e) => {
                error!("Template {} failed: {e}", template.id);
                errors.push(TemplateFailure {
                    template_id: template.id,
                    message: e.to_string(),
                });
            }
        }
    }

    Ok(SweepSummary::new(
        templates.len(),
        created,
        already_fired,
        skipped,
        errors,
    ))
}

fn fire_if_due<S>(
    store: &mut S,
    template: &RecurringTemplate,
    today: Date,
) -> Result<Option<FireOutcome>>
where
    S: ActivityStore + ?Sized,
{
    let evaluation = template.evaluate(today)?;
    let Some(deadline) = evaluation.deadline else {
        return Ok(None);
    };

    let instance = template.instance(deadline);
    store.fire(template, &instance, today).map(Some)
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use jiff::civil::date;

    use super::*;
    use crate::models::{Priority, Recurrence, RecurrenceType};

    /// In-memory store that can be told to fail individual templates.
    #[derive(Default)]
    struct MemoryStore {
        templates: Vec<RecurringTemplate>,
        unreadable: Vec<TemplateFailure>,
        failing: HashSet<u64>,
        fail_fetch: bool,
        stale_reads: bool,
        inserted: Vec<NewInstance>,
        markers: HashMap<u64, Date>,
    }

    impl MemoryStore {
        fn with_templates(templates: Vec<RecurringTemplate>) -> Self {
            Self {
                templates,
                ..Default::default()
            }
        }
    }

    impl ActivityStore for MemoryStore {
        fn active_templates(&mut self) -> Result<Vec<LoadedTemplate>> {
            if self.fail_fetch {
                return Err(CadenceError::database("Failed to query templates")
                    .with_source(rusqlite::Error::InvalidQuery));
            }
            let markers = &self.markers;
            let stale = self.stale_reads;
            let readable = self.templates.iter().cloned().map(|mut t| {
                if !stale {
                    if let Some(day) = markers.get(&t.id) {
                        t.recurrence.last_fired_date = Some(*day);
                    }
                }
                Ok(t)
            });
            Ok(readable
                .chain(self.unreadable.iter().cloned().map(Err))
                .collect())
        }

        fn fire(
            &mut self,
            template: &RecurringTemplate,
            instance: &NewInstance,
            today: Date,
        ) -> Result<FireOutcome> {
            if self.failing.contains(&template.id) {
                return Err(CadenceError::database("Failed to insert recurring instance")
                    .with_source(rusqlite::Error::QueryReturnedNoRows));
            }
            if self.markers.get(&template.id) == Some(&today) {
                return Ok(FireOutcome::AlreadyFired);
            }
            self.inserted.push(instance.clone());
            self.markers.insert(template.id, today);
            Ok(FireOutcome::Created(self.inserted.len() as u64 + 100))
        }
    }

    fn template(id: u64, recurrence: Recurrence) -> RecurringTemplate {
        RecurringTemplate {
            id,
            name: format!("Template {id}"),
            description: None,
            department_id: Some(7),
            priority: Priority::High,
            created_by: Some("owner".to_string()),
            recurrence,
        }
    }

    #[test]
    fn test_failure_on_one_template_does_not_stop_the_batch() {
        let mut store = MemoryStore::with_templates(vec![
            template(1, Recurrence::daily()),
            template(2, Recurrence::daily()),
            template(3, Recurrence::daily()),
        ]);
        store.failing.insert(2);

        let summary = run_sweep(&mut store, date(2024, 1, 15)).unwrap();

        assert_eq!(summary.created_count, 2);
        assert_eq!(summary.errors.len(), 1);
        assert_eq!(summary.errors[0].template_id, 2);
        assert!(summary.errors[0].message.contains("Failed to insert"));
        assert!(!store.markers.contains_key(&2));
        assert!(summary.message.contains("1 failed"));
    }

    #[test]
    fn test_unreadable_row_is_reported_without_stopping_the_batch() {
        let mut store = MemoryStore::with_templates(vec![template(1, Recurrence::daily())]);
        store.unreadable.push(TemplateFailure {
            template_id: 2,
            message: "recurrence_day 200 is out of range".to_string(),
        });

        let summary = run_sweep(&mut store, date(2024, 1, 15)).unwrap();

        assert_eq!(summary.created_count, 1);
        assert_eq!(summary.errors.len(), 1);
        assert_eq!(summary.errors[0].template_id, 2);
        assert_eq!(
            summary.message,
            "Created 1 recurring activity from 2 templates (1 failed)"
        );
    }

    #[test]
    fn test_fetch_failure_aborts_the_run() {
        let mut store = MemoryStore {
            fail_fetch: true,
            ..Default::default()
        };
        let err = run_sweep(&mut store, date(2024, 1, 15)).unwrap_err();
        assert!(matches!(err, CadenceError::TemplateFetch { .. }));
    }

    #[test]
    fn test_second_sweep_same_day_creates_nothing() {
        let mut store = MemoryStore::with_templates(vec![
            template(1, Recurrence::daily()),
            template(2, Recurrence::weekly(1)),
        ]);
        let today = date(2024, 1, 15);

        let first = run_sweep(&mut store, today).unwrap();
        assert_eq!(first.created_count, 2);

        let second = run_sweep(&mut store, today).unwrap();
        assert_eq!(second.created_count, 0);
        assert_eq!(second.already_fired_count, 0);
        assert_eq!(store.inserted.len(), 2);
    }

    #[test]
    fn test_instances_carry_template_fields_and_deadline() {
        let mut store = MemoryStore::with_templates(vec![template(4, Recurrence::monthly(15))]);

        run_sweep(&mut store, date(2024, 1, 15)).unwrap();

        assert_eq!(store.inserted.len(), 1);
        let instance = &store.inserted[0];
        assert_eq!(instance.parent_activity_id, 4);
        assert_eq!(instance.name, "Template 4");
        assert_eq!(instance.department_id, Some(7));
        assert_eq!(instance.priority, Priority::High);
        assert_eq!(instance.deadline, date(2024, 2, 15));
    }

    #[test]
    fn test_templates_not_due_are_left_alone() {
        let mut store = MemoryStore::with_templates(vec![template(1, Recurrence::weekly(3))]);

        let summary = run_sweep(&mut store, date(2024, 1, 15)).unwrap();

        assert_eq!(summary.created_count, 0);
        assert!(summary.errors.is_empty());
        assert!(store.inserted.is_empty());
    }

    #[test]
    fn test_unrecognized_type_is_skipped_not_failed() {
        let mut store = MemoryStore::with_templates(vec![
            template(
                1,
                Recurrence::new(RecurrenceType::Unrecognized("hourly".into()), None, None),
            ),
            template(2, Recurrence::daily()),
        ]);

        let summary = run_sweep(&mut store, date(2024, 1, 15)).unwrap();

        assert_eq!(summary.skipped_count, 1);
        assert_eq!(summary.created_count, 1);
        assert!(summary.errors.is_empty());
    }

    #[test]
    fn test_store_reporting_already_fired_is_counted() {
        let today = date(2024, 1, 15);
        let mut store = MemoryStore::with_templates(vec![template(1, Recurrence::daily())]);
        run_sweep(&mut store, today).unwrap();

        // A run that read the templates before the marker was written.
        store.stale_reads = true;
        let summary = run_sweep(&mut store, today).unwrap();

        assert_eq!(summary.created_count, 0);
        assert_eq!(summary.already_fired_count, 1);
        assert_eq!(store.inserted.len(), 1);
    }

    #[test]
    fn test_deadline_error_is_recorded_per_template() {
        let mut store = MemoryStore::with_templates(vec![
            template(1, Recurrence::yearly(6, 1)),
            template(2, Recurrence::daily()),
        ]);

        let summary = run_sweep(&mut store, date(9999, 6, 1)).unwrap();

        assert_eq!(summary.created_count, 1);
        assert_eq!(summary.errors.len(), 1);
        assert_eq!(summary.errors[0].template_id, 1);
    }

    #[test]
    fn test_summary_serializes_in_camel_case_without_empty_errors() {
        let mut store = MemoryStore::with_templates(vec![template(1, Recurrence::daily())]);
        let summary = run_sweep(&mut store, date(2024, 1, 15)).unwrap();

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["createdCount"], 1);
        assert!(json.get("errors").is_none());
        assert_eq!(json["message"], "Created 1 recurring activity from 1 template");
    }
}
