//! Data models for activities and recurring templates.
//!
//! Display implementations for these models live in
//! [`crate::display::models`], keeping presentation out of the data types.
//!
//! A single [`Activity`] row type covers both recurring templates and the
//! instances they spawn. The sweep works on the narrower
//! [`RecurringTemplate`] view and writes [`NewInstance`] rows.
//!
//! # Examples
//!
//! ```rust
//! use cadence_core::models::{Priority, Recurrence, RecurringTemplate};
//! use jiff::civil::date;
//!
//! let template = RecurringTemplate {
//!     id: 3,
//!     name: "Weekly report".to_string(),
//!     description: None,
//!     department_id: Some(1),
//!     priority: Priority::High,
//!     created_by: None,
//!     recurrence: Recurrence::weekly(1),
//! };
//!
//! let instance = template.instance(date(2024, 1, 22));
//! assert_eq!(instance.parent_activity_id, 3);
//! assert_eq!(instance.priority, Priority::High);
//! ```

pub mod activity;
pub mod filters;
pub mod recurrence;
pub mod status;
pub mod summary;
pub mod template;


pub use activity::Activity;
pub use filters::ActivityFilter;
pub use recurrence::{Recurrence, RecurrenceType};
pub use status::{ActivityStatus, Priority};
pub use summary::{SweepSummary, TemplateFailure};
pub use template::{NewInstance, RecurringTemplate};
