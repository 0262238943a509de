//! UI-agnostic Gantt timeline engine: turns task and milestone collections
//! into per-task bar placements, a critical-path emphasis set, and
//! dependency-line geometry, and converts drag gestures into
//! duration-preserving reschedule requests.
//!
//! The engine renders nothing and persists nothing. It reads collections
//! owned by an external store, takes "today" as an explicit argument, and
//! returns plain derived values — every call is a pure function of its
//! inputs. Anomalous input (missing dates, dangling dependency ids,
//! inverted ranges) degrades to best-effort output instead of raising.
//!
//! ```
//! use chrono::NaiveDate;
//! use timeline_engine::{Granularity, Task, TimelineEngine, ViewConfig};
//!
//! let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
//! let design = Task::new("Design").with_schedule(
//!     NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
//!     NaiveDate::from_ymd_opt(2024, 3, 8).unwrap(),
//! );
//! let build = Task::new("Build")
//!     .with_schedule(
//!         NaiveDate::from_ymd_opt(2024, 3, 11).unwrap(),
//!         NaiveDate::from_ymd_opt(2024, 3, 22).unwrap(),
//!     )
//!     .with_dependency(design.id);
//!
//! let engine = TimelineEngine::new();
//! let config = ViewConfig::new(Granularity::Month, today);
//! let plan = engine.evaluate(&[build, design], &[], &config, today);
//! assert_eq!(plan.rows.len(), 2);
//! assert_eq!(plan.critical_path.len(), 2);
//! ```

pub mod classify;
pub mod engine;
pub mod geometry;
pub mod graph;
pub mod layout;
pub mod model;
pub mod reschedule;

pub use classify::{MilestoneStatus, TaskTone};
pub use engine::{HostIntent, MilestoneRow, TaskRow, TimelineEngine, TimelinePlan};
pub use graph::{CriticalPathStrategy, DagLongestPath, DependencyGraph, FastHeuristicPath};
pub use layout::LayoutRecord;
pub use model::{Granularity, Milestone, Task, TaskPriority, ViewConfig, ViewWindow};
pub use reschedule::RescheduleRequest;
