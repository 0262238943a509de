use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::classify::{self, MilestoneStatus, TaskTone};
use crate::geometry::{self, Connector};
use crate::graph::{CriticalPathStrategy, DependencyGraph, FastHeuristicPath};
use crate::layout::{self, LayoutRecord};
use crate::model::{Milestone, Task, ViewConfig, ViewWindow};
use crate::reschedule::RescheduleRequest;

/// One laid-out task bar: placement plus display tone, keyed by task id.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRow {
    pub task_id: Uuid,
    pub layout: LayoutRecord,
    pub tone: TaskTone,
}

/// Marker for a milestone that falls inside the window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneRow {
    pub milestone_id: Uuid,
    pub offset_percent: f32,
    pub status: MilestoneStatus,
}

/// Everything the presentation layer needs for one render pass. Pure
/// derived data — recomputed on every evaluation, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelinePlan {
    pub window: ViewWindow,
    /// One row per input task, in input order.
    pub rows: Vec<TaskRow>,
    /// Ordered id list of the emphasized dependency chain.
    pub critical_path: Vec<Uuid>,
    pub connectors: Vec<Connector>,
    /// Markers for in-window milestones only.
    pub markers: Vec<MilestoneRow>,
}

/// Opaque signals the presentation layer hands back to the host
/// application. The engine defines the shape and forwards them untouched;
/// interpreting them (navigation, persistence, dialogs) is the host's job.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum HostIntent {
    ViewChange { config: ViewConfig },
    CreateTask,
    EditTask { task_id: Uuid },
    Reschedule { request: RescheduleRequest },
}

/// Turns task/milestone collections plus a view configuration into a
/// [`TimelinePlan`].
///
/// Synchronous and stateless: the engine owns nothing between calls, reads
/// no clock (the caller supplies `today`), and the same inputs always
/// produce the same plan.
pub struct TimelineEngine {
    strategy: Box<dyn CriticalPathStrategy>,
}

impl Default for TimelineEngine {
    fn default() -> Self {
        Self {
            strategy: Box::new(FastHeuristicPath),
        }
    }
}

impl TimelineEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a caller-chosen critical-path strategy instead of the default
    /// [`FastHeuristicPath`].
    pub fn with_strategy(strategy: impl CriticalPathStrategy + 'static) -> Self {
        Self {
            strategy: Box::new(strategy),
        }
    }

    /// One full evaluation pass over the current collections.
    pub fn evaluate(
        &self,
        tasks: &[Task],
        milestones: &[Milestone],
        config: &ViewConfig,
        today: NaiveDate,
    ) -> TimelinePlan {
        let window = ViewWindow::resolve(config, today);
        let graph = DependencyGraph::build(tasks, today);

        let critical_path = self.strategy.critical_path(&graph);
        let on_path: HashSet<Uuid> = critical_path.iter().copied().collect();

        let layouts: Vec<LayoutRecord> = tasks
            .iter()
            .map(|task| layout::project_task(task, &window, today))
            .collect();
        let rows = tasks
            .iter()
            .zip(&layouts)
            .map(|(task, &layout)| TaskRow {
                task_id: task.id,
                layout,
                tone: classify::task_tone(task, on_path.contains(&task.id)),
            })
            .collect();

        let connectors = geometry::connectors(&graph, &layouts);
        let markers = milestones
            .iter()
            .filter_map(|milestone| {
                geometry::milestone_offset(milestone, &window).map(|offset_percent| MilestoneRow {
                    milestone_id: milestone.id,
                    offset_percent,
                    status: classify::milestone_status(milestone, today),
                })
            })
            .collect();

        TimelinePlan {
            window,
            rows,
            critical_path,
            connectors,
            markers,
        }
    }
}
