use chrono::NaiveDate;
use serde::Serialize;

use crate::model::{Milestone, Task, TaskPriority};

/// Display category for a task bar, in precedence order: completed tasks on
/// the critical path render darkest, then plain completed, then critical,
/// then the priority tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskTone {
    CompletedCritical,
    Completed,
    Critical,
    High,
    Medium,
    Low,
}

/// Marker emphasis for a milestone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MilestoneStatus {
    Completed,
    Overdue,
    Pending,
}

/// Resolve the tone for one task. Critical-path membership beats the
/// priority tier; completion beats both.
pub fn task_tone(task: &Task, on_critical_path: bool) -> TaskTone {
    match (task.completed, on_critical_path) {
        (true, true) => TaskTone::CompletedCritical,
        (true, false) => TaskTone::Completed,
        (false, true) => TaskTone::Critical,
        (false, false) => match task.priority {
            TaskPriority::High => TaskTone::High,
            TaskPriority::Medium => TaskTone::Medium,
            TaskPriority::Low => TaskTone::Low,
        },
    }
}

/// A milestone is overdue once its due date is strictly in the past and it
/// has not been completed.
pub fn milestone_status(milestone: &Milestone, today: NaiveDate) -> MilestoneStatus {
    if milestone.completed {
        MilestoneStatus::Completed
    } else if milestone.due < today {
        MilestoneStatus::Overdue
    } else {
        MilestoneStatus::Pending
    }
}
