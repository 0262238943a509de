use chrono::NaiveDate;
use serde::Serialize;

use crate::model::{Task, ViewWindow};

/// Horizontal placement of one task bar, as percentages of the window width.
/// Ephemeral: recomputed from task + window on every evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutRecord {
    pub left_percent: f32,
    pub width_percent: f32,
    /// False once the bar starts past the window's right edge.
    pub visible: bool,
}

/// Project a task's date interval onto 0–100% of the view window.
///
/// The width is clipped so the bar never overflows the right edge. Tasks
/// that start before the window collapse onto the left edge (offset 0)
/// rather than being hidden.
pub fn project_task(task: &Task, window: &ViewWindow, today: NaiveDate) -> LayoutRecord {
    let start = task.effective_start(today);
    let start_offset_days = window.day_offset(start).max(0);
    let duration_days = task.duration_days(today);

    let left_percent = start_offset_days as f32 / window.total_days as f32 * 100.0;
    let width_percent =
        (duration_days as f32 / window.total_days as f32 * 100.0).min(100.0 - left_percent);

    LayoutRecord {
        left_percent,
        width_percent,
        visible: start_offset_days < window.total_days,
    }
}
