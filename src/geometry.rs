use serde::Serialize;
use uuid::Uuid;

use crate::graph::DependencyGraph;
use crate::layout::LayoutRecord;
use crate::model::{Milestone, ViewWindow};

/// A dependency line between two laid-out task bars, in percent space.
/// Rows are task indices; the presentation layer centers the line on them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Connector {
    pub from_task: Uuid,
    pub to_task: Uuid,
    pub from_row: usize,
    pub to_row: usize,
    /// Right edge of the predecessor bar.
    pub start_percent: f32,
    /// Left edge of the successor bar. May sit before `start_percent` when
    /// the bars overlap; the connector is emitted anyway.
    pub end_percent: f32,
}

/// Derive one connector per resolved (predecessor, successor) pair.
/// `layouts` must be indexed like the slice the graph was built from.
pub fn connectors(graph: &DependencyGraph, layouts: &[LayoutRecord]) -> Vec<Connector> {
    graph
        .edges()
        .map(|(pred, succ)| Connector {
            from_task: graph.id(pred),
            to_task: graph.id(succ),
            from_row: pred,
            to_row: succ,
            start_percent: layouts[pred].left_percent + layouts[pred].width_percent,
            end_percent: layouts[succ].left_percent,
        })
        .collect()
}

/// Marker offset for one milestone, or `None` when it falls outside the
/// window — out-of-window milestones are omitted entirely, not hidden.
pub fn milestone_offset(milestone: &Milestone, window: &ViewWindow) -> Option<f32> {
    if !window.contains(milestone.due) {
        return None;
    }
    Some(window.day_offset(milestone.due) as f32 / window.total_days as f32 * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout;
    use crate::model::{Granularity, Task, ViewConfig};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn march() -> ViewWindow {
        ViewWindow::resolve(
            &ViewConfig::new(Granularity::Month, date(2024, 3, 1)),
            date(2024, 3, 1),
        )
    }

    #[test]
    fn connector_spans_gap_between_bars() {
        let today = date(2024, 3, 1);
        let a = Task::new("a").with_schedule(date(2024, 3, 1), date(2024, 3, 5));
        let b = Task::new("b")
            .with_schedule(date(2024, 3, 11), date(2024, 3, 15))
            .with_dependency(a.id);

        let tasks = vec![a, b];
        let window = march();
        let graph = DependencyGraph::build(&tasks, today);
        let layouts: Vec<_> = tasks
            .iter()
            .map(|t| layout::project_task(t, &window, today))
            .collect();

        let lines = connectors(&graph, &layouts);
        assert_eq!(lines.len(), 1);
        let line = lines[0];
        assert_eq!(line.from_row, 0);
        assert_eq!(line.to_row, 1);
        assert!((line.start_percent - 5.0 / 31.0 * 100.0).abs() < 1e-4);
        assert!((line.end_percent - 10.0 / 31.0 * 100.0).abs() < 1e-4);
        assert!(line.end_percent > line.start_percent);
    }

    #[test]
    fn overlapping_bars_still_get_a_connector() {
        let today = date(2024, 3, 1);
        let a = Task::new("a").with_schedule(date(2024, 3, 10), date(2024, 3, 20));
        let b = Task::new("b")
            .with_schedule(date(2024, 3, 12), date(2024, 3, 25))
            .with_dependency(a.id);

        let tasks = vec![a, b];
        let window = march();
        let graph = DependencyGraph::build(&tasks, today);
        let layouts: Vec<_> = tasks
            .iter()
            .map(|t| layout::project_task(t, &window, today))
            .collect();

        let lines = connectors(&graph, &layouts);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].end_percent < lines[0].start_percent);
    }

    #[test]
    fn milestone_inside_window_gets_an_offset() {
        let m = Milestone::new("m", date(2024, 3, 16));
        let offset = milestone_offset(&m, &march()).unwrap();
        assert!((offset - 15.0 / 31.0 * 100.0).abs() < 1e-4);
    }

    #[test]
    fn milestone_outside_window_is_omitted() {
        let before = Milestone::new("before", date(2024, 2, 28));
        let after = Milestone::new("after", date(2024, 4, 1));
        assert_eq!(milestone_offset(&before, &march()), None);
        assert_eq!(milestone_offset(&after, &march()), None);
    }

    #[test]
    fn milestone_on_window_edges_is_kept() {
        let window = march();
        assert_eq!(
            milestone_offset(&Milestone::new("first", date(2024, 3, 1)), &window),
            Some(0.0)
        );
        let last = milestone_offset(&Milestone::new("last", date(2024, 3, 31)), &window).unwrap();
        assert!((last - 30.0 / 31.0 * 100.0).abs() < 1e-4);
    }
}
