use std::collections::VecDeque;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::graph::DependencyGraph;
use crate::model::Task;

/// A duration-preserving request to move one task. Produced from a drag
/// gesture; applied (or rejected) by the external task store — this engine
/// never learns the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RescheduleRequest {
    pub task_id: Uuid,
    #[serde(with = "crate::model::dates")]
    pub start: NaiveDate,
    #[serde(with = "crate::model::dates")]
    pub due: NaiveDate,
}

/// Build the update request for dragging `task` to `new_start`.
///
/// The start→due span is captured before the move and carried over
/// unchanged. No validation happens here: past dates, conflicts, and moves
/// that violate a predecessor's schedule are all accepted, and dependents
/// are not shifted (see [`cascade`] for the opt-in variant).
pub fn build_request(task: &Task, new_start: NaiveDate, today: NaiveDate) -> RescheduleRequest {
    let span = task.effective_due(today) - task.effective_start(today);
    RescheduleRequest {
        task_id: task.id,
        start: new_start,
        due: new_start + span,
    }
}

/// Opt-in follow-up pass: shift every transitive successor of the moved
/// task by the same day delta, emitting one request per affected task in
/// breadth-first order. `tasks` must be the slice the graph was built from.
pub fn cascade(
    graph: &DependencyGraph,
    tasks: &[Task],
    request: &RescheduleRequest,
    today: NaiveDate,
) -> Vec<RescheduleRequest> {
    let root = match graph.index_of(&request.task_id) {
        Some(root) => root,
        None => return Vec::new(),
    };
    let delta = request.start - tasks[root].effective_start(today);

    let mut seen = vec![false; graph.len()];
    seen[root] = true;
    let mut queue = VecDeque::from([root]);
    let mut requests = Vec::new();
    while let Some(node) = queue.pop_front() {
        for &succ in graph.successors(node) {
            if seen[succ] {
                continue;
            }
            seen[succ] = true;
            let task = &tasks[succ];
            requests.push(RescheduleRequest {
                task_id: task.id,
                start: task.effective_start(today) + delta,
                due: task.effective_due(today) + delta,
            });
            queue.push_back(succ);
        }
    }

    if !requests.is_empty() {
        debug!(moved = %request.task_id, affected = requests.len(), "cascade reschedule fan-out");
    }
    requests
}
