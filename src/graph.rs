use std::collections::{HashMap, VecDeque};

use chrono::NaiveDate;
use tracing::debug;
use uuid::Uuid;

use crate::model::Task;

/// Predecessor/successor adjacency over a task slice.
///
/// Built once per evaluation: tasks stay in the caller's slice, the graph
/// holds index lists keyed by position. Dependency ids that resolve to no
/// task in the slice are dropped here and never reappear downstream.
#[derive(Debug)]
pub struct DependencyGraph {
    ids: Vec<Uuid>,
    predecessors: Vec<Vec<usize>>,
    successors: Vec<Vec<usize>>,
    durations: Vec<i64>,
    index: HashMap<Uuid, usize>,
}

impl DependencyGraph {
    pub fn build(tasks: &[Task], today: NaiveDate) -> Self {
        let index: HashMap<Uuid, usize> = tasks
            .iter()
            .enumerate()
            .map(|(i, task)| (task.id, i))
            .collect();

        let mut predecessors = vec![Vec::new(); tasks.len()];
        let mut successors = vec![Vec::new(); tasks.len()];
        for (i, task) in tasks.iter().enumerate() {
            for dep in &task.dependencies {
                match index.get(dep) {
                    Some(&p) => {
                        predecessors[i].push(p);
                        successors[p].push(i);
                    }
                    None => {
                        debug!(task = %task.id, predecessor = %dep, "dropping dangling dependency");
                    }
                }
            }
        }

        Self {
            ids: tasks.iter().map(|task| task.id).collect(),
            predecessors,
            successors,
            durations: tasks.iter().map(|task| task.duration_days(today)).collect(),
            index,
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn id(&self, index: usize) -> Uuid {
        self.ids[index]
    }

    pub fn index_of(&self, id: &Uuid) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn predecessors(&self, index: usize) -> &[usize] {
        &self.predecessors[index]
    }

    pub fn successors(&self, index: usize) -> &[usize] {
        &self.successors[index]
    }

    /// Inclusive task duration in days, as captured at build time.
    pub fn duration_days(&self, index: usize) -> i64 {
        self.durations[index]
    }

    /// Resolved (predecessor, successor) pairs, in task input order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.predecessors
            .iter()
            .enumerate()
            .flat_map(|(succ, preds)| preds.iter().map(move |&pred| (pred, succ)))
    }
}

/// Chooses how the emphasized dependency chain is computed.
pub trait CriticalPathStrategy {
    /// Ordered id list, successor first, then its predecessor chain.
    fn critical_path(&self, graph: &DependencyGraph) -> Vec<Uuid>;
}

/// The chain heuristic the console has always shipped with.
///
/// One `visited` set is shared across the whole run, so every task is
/// explored at most once — as a root or as somebody's predecessor. That
/// guard makes cycles terminate, but it also means a predecessor shared by
/// two branches only counts toward the first branch that reaches it, so
/// diamond-shaped graphs can under-count the true longest path. Kept
/// deliberately; [`DagLongestPath`] is the corrected alternative.
#[derive(Debug, Clone, Copy, Default)]
pub struct FastHeuristicPath;

impl CriticalPathStrategy for FastHeuristicPath {
    fn critical_path(&self, graph: &DependencyGraph) -> Vec<Uuid> {
        let mut visited = vec![false; graph.len()];
        let mut best: Vec<usize> = Vec::new();
        for root in 0..graph.len() {
            if visited[root] {
                continue;
            }
            let path = descend(graph, root, &mut visited);
            // Strict comparison keeps the first-encountered path on ties.
            if path.len() > best.len() {
                best = path;
            }
        }
        best.into_iter().map(|i| graph.id(i)).collect()
    }
}

fn descend(graph: &DependencyGraph, node: usize, visited: &mut [bool]) -> Vec<usize> {
    visited[node] = true;
    let mut longest_tail: Vec<usize> = Vec::new();
    for &pred in graph.predecessors(node) {
        if visited[pred] {
            continue;
        }
        let tail = descend(graph, pred, visited);
        if tail.len() > longest_tail.len() {
            longest_tail = tail;
        }
    }
    let mut path = Vec::with_capacity(longest_tail.len() + 1);
    path.push(node);
    path.extend(longest_tail);
    path
}

/// Correct longest path over the acyclic portion of the graph, weighted by
/// task duration in days rather than node count.
///
/// Kahn topological order with a longest-distance relaxation. Tasks caught
/// in a dependency cycle never become ready and are left out of the result;
/// they cannot make the pass loop.
#[derive(Debug, Clone, Copy, Default)]
pub struct DagLongestPath;

impl CriticalPathStrategy for DagLongestPath {
    fn critical_path(&self, graph: &DependencyGraph) -> Vec<Uuid> {
        let n = graph.len();
        if n == 0 {
            return Vec::new();
        }

        let mut remaining: Vec<usize> = (0..n).map(|i| graph.predecessors(i).len()).collect();
        let mut queue: VecDeque<usize> = (0..n).filter(|&i| remaining[i] == 0).collect();
        let mut dist: Vec<i64> = (0..n).map(|i| graph.duration_days(i)).collect();
        let mut via: Vec<Option<usize>> = vec![None; n];
        let mut order: Vec<usize> = Vec::with_capacity(n);

        while let Some(node) = queue.pop_front() {
            order.push(node);
            for &succ in graph.successors(node) {
                let candidate = dist[node] + graph.duration_days(succ);
                if candidate > dist[succ] {
                    dist[succ] = candidate;
                    via[succ] = Some(node);
                }
                remaining[succ] -= 1;
                if remaining[succ] == 0 {
                    queue.push_back(succ);
                }
            }
        }

        if order.len() < n {
            debug!(
                skipped = n - order.len(),
                "cyclic dependencies excluded from longest-path pass"
            );
        }

        let mut end = match order.first() {
            Some(&first) => first,
            None => return Vec::new(),
        };
        for &i in &order {
            if dist[i] > dist[end] {
                end = i;
            }
        }

        let mut path = Vec::new();
        let mut cursor = Some(end);
        while let Some(i) = cursor {
            path.push(i);
            cursor = via[i];
        }
        path.into_iter().map(|i| graph.id(i)).collect()
    }
}
