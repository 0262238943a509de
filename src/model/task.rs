use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Priority tier of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum TaskPriority {
    High,
    #[default]
    Medium,
    Low,
}

impl TaskPriority {
    /// Map a priority label to a tier; anything unrecognized lands on Medium.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "high" | "urgent" | "critical" => Self::High,
            "low" | "minor" | "trivial" => Self::Low,
            _ => Self::Medium,
        }
    }
}

impl<'de> Deserialize<'de> for TaskPriority {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse(&s))
    }
}

/// A single task as handed over by the external task store.
///
/// Dates are optional: a missing start means "starts today", a missing due
/// date means "one day after the start". The engine never rejects a task —
/// inverted date ranges simply floor to a one-day duration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    #[serde(default, rename = "startDate", with = "super::dates::option")]
    pub start: Option<NaiveDate>,
    #[serde(default, rename = "dueDate", with = "super::dates::option")]
    pub due: Option<NaiveDate>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub priority: TaskPriority,
    /// Progress percent, 0–100. Carried through for the presentation layer.
    #[serde(default)]
    pub progress: f32,
    /// Predecessor task ids. Unresolvable ids are dropped during graph build.
    #[serde(default)]
    pub dependencies: Vec<Uuid>,
    /// Opaque assignee label; never resolved by this engine.
    #[serde(default)]
    pub assignee: Option<String>,
}

impl Task {
    /// Create a new task with sensible defaults.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            start: None,
            due: None,
            completed: false,
            priority: TaskPriority::Medium,
            progress: 0.0,
            dependencies: Vec::new(),
            assignee: None,
        }
    }

    /// Set start and due dates.
    pub fn with_schedule(mut self, start: NaiveDate, due: NaiveDate) -> Self {
        self.start = Some(start);
        self.due = Some(due);
        self
    }

    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Add a predecessor.
    pub fn with_dependency(mut self, predecessor: Uuid) -> Self {
        self.dependencies.push(predecessor);
        self
    }

    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Start date, substituting `today` when absent.
    pub fn effective_start(&self, today: NaiveDate) -> NaiveDate {
        self.start.unwrap_or(today)
    }

    /// Due date, substituting start + 1 day when absent.
    pub fn effective_due(&self, today: NaiveDate) -> NaiveDate {
        self.due
            .unwrap_or_else(|| self.effective_start(today) + Duration::days(1))
    }

    /// Inclusive duration in days, floored at one day even for inverted ranges.
    pub fn duration_days(&self, today: NaiveDate) -> i64 {
        let span = (self.effective_due(today) - self.effective_start(today)).num_days() + 1;
        span.max(1)
    }
}

/// A milestone marker. Independent of the dependency graph — never a
/// predecessor or successor of a task.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub id: Uuid,
    pub title: String,
    #[serde(rename = "dueDate", with = "super::dates")]
    pub due: NaiveDate,
    #[serde(default)]
    pub completed: bool,
}

impl Milestone {
    pub fn new(title: impl Into<String>, due: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            due,
            completed: false,
        }
    }
}
