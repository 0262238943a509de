pub(crate) mod dates;
pub mod task;
pub mod timeline;

pub use task::{Milestone, Task, TaskPriority};
pub use timeline::{Granularity, ViewConfig, ViewWindow};
