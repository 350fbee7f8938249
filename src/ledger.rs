//! Task ledger and experience-point accounting
//!
//! The ledger owns the ordered task list and the running XP total. The total
//! is maintained incrementally on every toggle; it must always equal the sum
//! of `xp` over completed tasks (the tests recompute the fold and compare).

use tracing::debug;

use crate::domain::{Task, TaskDraft};

/// Ordered collection of tasks plus the derived XP total.
#[derive(Debug, Clone, Default)]
pub struct TaskLedger {
    tasks: Vec<Task>,
    total_xp: u32,
}

impl TaskLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ledger from existing tasks. The total is folded from the
    /// completion flags, so pre-completed tasks are counted correctly.
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let total_xp = fold_total(&tasks);
        Self { tasks, total_xp }
    }

    /// All tasks, in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Total XP earned from completed tasks. Never negative.
    pub fn total_xp(&self) -> u32 {
        self.total_xp
    }

    /// Flip a task's completion flag and adjust the XP total accordingly.
    ///
    /// The new state is decided before either effect is applied, so the flag
    /// and the total always move together. An unknown id is a silent no-op.
    /// Completing adds the task's XP; un-completing subtracts it, saturating
    /// at zero.
    pub fn toggle(&mut self, id: &str) {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            debug!(%id, "toggle: unknown task id, ignoring");
            return;
        };

        let now_completed = !task.completed;
        let xp = task.xp;
        task.completed = now_completed;

        if now_completed {
            self.total_xp += xp;
        } else {
            self.total_xp = self.total_xp.saturating_sub(xp);
        }
    }

    /// Append generated drafts as new tasks under the given category.
    ///
    /// Every draft gets a fresh unique id and starts uncompleted, so the XP
    /// total is unchanged. The category is whichever one was active when
    /// generation was triggered — never one chosen by the generator.
    pub fn append_generated(&mut self, drafts: impl IntoIterator<Item = TaskDraft>, category_id: &str) {
        for draft in drafts {
            self.tasks.push(Task::from_draft(draft, category_id));
        }
    }

    /// Tasks in the given category, preserving insertion order. Pure read.
    pub fn visible(&self, category_id: &str) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.category_id == category_id).collect()
    }
}

/// Recompute the XP total by folding over completed tasks.
pub fn fold_total(tasks: &[Task]) -> u32 {
    tasks.iter().filter(|t| t.completed).map(|t| t.xp).sum()
}
