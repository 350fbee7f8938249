//! Task and Category types
//!
//! A Task is one checklist entry worth a fixed amount of experience points.
//! Tasks belong to exactly one category for their whole lifetime and are
//! never deleted; the only mutation is the completion toggle, which the
//! ledger owns.

use super::id::generate_id;

/// One checklist entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Unique, stable identifier
    pub id: String,
    /// Short title shown in the list
    pub title: String,
    /// Longer explanation of what to do
    pub description: String,
    /// Experience points awarded on completion; fixed after creation
    pub xp: u32,
    /// Completion flag
    pub completed: bool,
    /// Category this task belongs to, for life
    pub category_id: String,
}

impl Task {
    /// Create a builtin task with a fixed id.
    pub fn seed(
        id: impl Into<String>,
        category_id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        xp: u32,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            xp,
            completed: false,
            category_id: category_id.into(),
        }
    }

    /// Materialize a generated draft into a real task with a fresh id,
    /// uncompleted, attached to the given category.
    pub fn from_draft(draft: TaskDraft, category_id: impl Into<String>) -> Self {
        Self {
            id: generate_id("task", &draft.title),
            title: draft.title,
            description: draft.description,
            xp: draft.xp,
            completed: false,
            category_id: category_id.into(),
        }
    }
}

/// A task suggestion before it is admitted to the ledger — what the plan
/// generator produces. Carries no id, no completion state, no category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub xp: u32,
}

impl TaskDraft {
    pub fn new(title: impl Into<String>, description: impl Into<String>, xp: u32) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            xp,
        }
    }
}

/// A fixed grouping of tasks with contextual content ("tab" in the UI).
/// The category set is defined at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    /// Tab label
    pub label: String,
    /// Icon hint for the tab bar
    pub icon: String,
    /// Headline shown above the task list
    pub content_title: String,
    /// Supporting paragraph below the headline
    pub content_description: String,
}

impl Category {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        icon: impl Into<String>,
        content_title: impl Into<String>,
        content_description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: icon.into(),
            content_title: content_title.into(),
            content_description: content_description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_task_starts_uncompleted() {
        let task = Task::seed("m1", "mindset", "Title", "Description", 20);
        assert_eq!(task.id, "m1");
        assert_eq!(task.category_id, "mindset");
        assert_eq!(task.xp, 20);
        assert!(!task.completed);
    }

    #[test]
    fn test_from_draft_generates_fresh_id() {
        let draft = TaskDraft::new("Write Runbook", "Document the rollback path", 30);
        let task = Task::from_draft(draft.clone(), "system");

        assert!(task.id.contains("-task-write-runbook"));
        assert_eq!(task.title, draft.title);
        assert_eq!(task.xp, 30);
        assert_eq!(task.category_id, "system");
        assert!(!task.completed);

        // Two tasks from the same draft must not collide
        let other = Task::from_draft(draft, "system");
        assert_ne!(task.id, other.id);
    }
}
