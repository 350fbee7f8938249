//! TUI application state
//!
//! Pure data structures for the dashboard. No rendering logic here. The
//! state owns the two cooperating pieces of the app: the session timer and
//! the task ledger, plus the view bookkeeping around them.

use crate::domain::{Category, builtin_categories, builtin_tasks};
use crate::ledger::TaskLedger;
use crate::session::SessionTimer;

/// Interaction mode (modal)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    /// Normal navigation mode
    #[default]
    Normal,
    /// Typing in the objective box (o key)
    ObjectiveInput,
    /// Help overlay
    Help,
}

/// Selection state for the task list
#[derive(Debug, Default, Clone)]
pub struct SelectionState {
    pub selected_index: usize,
}

impl SelectionState {
    pub fn select_next(&mut self, max_items: usize) {
        if max_items > 0 && self.selected_index < max_items - 1 {
            self.selected_index += 1;
        }
    }

    pub fn select_prev(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Ensure selection is within bounds
    pub fn clamp(&mut self, max_items: usize) {
        if max_items == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= max_items {
            self.selected_index = max_items - 1;
        }
    }
}

/// A queued plan-generation request, picked up by the runner.
///
/// The category is captured here, when the user triggers generation, so the
/// suggestions land in the tab that was active at that moment even if the
/// user switches tabs while the call is in flight.
#[derive(Debug, Clone)]
pub struct PlanRequest {
    pub objective: String,
    pub category_id: String,
}

/// Main TUI application state
#[derive(Debug)]
pub struct AppState {
    /// Session countdown timer
    pub session: SessionTimer,
    /// Task checklist and XP total
    pub ledger: TaskLedger,
    /// Fixed category set, in tab order
    pub categories: Vec<Category>,
    /// Index of the active category tab
    pub active_tab: usize,
    /// Task list selection within the active tab
    pub selection: SelectionState,
    /// Zen mode hides the header and sidebar
    pub zen_mode: bool,
    /// Objective input buffer
    pub objective: String,
    /// A generation call is outstanding; gates the trigger
    pub is_generating: bool,
    /// Request queued for the runner to dispatch
    pub pending_generate: Option<PlanRequest>,
    /// Current interaction mode
    pub interaction_mode: InteractionMode,
    /// Last error message
    pub error_message: Option<String>,
    /// Should the app quit
    pub should_quit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            session: SessionTimer::new(),
            ledger: TaskLedger::with_tasks(builtin_tasks()),
            categories: builtin_categories(),
            active_tab: 0,
            selection: SelectionState::default(),
            zen_mode: false,
            objective: String::new(),
            is_generating: false,
            pending_generate: None,
            interaction_mode: InteractionMode::default(),
            error_message: None,
            should_quit: false,
        }
    }
}

impl AppState {
    /// Create new AppState seeded with the builtin checklist
    pub fn new() -> Self {
        Self::default()
    }

    /// The active category
    pub fn current_category(&self) -> &Category {
        &self.categories[self.active_tab]
    }

    /// Id of the active category
    pub fn active_category_id(&self) -> &str {
        &self.current_category().id
    }

    /// Number of tasks visible in the active tab
    pub fn visible_len(&self) -> usize {
        self.ledger.visible(self.active_category_id()).len()
    }

    /// Id of the task currently selected in the active tab
    pub fn selected_task_id(&self) -> Option<String> {
        self.ledger
            .visible(self.active_category_id())
            .get(self.selection.selected_index)
            .map(|t| t.id.clone())
    }

    /// Switch to the next category tab
    pub fn next_category(&mut self) {
        self.active_tab = (self.active_tab + 1) % self.categories.len();
        self.selection = SelectionState::default();
    }

    /// Switch to the previous category tab
    pub fn prev_category(&mut self) {
        self.active_tab = if self.active_tab == 0 {
            self.categories.len() - 1
        } else {
            self.active_tab - 1
        };
        self.selection = SelectionState::default();
    }

    /// Queue a generation request for the runner, unless one is already in
    /// flight or the objective is blank.
    pub fn request_generation(&mut self) {
        if self.is_generating || self.objective.trim().is_empty() {
            return;
        }
        self.pending_generate = Some(PlanRequest {
            objective: self.objective.clone(),
            category_id: self.active_category_id().to_string(),
        });
    }

    /// Set an error message
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }

    /// Clear error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}
