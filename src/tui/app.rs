//! TUI application - event handling and state management
//!
//! The App struct owns the AppState and handles all keyboard events.
//! It does not do any rendering - that's delegated to the views module.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::session::SessionMode;

use super::state::{AppState, InteractionMode};

/// TUI application
#[derive(Debug)]
pub struct App {
    /// Application state
    state: AppState,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create a new application instance
    pub fn new() -> Self {
        Self { state: AppState::new() }
    }

    /// Get reference to state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get mutable reference to state
    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    /// Handle a key event
    ///
    /// Returns true if the application should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Clear any transient error message on key press
        self.state.clear_error();

        match self.state.interaction_mode {
            InteractionMode::Normal => self.handle_normal_key(key),
            InteractionMode::ObjectiveInput => self.handle_objective_key(key),
            InteractionMode::Help => self.handle_help_key(key),
        }
    }

    /// Handle key in normal mode
    fn handle_normal_key(&mut self, key: KeyEvent) -> bool {
        match (key.code, key.modifiers) {
            // === Quit ===
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                return true; // Force quit
            }
            (KeyCode::Char('q'), _) => {
                self.state.should_quit = true;
            }

            // === Help ===
            (KeyCode::Char('?'), _) | (KeyCode::F(1), _) => {
                self.state.interaction_mode = InteractionMode::Help;
            }

            // === Session timer ===
            (KeyCode::Char(' '), _) => {
                self.state.session.toggle_run();
            }
            (KeyCode::Char('1'), _) => {
                self.state.session.select_mode(SessionMode::ShortFocus);
            }
            (KeyCode::Char('2'), _) => {
                self.state.session.select_mode(SessionMode::DeepFocus);
            }
            (KeyCode::Char('3'), _) => {
                self.state.session.select_mode(SessionMode::Break);
            }

            // === Category tabs ===
            (KeyCode::Tab, _) | (KeyCode::Right, _) | (KeyCode::Char('l'), _) => {
                self.state.next_category();
            }
            (KeyCode::BackTab, _) | (KeyCode::Left, _) | (KeyCode::Char('h'), _) => {
                self.state.prev_category();
            }

            // === Task list navigation ===
            (KeyCode::Up, _) | (KeyCode::Char('k'), _) => {
                self.state.selection.select_prev();
            }
            (KeyCode::Down, _) | (KeyCode::Char('j'), _) => {
                let max = self.state.visible_len();
                self.state.selection.select_next(max);
            }

            // === Toggle selected task ===
            (KeyCode::Enter, _) | (KeyCode::Char('x'), _) => {
                if let Some(id) = self.state.selected_task_id() {
                    self.state.ledger.toggle(&id);
                }
            }

            // === Objective / generation ===
            (KeyCode::Char('o'), _) => {
                self.state.interaction_mode = InteractionMode::ObjectiveInput;
            }

            // === Zen mode ===
            (KeyCode::Char('z'), _) => {
                self.state.zen_mode = !self.state.zen_mode;
            }

            _ => {}
        }

        false
    }

    /// Handle key while typing in the objective box
    fn handle_objective_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc => {
                // Keep the text, leave edit mode
                self.state.interaction_mode = InteractionMode::Normal;
            }
            KeyCode::Enter => {
                self.state.request_generation();
                self.state.interaction_mode = InteractionMode::Normal;
            }
            KeyCode::Backspace => {
                self.state.objective.pop();
            }
            KeyCode::Char(c) => {
                self.state.objective.push(c);
            }
            _ => {}
        }

        false
    }

    /// Handle key in help mode
    fn handle_help_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
                self.state.interaction_mode = InteractionMode::Normal;
            }
            _ => {}
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn test_app_new() {
        let app = App::new();
        assert!(matches!(app.state().interaction_mode, InteractionMode::Normal));
        assert!(!app.state().should_quit);
    }

    #[test]
    fn test_ctrl_c_force_quits() {
        let mut app = App::new();
        let quit = app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(quit);
    }

    #[test]
    fn test_q_requests_quit() {
        let mut app = App::new();
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.state().should_quit);
    }

    #[test]
    fn test_space_toggles_timer() {
        let mut app = App::new();

        app.handle_key(key(KeyCode::Char(' ')));
        assert!(app.state().session.running);

        app.handle_key(key(KeyCode::Char(' ')));
        assert!(!app.state().session.running);
    }

    #[test]
    fn test_number_keys_select_mode() {
        let mut app = App::new();
        app.handle_key(key(KeyCode::Char(' ')));

        app.handle_key(key(KeyCode::Char('1')));
        assert_eq!(app.state().session.mode, SessionMode::ShortFocus);
        assert_eq!(app.state().session.remaining_secs, 1500);
        assert!(!app.state().session.running, "mode select must stop the timer");

        app.handle_key(key(KeyCode::Char('3')));
        assert_eq!(app.state().session.mode, SessionMode::Break);
        assert_eq!(app.state().session.remaining_secs, 900);
    }

    #[test]
    fn test_tab_cycles_categories() {
        let mut app = App::new();
        assert_eq!(app.state().active_category_id(), "mindset");

        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.state().active_category_id(), "code");

        app.handle_key(key(KeyCode::BackTab));
        assert_eq!(app.state().active_category_id(), "mindset");
    }

    #[test]
    fn test_enter_toggles_selected_task_and_awards_xp() {
        let mut app = App::new();

        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.state().ledger.total_xp(), 20); // m1 is worth 20

        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.state().ledger.total_xp(), 0);
    }

    #[test]
    fn test_objective_input_flow() {
        let mut app = App::new();

        app.handle_key(key(KeyCode::Char('o')));
        assert!(matches!(app.state().interaction_mode, InteractionMode::ObjectiveInput));

        for c in "ship it".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        assert_eq!(app.state().objective, "ship it");

        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.state().objective, "ship i");

        app.handle_key(key(KeyCode::Enter));
        assert!(matches!(app.state().interaction_mode, InteractionMode::Normal));
        assert!(app.state().pending_generate.is_some());
    }

    #[test]
    fn test_objective_esc_keeps_text_without_submitting() {
        let mut app = App::new();

        app.handle_key(key(KeyCode::Char('o')));
        app.handle_key(key(KeyCode::Char('x')));
        app.handle_key(key(KeyCode::Esc));

        assert_eq!(app.state().objective, "x");
        assert!(app.state().pending_generate.is_none());
    }

    #[test]
    fn test_help_toggle() {
        let mut app = App::new();

        app.handle_key(key(KeyCode::Char('?')));
        assert!(matches!(app.state().interaction_mode, InteractionMode::Help));

        app.handle_key(key(KeyCode::Char('?')));
        assert!(matches!(app.state().interaction_mode, InteractionMode::Normal));
    }

    #[test]
    fn test_zen_mode_toggle() {
        let mut app = App::new();

        app.handle_key(key(KeyCode::Char('z')));
        assert!(app.state().zen_mode);

        app.handle_key(key(KeyCode::Char('z')));
        assert!(!app.state().zen_mode);
    }
}
