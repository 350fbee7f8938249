//! TUI Runner - main loop that owns the terminal and the clocks
//!
//! The TuiRunner is responsible for:
//! - Rendering and dispatching terminal events to App
//! - Owning the 1 Hz session tick schedule, re-derived from the timer's
//!   running flag after every state change (a stopped timer has no schedule,
//!   so it can neither stall nor run away)
//! - Dispatching at most one plan-generation call at a time and merging the
//!   outcome back into the ledger

use std::sync::Arc;
use std::time::Duration;

use eyre::Result;
use tokio::sync::mpsc;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};
use tracing::debug;

use crate::planner::{DailyPlan, PlanGenerator};

use super::Tui;
use super::app::App;
use super::events::{Event, EventHandler};
use super::views;

/// Period of the session tick schedule
const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Result of a finished generation call, routed back into the event loop.
#[derive(Debug)]
struct PlanOutcome {
    plan: DailyPlan,
    /// Category that was active when the request was triggered
    category_id: String,
}

/// One unit of work selected by the event loop
enum Step {
    Terminal(Event),
    SessionTick,
    Plan(PlanOutcome),
}

/// TUI Runner that manages the terminal and event loop
pub struct TuiRunner {
    /// Application state
    app: App,
    /// Terminal handle
    terminal: Tui,
    /// Event handler
    events: EventHandler,
    /// Plan generator (shared with spawned generation tasks)
    generator: Arc<PlanGenerator>,
    /// 1 Hz schedule; present exactly while the session timer is running
    session_tick: Option<Interval>,
    /// Outcome channel for in-flight generations
    plan_tx: mpsc::Sender<PlanOutcome>,
    plan_rx: mpsc::Receiver<PlanOutcome>,
}

impl TuiRunner {
    /// Create a new TuiRunner
    pub fn new(terminal: Tui, generator: Arc<PlanGenerator>) -> Self {
        let (plan_tx, plan_rx) = mpsc::channel(1);
        Self {
            app: App::new(),
            terminal,
            events: EventHandler::new(Duration::from_millis(33)), // ~30 FPS redraw
            generator,
            session_tick: None,
            plan_tx,
            plan_rx,
        }
    }

    /// Run the TUI main loop
    pub async fn run(&mut self) -> Result<()> {
        loop {
            // Draw the UI
            self.terminal.draw(|frame| views::render(self.app.state(), frame))?;

            // Wait for the next unit of work. The borrows are scoped so the
            // handlers below can mutate state freely.
            let step = {
                let session_tick = self.session_tick.as_mut();
                tokio::select! {
                    event = self.events.next() => Step::Terminal(event?),
                    _ = next_tick(session_tick) => Step::SessionTick,
                    outcome = self.plan_rx.recv() => match outcome {
                        Some(outcome) => Step::Plan(outcome),
                        // Sender lives in self, so the channel never closes
                        None => continue,
                    },
                }
            };

            match step {
                Step::Terminal(Event::Key(key)) => {
                    if self.app.handle_key(key) {
                        break; // Force quit
                    }
                }
                Step::Terminal(Event::Tick) | Step::Terminal(Event::Resize(..)) => {}
                Step::SessionTick => {
                    self.app.state_mut().session.tick();
                }
                Step::Plan(outcome) => {
                    self.apply_plan_outcome(outcome);
                }
            }

            // Re-derive everything that hangs off the state we just mutated
            self.start_pending_generation();
            self.sync_session_schedule();

            let state = self.app.state_mut();
            let visible = state.visible_len();
            state.selection.clamp(visible);

            if state.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Keep the tick schedule in lockstep with the timer's running flag.
    ///
    /// Called after every step so a pause, mode switch or auto-stop tears
    /// the schedule down on the spot, and a start creates a fresh one whose
    /// first tick lands a full second later.
    fn sync_session_schedule(&mut self) {
        let running = self.app.state().session.running;

        if running && self.session_tick.is_none() {
            debug!("session schedule: starting 1 Hz tick");
            self.session_tick = Some(one_second_schedule());
        } else if !running && self.session_tick.is_some() {
            debug!("session schedule: cancelled");
            self.session_tick = None;
        }
    }

    /// Dispatch a queued generation request, if any. The `is_generating`
    /// gate in AppState guarantees at most one request is ever in flight.
    fn start_pending_generation(&mut self) {
        let state = self.app.state_mut();
        let Some(request) = state.pending_generate.take() else {
            return;
        };
        state.is_generating = true;

        debug!(objective = %request.objective, category = %request.category_id, "dispatching plan generation");

        let generator = Arc::clone(&self.generator);
        let tx = self.plan_tx.clone();
        tokio::spawn(async move {
            let plan = generator.generate(&request.objective).await;
            let _ = tx
                .send(PlanOutcome {
                    plan,
                    category_id: request.category_id,
                })
                .await;
        });
    }

    /// Merge a finished generation into the ledger and release the gate.
    fn apply_plan_outcome(&mut self, outcome: PlanOutcome) {
        let state = self.app.state_mut();
        state.is_generating = false;

        if outcome.plan.is_empty() {
            debug!("plan generation produced no tasks");
            return;
        }

        let count = outcome.plan.tasks.len();
        state.ledger.append_generated(outcome.plan.tasks, &outcome.category_id);
        debug!(count, category = %outcome.category_id, "appended generated tasks");
    }
}

/// Build the 1 Hz schedule. The first tick fires a full period after
/// creation, and missed ticks are skipped, never coalesced - each delivered
/// tick is worth exactly one second.
fn one_second_schedule() -> Interval {
    let mut interval = interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    interval
}

/// Await the next session tick, or park forever when no schedule exists.
async fn next_tick(interval: Option<&mut Interval>) {
    match interval {
        Some(interval) => {
            interval.tick().await;
        }
        None => std::future::pending::<()>().await,
    }
}
