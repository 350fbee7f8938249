//! Session timer state machine
//!
//! A session is a fixed-duration focus or break interval. The timer itself is
//! passive: it only moves when [`SessionTimer::tick`] is called, once per
//! elapsed second, by whoever owns the 1 Hz schedule (the TUI runner). That
//! keeps the state machine synchronous and fully testable without a clock.

/// Fixed-duration session presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionMode {
    /// 25-minute pomodoro block
    ShortFocus,
    /// 50-minute deep work block
    #[default]
    DeepFocus,
    /// 15-minute break
    Break,
}

/// The timer indicator always fills relative to the longest preset, so a
/// Break or ShortFocus session never reaches a full ring. Intentional.
pub const INDICATOR_SCALE_SECS: u32 = 50 * 60;

impl SessionMode {
    /// Total duration of this preset in seconds.
    pub fn duration_secs(self) -> u32 {
        match self {
            Self::ShortFocus => 25 * 60,
            Self::DeepFocus => 50 * 60,
            Self::Break => 15 * 60,
        }
    }

    /// Display label for the session header.
    pub fn label(self) -> &'static str {
        match self {
            Self::ShortFocus => "Pomodoro",
            Self::DeepFocus => "Deep Work",
            Self::Break => "Break",
        }
    }

    /// All presets in selection order.
    pub fn all() -> [SessionMode; 3] {
        [Self::ShortFocus, Self::DeepFocus, Self::Break]
    }
}

/// Countdown timer for the active session.
///
/// Invariant: `0 <= remaining_secs <= mode.duration_secs()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionTimer {
    /// Active preset
    pub mode: SessionMode,
    /// Seconds left in the current session
    pub remaining_secs: u32,
    /// Whether the countdown is live
    pub running: bool,
}

impl Default for SessionTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionTimer {
    /// Create a stopped timer at the default preset's full duration.
    pub fn new() -> Self {
        let mode = SessionMode::default();
        Self {
            mode,
            remaining_secs: mode.duration_secs(),
            running: false,
        }
    }

    /// Switch preset: stops the countdown and resets to the full duration.
    pub fn select_mode(&mut self, mode: SessionMode) {
        self.running = false;
        self.mode = mode;
        self.remaining_secs = mode.duration_secs();
    }

    /// Start or pause. Starting with zero remaining is allowed; the next
    /// tick immediately stops the timer again.
    pub fn toggle_run(&mut self) {
        self.running = !self.running;
    }

    /// Advance one second. Floors at zero and auto-stops when the session
    /// ends; it never switches mode or restarts on its own.
    pub fn tick(&mut self) {
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            self.running = false;
        }
    }

    /// Fractional fullness for the ring indicator, normalized against the
    /// longest preset (see [`INDICATOR_SCALE_SECS`]).
    pub fn progress(&self) -> f64 {
        (f64::from(self.remaining_secs) / f64::from(INDICATOR_SCALE_SECS)).min(1.0)
    }

    /// Remaining time as zero-padded `MM:SS`.
    pub fn format_remaining(&self) -> String {
        let mins = self.remaining_secs / 60;
        let secs = self.remaining_secs % 60;
        format!("{:02}:{:02}", mins, secs)
    }
}
