//! Countdown timer engine.
//!
//! The engine tracks a single countdown and the position within the work /
//! break cycle. It knows nothing about tasks: a tick that finishes a phase
//! only reports the completion, and the [`crate::session::SessionCoordinator`]
//! decides what happens next and moves the engine into the next phase within
//! the same tick.
//!
//! Invariants:
//! - `remaining` is always in `[0, duration(phase) * 60]`
//! - `running` is false whenever `remaining` is 0
//! - focus minutes are counted from running work seconds, so a pause freezes
//!   the countdown and the minute accumulator together
//! - the accumulator only drops seconds when it closes a minute; phase
//!   changes and restarts carry partial minutes over

use log::debug;
use serde::Serialize;

use crate::models::{Durations, Phase};

/// Work phases in one cycle unless configured otherwise.
pub const DEFAULT_TOTAL_SESSIONS: u32 = 4;

/// What a single tick produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tick {
    /// The phase that reached zero on this tick, if any
    pub completed: Option<Phase>,
    /// Whether this tick closed a full minute of running work time
    pub focus_minute: bool,
}

/// Countdown state and phase cycle position.
#[derive(Debug, Clone, Serialize)]
pub struct TimerEngine {
    phase: Phase,
    remaining: u32,
    running: bool,
    session: u32,
    total_sessions: u32,
    durations: Durations,
    auto_start_breaks: bool,
    auto_start_work: bool,
    focus_seconds: u32,
}

impl Default for TimerEngine {
    fn default() -> Self {
        Self::new(Durations::default(), DEFAULT_TOTAL_SESSIONS)
    }
}

impl TimerEngine {
    /// Creates a stopped engine at the start of a work phase.
    ///
    /// Durations are clamped and `total_sessions` is raised to at least 1.
    pub fn new(durations: Durations, total_sessions: u32) -> Self {
        let durations = durations.clamped();
        Self {
            phase: Phase::Work,
            remaining: durations.seconds(Phase::Work),
            running: false,
            session: 0,
            total_sessions: total_sessions.max(1),
            durations,
            auto_start_breaks: false,
            auto_start_work: false,
            focus_seconds: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Completed work phases in the current cycle.
    pub fn session(&self) -> u32 {
        self.session
    }

    pub fn total_sessions(&self) -> u32 {
        self.total_sessions
    }

    pub fn durations(&self) -> Durations {
        self.durations
    }

    pub fn auto_start_breaks(&self) -> bool {
        self.auto_start_breaks
    }

    pub fn auto_start_work(&self) -> bool {
        self.auto_start_work
    }

    pub fn set_auto_start_breaks(&mut self, enabled: bool) {
        self.auto_start_breaks = enabled;
    }

    pub fn set_auto_start_work(&mut self, enabled: bool) {
        self.auto_start_work = enabled;
    }

    /// Full length of the current phase, in seconds.
    pub fn phase_seconds(&self) -> u32 {
        self.durations.seconds(self.phase)
    }

    /// Advances the countdown by one second.
    ///
    /// Has no effect while stopped. The tick that brings `remaining` to zero
    /// stops the engine and reports the completion; because the engine is
    /// then stopped, later ticks cannot report it again.
    pub fn tick(&mut self) -> Tick {
        if !self.running {
            return Tick::default();
        }
        if self.remaining == 0 {
            self.running = false;
            return Tick {
                completed: Some(self.phase),
                focus_minute: false,
            };
        }

        self.remaining -= 1;

        let mut focus_minute = false;
        if self.phase == Phase::Work {
            self.focus_seconds += 1;
            if self.focus_seconds == 60 {
                self.focus_seconds = 0;
                focus_minute = true;
            }
        }

        let completed = if self.remaining == 0 {
            self.running = false;
            debug!("timer: {} phase reached zero", self.phase.as_str());
            Some(self.phase)
        } else {
            None
        };

        Tick {
            completed,
            focus_minute,
        }
    }

    /// Switches to `phase`, stopped, with the full duration remaining.
    pub fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
        self.running = false;
        self.remaining = self.durations.seconds(phase);
        debug!("timer: phase set to {} ({}s)", phase.as_str(), self.remaining);
    }

    /// Starts or pauses the countdown.
    ///
    /// Starting with nothing left does not run the engine; the completion of
    /// the current phase is reported instead.
    pub fn set_running(&mut self, running: bool) -> Option<Phase> {
        if running && self.remaining == 0 {
            self.running = false;
            return Some(self.phase);
        }
        self.running = running;
        None
    }

    /// Replaces the phase durations, clamping each to `[1, 60]` minutes.
    ///
    /// If the current phase's duration changed, its countdown restarts from
    /// the new full duration. Returns whether the countdown was reset.
    pub fn configure_durations(&mut self, durations: Durations) -> bool {
        let durations = durations.clamped();
        let changed = durations.minutes(self.phase) != self.durations.minutes(self.phase);
        self.durations = durations;
        if changed {
            self.restart_phase();
        }
        changed
    }

    /// Restarts the current phase from its full duration, keeping the
    /// running flag.
    pub fn restart_phase(&mut self) {
        self.remaining = self.phase_seconds();
    }

    pub fn set_session(&mut self, session: u32) {
        self.session = session.min(self.total_sessions);
    }

    /// Back to the start of a cycle: session 0, stopped work phase.
    pub fn reset(&mut self) {
        self.session = 0;
        self.set_phase(Phase::Work);
    }

    /// Elapsed fraction of the current phase, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        let total = f64::from(self.phase_seconds());
        (total - f64::from(self.remaining)) / total
    }

    /// Remaining time as `MM:SS`.
    pub fn formatted_remaining(&self) -> String {
        format!("{:02}:{:02}", self.remaining / 60, self.remaining % 60)
    }
}
