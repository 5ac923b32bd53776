//! Timer operations for the Tracker.

use jiff::civil::Date;
use log::debug;
use serde::Serialize;

use super::Tracker;
use crate::{
    config::Settings,
    models::{FocusStats, Phase},
    session::PhaseCompletion,
};

/// What one tracker tick produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TickReport {
    /// The phase transition that ran on this tick, if a phase finished
    pub completion: Option<PhaseCompletion>,
    /// Whether a focus minute was credited to today
    pub focus_minute: bool,
}

impl Tracker {
    /// Advances time by one second.
    ///
    /// When the countdown reaches zero the session coordinator runs the
    /// phase transition inside this same call. A focus minute closed by this
    /// tick is credited to analytics last.
    pub fn tick(&mut self) -> TickReport {
        let tick = self.timer.tick();

        let completion = tick
            .completed
            .map(|phase| self.coordinator.complete_phase(phase, &mut self.timer, &mut self.tasks));

        if tick.focus_minute {
            self.analytics.add_focus_minutes(1);
        }

        TickReport {
            completion,
            focus_minute: tick.focus_minute,
        }
    }

    /// Starts the countdown.
    ///
    /// Starting a phase with no time left completes it instead.
    pub fn start(&mut self) -> Option<PhaseCompletion> {
        let finished = self.timer.set_running(true)?;
        Some(
            self.coordinator
                .complete_phase(finished, &mut self.timer, &mut self.tasks),
        )
    }

    /// Pauses the countdown, freezing remaining time and the focus minute
    /// accumulator.
    pub fn pause(&mut self) {
        self.timer.set_running(false);
    }

    /// Starts a paused timer or pauses a running one.
    pub fn toggle(&mut self) -> Option<PhaseCompletion> {
        if self.timer.is_running() {
            self.pause();
            None
        } else {
            self.start()
        }
    }

    /// User mode switch: stops the timer and loads the full duration of
    /// `phase`. No completion effects run.
    pub fn switch_mode(&mut self, phase: Phase) {
        self.timer.set_phase(phase);
    }

    /// Moves on to the next phase of the cycle now.
    ///
    /// The session ordinal advances as on a natural completion, but a skipped
    /// work phase credits no pomodoro to the active task.
    pub fn skip(&mut self) -> PhaseCompletion {
        let finished = self.timer.phase();
        self.timer.set_running(false);
        debug!("tracker: skipping {} phase", finished.as_str());
        self.coordinator
            .skip_phase(finished, &mut self.timer, &self.tasks)
    }

    /// Back to session 0, stopped at the start of a work phase.
    pub fn reset_cycle(&mut self) {
        self.timer.reset();
    }

    /// Applies new settings to the engine and the coordinator.
    ///
    /// Durations are clamped. The remaining time of the current phase is
    /// reset to its full duration; the running flag is kept.
    pub fn apply_settings(&mut self, settings: &Settings) {
        let settings = settings.clamped();
        self.timer.configure_durations(settings.durations);
        self.timer.restart_phase();
        self.timer.set_auto_start_breaks(settings.auto_start_breaks);
        self.timer.set_auto_start_work(settings.auto_start_pomodoros);
        self.coordinator.set_auto_check_tasks(settings.auto_check_tasks);
        self.coordinator
            .set_auto_switch_tasks(settings.auto_switch_tasks);
        debug!("tracker: settings applied: {settings:?}");
    }

    /// The settings currently in effect.
    pub fn settings(&self) -> Settings {
        Settings {
            durations: self.timer.durations(),
            auto_start_breaks: self.timer.auto_start_breaks(),
            auto_start_pomodoros: self.timer.auto_start_work(),
            auto_check_tasks: self.coordinator.auto_check_tasks(),
            auto_switch_tasks: self.coordinator.auto_switch_tasks(),
        }
    }

    /// Statistics for today, computed from live state.
    pub fn stats(&self) -> FocusStats {
        self.analytics.calculate_stats(&self.tasks)
    }

    /// Statistics with the trailing window ending on `today`.
    pub fn stats_on(&self, today: Date) -> FocusStats {
        self.analytics.calculate_stats_on(&self.tasks, today)
    }

    /// Credits focus minutes to an explicit day.
    pub fn add_focus_minutes_on(&mut self, date: Date, minutes: u32) {
        self.analytics.add_focus_minutes_on(date, minutes);
    }
}
