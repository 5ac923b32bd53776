//! Session coordinator: the phase-completion state machine.
//!
//! The coordinator is the only component that writes across component
//! boundaries. When the timer engine reports that a phase reached zero, the
//! coordinator credits the active task, optionally completes it and moves
//! focus to the next task, then moves the engine into the next phase of the
//! cycle:
//!
//! ```text
//!  work ──▶ short break ──▶ work ──▶ ... ──▶ work ──▶ long break ──┐
//!   ▲   (session < total)             (session == total)           │
//!   └──────────────────── cycle reset (session = 0) ◀──────────────┘
//! ```
//!
//! It holds only its own flags; the engine and registry are passed in by
//! mutable reference for each transition.

use log::{debug, info};
use serde::Serialize;

use crate::models::{Phase, TaskId, TaskPatch};
use crate::registry::TaskRegistry;
use crate::timer::TimerEngine;

/// Report of one phase-completion transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PhaseCompletion {
    /// Phase that just finished
    pub finished: Phase,
    /// Phase the engine moved into
    pub next: Phase,
    /// Task credited with a pomodoro (work completions only)
    pub credited_task: Option<TaskId>,
    /// Whether the credited task was marked completed by auto-check
    pub task_completed: bool,
    /// Active task after the transition
    pub active_task: Option<TaskId>,
    /// Session ordinal after the transition
    pub session: u32,
    /// Whether the next phase started running immediately
    pub auto_started: bool,
}

/// Flags and transition logic for phase completion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SessionCoordinator {
    auto_check_tasks: bool,
    auto_switch_tasks: bool,
}

impl SessionCoordinator {
    pub fn new(auto_check_tasks: bool, auto_switch_tasks: bool) -> Self {
        Self {
            auto_check_tasks,
            auto_switch_tasks,
        }
    }

    pub fn auto_check_tasks(&self) -> bool {
        self.auto_check_tasks
    }

    pub fn auto_switch_tasks(&self) -> bool {
        self.auto_switch_tasks
    }

    pub fn set_auto_check_tasks(&mut self, enabled: bool) {
        self.auto_check_tasks = enabled;
    }

    pub fn set_auto_switch_tasks(&mut self, enabled: bool) {
        self.auto_switch_tasks = enabled;
    }

    /// Runs the transition for a finished phase.
    ///
    /// Task effects happen before the engine moves to the next phase.
    pub fn complete_phase(
        &self,
        finished: Phase,
        timer: &mut TimerEngine,
        tasks: &mut TaskRegistry,
    ) -> PhaseCompletion {
        match finished {
            Phase::Work => {
                let (credited_task, task_completed) = match tasks.active_task_id() {
                    Some(id) => (Some(id), self.credit_task(id, tasks)),
                    None => (None, false),
                };
                Self::finish_work(timer, tasks, credited_task, task_completed)
            }
            Phase::ShortBreak | Phase::LongBreak => Self::complete_break(finished, timer, tasks),
        }
    }

    /// Moves past `finished` without completing it.
    ///
    /// The cycle advances exactly as on a natural completion, but no task is
    /// credited: an effort unit is only earned by a work phase that ran out.
    pub fn skip_phase(
        &self,
        finished: Phase,
        timer: &mut TimerEngine,
        tasks: &TaskRegistry,
    ) -> PhaseCompletion {
        match finished {
            Phase::Work => Self::finish_work(timer, tasks, None, false),
            Phase::ShortBreak | Phase::LongBreak => Self::complete_break(finished, timer, tasks),
        }
    }

    fn finish_work(
        timer: &mut TimerEngine,
        tasks: &TaskRegistry,
        credited_task: Option<TaskId>,
        task_completed: bool,
    ) -> PhaseCompletion {
        let session = timer.session() + 1;
        let next = if session >= timer.total_sessions() {
            Phase::LongBreak
        } else {
            Phase::ShortBreak
        };
        timer.set_session(session);
        timer.set_phase(next);

        let auto_started = timer.auto_start_breaks();
        if auto_started {
            timer.set_running(true);
        }

        debug!(
            "session: work finished, session {}/{}, next {}",
            timer.session(),
            timer.total_sessions(),
            next.as_str()
        );

        PhaseCompletion {
            finished: Phase::Work,
            next,
            credited_task,
            task_completed,
            active_task: tasks.active_task_id(),
            session: timer.session(),
            auto_started,
        }
    }

    /// Credits the task and applies auto-check and auto-switch. Returns
    /// whether auto-check completed the task.
    fn credit_task(&self, id: TaskId, tasks: &mut TaskRegistry) -> bool {
        let reached = match tasks.increment_pomodoro_count(id) {
            Some(task) => task.reached_estimate(),
            None => return false,
        };

        let completed = self.auto_check_tasks && reached;
        if completed {
            tasks.update_task(id, TaskPatch::completed(true));
        }
        if self.auto_switch_tasks && reached {
            tasks.switch_to_next_task_from(Some(id));
        }
        completed
    }

    fn complete_break(
        finished: Phase,
        timer: &mut TimerEngine,
        tasks: &TaskRegistry,
    ) -> PhaseCompletion {
        if timer.session() >= timer.total_sessions() {
            info!("session: cycle of {} work phases complete", timer.total_sessions());
            timer.reset();
        } else {
            timer.set_phase(Phase::Work);
        }

        let auto_started = timer.auto_start_work();
        if auto_started {
            timer.set_running(true);
        }

        debug!("session: {} complete, back to work", finished.as_str());

        PhaseCompletion {
            finished,
            next: Phase::Work,
            credited_task: None,
            task_completed: false,
            active_task: tasks.active_task_id(),
            session: timer.session(),
            auto_started,
        }
    }
}
