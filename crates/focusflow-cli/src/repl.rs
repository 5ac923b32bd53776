//! Interactive session: applies parsed commands to a tracker and renders
//! the results.

use anyhow::{Context, Result};
use clap::Parser;
use focusflow_core::{
    display::task_changes, Categories, CreateResult, DeleteResult, NewTask, OperationStatus,
    PhaseCompletion, TaskList, TaskPatch, Tracker, UpdateResult,
};
use log::debug;

use crate::cli::{CategoryCommands, Command, Line};
use crate::renderer::TerminalRenderer;

/// Whether the session continues after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Interactive session state
pub struct Repl {
    tracker: Tracker,
    renderer: TerminalRenderer,
}

impl Repl {
    pub fn new(tracker: Tracker, renderer: TerminalRenderer) -> Self {
        Self { tracker, renderer }
    }

    pub fn is_running(&self) -> bool {
        self.tracker.timer().is_running()
    }

    /// Adds a task given on the command line before the session starts.
    pub fn seed_task(&mut self, title: &str) {
        if self.tracker.add_task(NewTask::titled(title)).is_none() {
            debug!("skipping blank seed task");
        }
    }

    pub fn greet(&self) -> Result<()> {
        self.renderer
            .render("# focusflow\n\nType `help` for commands, `quit` to leave.\n\n")?;
        self.status()
    }

    /// Advances the timer by one second and announces a phase completion.
    pub fn tick(&mut self) -> Result<()> {
        if let Some(completion) = self.tracker.tick().completion {
            self.announce(&completion)?;
        }
        Ok(())
    }

    /// Parses and runs one line of input.
    ///
    /// Parse errors and help output are printed and the session continues.
    pub fn handle_line(&mut self, line: &str) -> Result<Flow> {
        let Some(words) = shlex::split(line) else {
            eprintln!("error: unterminated quote");
            return Ok(Flow::Continue);
        };
        if words.is_empty() {
            return Ok(Flow::Continue);
        }

        match Line::try_parse_from(&words) {
            Ok(Line { command }) => {
                debug!("command: {}", words[0]);
                self.dispatch(command)
            }
            Err(err) => {
                err.print().context("Failed to print command error")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn dispatch(&mut self, command: Command) -> Result<Flow> {
        match command {
            Command::Add(args) => self.add_task(args.into()),
            Command::Edit(args) => {
                let id = args.id;
                self.update_task(id, args.into())
            }
            Command::Check(args) => self.toggle_completed(args.id),
            Command::Delete(args) => match self.tracker.delete_task(args.id) {
                Some(task) => self.renderer.render(&DeleteResult::new(task).to_string()),
                None => self.ignored(format!("no task with ID {}", args.id)),
            },
            Command::Category { command } => self.handle_category_command(command),
            Command::List(args) => {
                let query = args.into();
                let visible = self.tracker.query_tasks(&query);
                let list = TaskList::new(visible, self.tracker.tasks().categories())
                    .with_active(self.tracker.tasks().active_task_id());
                self.renderer.render(&list.to_string())
            }
            Command::Move(args) => {
                if self.tracker.move_task(args.id, args.position) {
                    self.applied(format!("moved task {} to position {}", args.id, args.position))
                } else {
                    self.ignored(format!("no task with ID {}", args.id))
                }
            }
            Command::Reorder(args) => {
                self.tracker.reorder_tasks(&args.ids);
                self.applied("tasks reordered")
            }
            Command::Active(args) => self.set_active(args.id),
            Command::Next => match self.tracker.switch_to_next_task() {
                Some(id) => self.applied(format!("task {id} is now active")),
                None => self.ignored("no incomplete task left"),
            },
            Command::Start => {
                if let Some(completion) = self.tracker.start() {
                    self.announce(&completion)?;
                }
                self.status()
            }
            Command::Pause => {
                self.tracker.pause();
                self.status()
            }
            Command::Toggle => {
                if let Some(completion) = self.tracker.toggle() {
                    self.announce(&completion)?;
                }
                self.status()
            }
            Command::Mode(args) => {
                self.tracker.switch_mode(args.phase);
                self.status()
            }
            Command::Skip => {
                let completion = self.tracker.skip();
                self.announce(&completion)?;
                self.status()
            }
            Command::Reset => {
                self.tracker.reset_cycle();
                self.status()
            }
            Command::Tick(args) => {
                for _ in 0..args.seconds {
                    self.tick()?;
                }
                self.status()
            }
            Command::Status => self.status(),
            Command::Stats => self.renderer.render(&self.tracker.stats().to_string()),
            Command::Set(args) => {
                let settings = args.apply_to(self.tracker.settings());
                self.tracker.apply_settings(&settings);
                self.applied("settings updated")?;
                self.status()
            }
            Command::Settings => {
                let json = serde_json::to_string_pretty(&self.tracker.settings())
                    .context("Failed to serialize settings")?;
                self.renderer.render(&format!("{json}\n"))
            }
            Command::Quit => return Ok(Flow::Quit),
        }?;
        Ok(Flow::Continue)
    }

    fn handle_category_command(&mut self, command: CategoryCommands) -> Result<()> {
        match command {
            CategoryCommands::Add(args) => match self.tracker.add_category(args.into()) {
                Some(category) => {
                    let output = CreateResult::new(category.clone()).to_string();
                    self.renderer.render(&output)
                }
                None => self.ignored("category name must not be blank"),
            },
            CategoryCommands::Edit(args) => {
                let id = args.id;
                match self.tracker.update_category(id, args.into()) {
                    Some(category) => {
                        let output = UpdateResult::new(category.clone()).to_string();
                        self.renderer.render(&output)
                    }
                    None => self.ignored(format!("no category with ID {id}")),
                }
            }
            CategoryCommands::Delete(args) => match self.tracker.delete_category(args.id) {
                Some((category, removed)) => {
                    let output = DeleteResult::with_cascade(category, removed).to_string();
                    self.renderer.render(&output)
                }
                None => self.ignored(format!("no category with ID {}", args.id)),
            },
            CategoryCommands::List => {
                let output = Categories(self.tracker.tasks().categories()).to_string();
                self.renderer.render(&output)
            }
            CategoryCommands::Reorder(args) => {
                self.tracker.reorder_categories(&args.ids);
                self.applied("categories reordered")
            }
        }
    }

    fn add_task(&mut self, params: NewTask) -> Result<()> {
        match self.tracker.add_task(params) {
            Some(task) => {
                let output = CreateResult::new(task.clone())
                    .in_time_zone(self.tracker.analytics().time_zone().clone())
                    .to_string();
                self.renderer.render(&output)
            }
            None => self.ignored("task title must not be blank"),
        }
    }

    fn update_task(&mut self, id: u64, patch: TaskPatch) -> Result<()> {
        let changes = task_changes(&patch);
        match self.tracker.update_task(id, patch) {
            Some(task) => {
                let output = UpdateResult::with_changes(task.clone(), changes)
                    .in_time_zone(self.tracker.analytics().time_zone().clone())
                    .to_string();
                self.renderer.render(&output)
            }
            None => self.ignored(format!("no task with ID {id}")),
        }
    }

    fn toggle_completed(&mut self, id: u64) -> Result<()> {
        let Some(completed) = self.tracker.tasks().get_task(id).map(|task| task.completed) else {
            return self.ignored(format!("no task with ID {id}"));
        };
        self.update_task(id, TaskPatch::completed(!completed))
    }

    fn set_active(&mut self, id: Option<u64>) -> Result<()> {
        if self.tracker.set_active_task(id) {
            match id {
                Some(id) => self.applied(format!("task {id} is now active")),
                None => self.applied("no active task"),
            }
        } else {
            self.ignored("only existing, incomplete tasks can be active")
        }
    }

    fn status(&self) -> Result<()> {
        let active = match self.tracker.tasks().active_task() {
            Some(task) => format!(
                "Active task: *{}. {}* ({}/{})",
                task.id, task.title, task.completed_pomodoros, task.estimated_pomodoros
            ),
            None => "No active task".to_string(),
        };
        self.renderer
            .render(&format!("**{}**\n{active}\n", self.tracker.timer()))
    }

    fn announce(&self, completion: &PhaseCompletion) -> Result<()> {
        self.renderer.render(&completion.to_string())
    }

    fn applied(&self, message: impl Into<String>) -> Result<()> {
        self.renderer
            .render(&OperationStatus::applied(message).to_string())
    }

    fn ignored(&self, message: impl Into<String>) -> Result<()> {
        self.renderer
            .render(&OperationStatus::ignored(message).to_string())
    }
}
