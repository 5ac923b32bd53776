use std::path::PathBuf;

use clap::{Parser, Subcommand};
use focusflow_core::timer::DEFAULT_TOTAL_SESSIONS;

/// Terminal pomodoro timer with a task list
///
/// focusflow runs a work / break cycle, credits finished work phases to the
/// active task and keeps daily focus statistics. Start an interactive
/// session with `ff run` and type `help` for the available commands.
#[derive(Parser)]
#[command(version, about, name = "ff")]
pub struct Args {
    /// Path to a JSON settings file. Defaults to
    /// $XDG_CONFIG_HOME/focusflow/settings.json
    #[arg(long, global = true)]
    pub settings_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the focusflow CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive timer session (the default)
    #[command(alias = "r")]
    Run(RunArgs),
    /// Print the effective settings as JSON
    Settings(SettingsArgs),
}

/// Options for an interactive session
#[derive(clap::Args)]
pub struct RunArgs {
    /// Work phases before a long break
    #[arg(long, default_value_t = DEFAULT_TOTAL_SESSIONS)]
    pub total_sessions: u32,

    /// Do not tick in real time; only the `tick` command advances the timer
    #[arg(long)]
    pub manual_clock: bool,

    /// Task to add before the session starts (repeatable)
    #[arg(long = "task", value_name = "TITLE")]
    pub tasks: Vec<String>,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            total_sessions: DEFAULT_TOTAL_SESSIONS,
            manual_clock: false,
            tasks: Vec::new(),
        }
    }
}

/// Options for the settings command
#[derive(clap::Args)]
pub struct SettingsArgs {
    /// Also write the effective settings to the default location
    #[arg(long)]
    pub write: bool,
}
