//! focusflow CLI Application
//!
//! Terminal front end for the focusflow pomodoro tracker. The core is
//! synchronous; this binary owns the clock and the input loop.

mod args;
mod cli;
mod renderer;
mod repl;

use std::time::Duration;

use anyhow::{Context, Result};
use args::{Args, Commands, RunArgs, SettingsArgs};
use clap::Parser;
use focusflow_core::{Settings, TrackerBuilder};
use log::{debug, info};
use renderer::TerminalRenderer;
use repl::{Flow, Repl};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{self, Instant, MissedTickBehavior};

const TICK_PERIOD: Duration = Duration::from_secs(1);

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        settings_file,
        no_color,
        command,
    } = Args::parse();

    let settings = Settings::load_or_default(settings_file.as_deref())
        .context("Failed to load settings")?;
    let renderer = TerminalRenderer::new(!no_color);

    info!("focusflow started");

    match command.unwrap_or_else(|| Commands::Run(RunArgs::default())) {
        Commands::Run(args) => run_session(settings, renderer, args).await,
        Commands::Settings(args) => show_settings(&settings, &renderer, &args),
    }
}

/// Prints the effective settings, optionally saving them to the default
/// location first.
fn show_settings(settings: &Settings, renderer: &TerminalRenderer, args: &SettingsArgs) -> Result<()> {
    if args.write {
        let path = settings
            .save_default()
            .context("Failed to write settings")?;
        info!("settings written to {}", path.display());
    }
    let json = serde_json::to_string_pretty(settings).context("Failed to serialize settings")?;
    renderer.render(&format!("{json}\n"))
}

/// Runs the interactive loop until `quit`, end of input or Ctrl-C.
///
/// Commands and clock ticks are handled on this one task, so a command never
/// observes a half-applied tick. The clock is only polled while the timer
/// runs, and it restarts a full period after each resume.
async fn run_session(settings: Settings, renderer: TerminalRenderer, args: RunArgs) -> Result<()> {
    let tracker = TrackerBuilder::new()
        .with_settings(settings)
        .with_total_sessions(args.total_sessions)
        .build();
    let mut repl = Repl::new(tracker, renderer);
    for title in &args.tasks {
        repl.seed_task(title);
    }
    repl.greet()?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut clock = time::interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
    clock.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut was_ticking = false;

    loop {
        let ticking = repl.is_running() && !args.manual_clock;
        if ticking && !was_ticking {
            clock.reset();
        }
        was_ticking = ticking;

        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read input")? else {
                    debug!("end of input");
                    break;
                };
                if repl.handle_line(&line)? == Flow::Quit {
                    break;
                }
            }
            _ = clock.tick(), if ticking => repl.tick()?,
            _ = tokio::signal::ctrl_c() => {
                debug!("interrupted");
                break;
            }
        }
    }

    info!("focusflow session ended");
    Ok(())
}
