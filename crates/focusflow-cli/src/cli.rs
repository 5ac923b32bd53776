//! Interactive command definitions using clap
//!
//! Each line typed during `ff run` is split into words with shell quoting
//! rules (`shlex`) and parsed by the multicall [`Line`] parser, so the first
//! word selects the command. The argument structs follow the parameter
//! wrapper pattern: clap-specific attributes stay here and `From` impls
//! convert into the core parameter types.
//!
//! ```text
//! stdin line → words → Line (clap) → Core Params → Tracker
//! ```

use clap::{Args, Parser, Subcommand};
use focusflow_core::{
    models::{SortDirection, SortKey, StatusFilter, TaskFilter, TaskSort},
    CategoryId, CategoryPatch, NewCategory, NewTask, Phase, Priority, Settings, TaskId, TaskPatch,
    TaskQuery,
};
use jiff::civil::Date;

/// One line of interactive input
#[derive(Parser)]
#[command(multicall = true)]
pub struct Line {
    #[command(subcommand)]
    pub command: Command,
}

/// Commands available during an interactive session
#[derive(Subcommand)]
pub enum Command {
    /// Add a task to the end of the list
    #[command(alias = "a")]
    Add(AddTaskArgs),
    /// Change fields of a task
    #[command(alias = "e")]
    Edit(EditTaskArgs),
    /// Toggle the completed flag of a task
    #[command(alias = "done")]
    Check(TaskIdArgs),
    /// Delete a task
    #[command(aliases = ["d", "rm"])]
    Delete(TaskIdArgs),
    /// Manage categories
    #[command(alias = "c")]
    Category {
        #[command(subcommand)]
        command: CategoryCommands,
    },
    /// List tasks with optional filters and sorting
    #[command(aliases = ["l", "ls"])]
    List(ListArgs),
    /// Move a task to a 0-based position in the list
    #[command(alias = "mv")]
    Move(MoveTaskArgs),
    /// Reorder tasks by listing their ids in the new order
    Reorder(ReorderArgs),
    /// Set the task that receives pomodoro credit; no id clears it
    Active(ActiveArgs),
    /// Make the next incomplete task active
    Next,
    /// Start the timer
    Start,
    /// Pause the timer
    Pause,
    /// Start or pause the timer
    #[command(alias = "t")]
    Toggle,
    /// Switch to a phase (work, short, long) without completing the current one
    Mode(ModeArgs),
    /// Move to the next phase now; a skipped work phase earns no pomodoro
    Skip,
    /// Reset the cycle to session 0 and a fresh work phase
    Reset,
    /// Advance the timer by a number of seconds
    Tick(TickArgs),
    /// Show the timer and the active task
    #[command(alias = "s")]
    Status,
    /// Show focus statistics
    Stats,
    /// Change settings
    Set(SetArgs),
    /// Print the current settings as JSON
    Settings,
    /// End the session
    #[command(aliases = ["exit", "q"])]
    Quit,
}

/// Add a new task
#[derive(Args)]
pub struct AddTaskArgs {
    /// Title of the task
    pub title: String,
    #[arg(short, long, help = "Optional longer description")]
    pub description: Option<String>,
    #[arg(long, help = "Due date (YYYY-MM-DD)")]
    pub due: Option<Date>,
    #[arg(short, long, help = "Priority: low, medium or high")]
    pub priority: Option<Priority>,
    #[arg(short, long, help = "Category id")]
    pub category: Option<CategoryId>,
    #[arg(short, long, default_value_t = 1, help = "Estimated pomodoros")]
    pub estimate: u32,
}

impl From<AddTaskArgs> for NewTask {
    fn from(val: AddTaskArgs) -> Self {
        NewTask {
            title: val.title,
            description: val.description,
            due_date: val.due,
            priority: val.priority.unwrap_or_default(),
            category_id: val.category,
            completed: false,
            estimated_pomodoros: val.estimate,
        }
    }
}

/// Update fields of a task
#[derive(Args)]
pub struct EditTaskArgs {
    #[arg(help = "Id of the task to edit")]
    pub id: TaskId,
    #[arg(short, long, help = "New title")]
    pub title: Option<String>,
    #[arg(short, long, help = "New description")]
    pub description: Option<String>,
    #[arg(long, conflicts_with = "description", help = "Remove the description")]
    pub clear_description: bool,
    #[arg(long, help = "New due date (YYYY-MM-DD)")]
    pub due: Option<Date>,
    #[arg(long, conflicts_with = "due", help = "Remove the due date")]
    pub clear_due: bool,
    #[arg(short, long, help = "New priority: low, medium or high")]
    pub priority: Option<Priority>,
    #[arg(short, long, help = "Move to this category id")]
    pub category: Option<CategoryId>,
    #[arg(long, conflicts_with = "category", help = "Remove the category")]
    pub no_category: bool,
    #[arg(short, long, help = "New estimate in pomodoros")]
    pub estimate: Option<u32>,
    #[arg(long, help = "Override the completed pomodoro count")]
    pub pomodoros: Option<u32>,
    #[arg(long, help = "Set the completed flag (true or false)")]
    pub completed: Option<bool>,
}

/// Maps a value/clear flag pair onto a patch field.
fn patch_field<T>(value: Option<T>, clear: bool) -> Option<Option<T>> {
    if clear {
        Some(None)
    } else {
        value.map(Some)
    }
}

impl From<EditTaskArgs> for TaskPatch {
    fn from(val: EditTaskArgs) -> Self {
        TaskPatch {
            title: val.title,
            description: patch_field(val.description, val.clear_description),
            due_date: patch_field(val.due, val.clear_due),
            priority: val.priority,
            category_id: patch_field(val.category, val.no_category),
            completed: val.completed,
            estimated_pomodoros: val.estimate,
            completed_pomodoros: val.pomodoros,
        }
    }
}

#[derive(Args)]
pub struct TaskIdArgs {
    #[arg(help = "Id of the task")]
    pub id: TaskId,
}

#[derive(Subcommand)]
pub enum CategoryCommands {
    /// Add a category
    #[command(alias = "a")]
    Add(AddCategoryArgs),
    /// Rename or recolor a category
    #[command(alias = "e")]
    Edit(EditCategoryArgs),
    /// Delete a category and every task in it
    #[command(aliases = ["d", "rm"])]
    Delete(CategoryIdArgs),
    /// List categories
    #[command(aliases = ["l", "ls"])]
    List,
    /// Reorder categories by listing their ids in the new order
    Reorder(ReorderArgs),
}

#[derive(Args)]
pub struct AddCategoryArgs {
    /// Name of the category
    pub name: String,
    #[arg(long, help = "Display color, e.g. #22c55e")]
    pub color: Option<String>,
}

impl From<AddCategoryArgs> for NewCategory {
    fn from(val: AddCategoryArgs) -> Self {
        NewCategory {
            name: val.name,
            color: val.color,
        }
    }
}

#[derive(Args)]
pub struct EditCategoryArgs {
    #[arg(help = "Id of the category to edit")]
    pub id: CategoryId,
    #[arg(short, long, help = "New name")]
    pub name: Option<String>,
    #[arg(long, help = "New display color")]
    pub color: Option<String>,
}

impl From<EditCategoryArgs> for CategoryPatch {
    fn from(val: EditCategoryArgs) -> Self {
        CategoryPatch {
            name: val.name,
            color: val.color,
        }
    }
}

#[derive(Args)]
pub struct CategoryIdArgs {
    #[arg(help = "Id of the category")]
    pub id: CategoryId,
}

/// Filter and sort options for the task list
#[derive(Args)]
pub struct ListArgs {
    #[arg(long, default_value = "all", help = "Status filter: all, active or completed")]
    pub status: StatusFilter,
    #[arg(short, long, help = "Only tasks in this category id")]
    pub category: Option<CategoryId>,
    #[arg(short, long, help = "Only tasks with this priority")]
    pub priority: Option<Priority>,
    #[arg(long, default_value = "order", help = "Sort by: order, priority, due or category")]
    pub sort: SortKey,
    #[arg(long, help = "Sort in descending order")]
    pub desc: bool,
}

impl From<ListArgs> for TaskQuery {
    fn from(val: ListArgs) -> Self {
        TaskQuery {
            filter: TaskFilter {
                status: val.status,
                category: val.category,
                priority: val.priority,
            },
            sort: TaskSort {
                by: val.sort,
                direction: if val.desc {
                    SortDirection::Desc
                } else {
                    SortDirection::Asc
                },
            },
        }
    }
}

#[derive(Args)]
pub struct MoveTaskArgs {
    #[arg(help = "Id of the task to move")]
    pub id: TaskId,
    #[arg(help = "0-based target position")]
    pub position: usize,
}

#[derive(Args)]
pub struct ReorderArgs {
    #[arg(required = true, num_args = 1.., help = "Ids in the new order")]
    pub ids: Vec<u64>,
}

#[derive(Args)]
pub struct ActiveArgs {
    #[arg(help = "Id of the task to make active")]
    pub id: Option<TaskId>,
}

#[derive(Args)]
pub struct ModeArgs {
    #[arg(help = "Phase to switch to: work, short or long")]
    pub phase: Phase,
}

#[derive(Args)]
pub struct TickArgs {
    #[arg(default_value_t = 1, help = "Seconds to advance")]
    pub seconds: u32,
}

/// Change settings; omitted options keep their current value
#[derive(Args)]
pub struct SetArgs {
    #[arg(long, help = "Work phase length in minutes (1-60)")]
    pub work: Option<u32>,
    #[arg(long, help = "Short break length in minutes (1-60)")]
    pub short_break: Option<u32>,
    #[arg(long, help = "Long break length in minutes (1-60)")]
    pub long_break: Option<u32>,
    #[arg(long, help = "Start breaks automatically (true or false)")]
    pub auto_start_breaks: Option<bool>,
    #[arg(long, help = "Start work phases automatically (true or false)")]
    pub auto_start_pomodoros: Option<bool>,
    #[arg(long, help = "Complete tasks that reach their estimate (true or false)")]
    pub auto_check: Option<bool>,
    #[arg(long, help = "Move to the next task after reaching the estimate (true or false)")]
    pub auto_switch: Option<bool>,
}

impl SetArgs {
    /// Overlays the given options on `current`.
    pub fn apply_to(self, current: Settings) -> Settings {
        let mut settings = current;
        if let Some(work) = self.work {
            settings.durations.work = work;
        }
        if let Some(short_break) = self.short_break {
            settings.durations.short_break = short_break;
        }
        if let Some(long_break) = self.long_break {
            settings.durations.long_break = long_break;
        }
        if let Some(enabled) = self.auto_start_breaks {
            settings.auto_start_breaks = enabled;
        }
        if let Some(enabled) = self.auto_start_pomodoros {
            settings.auto_start_pomodoros = enabled;
        }
        if let Some(enabled) = self.auto_check {
            settings.auto_check_tasks = enabled;
        }
        if let Some(enabled) = self.auto_switch {
            settings.auto_switch_tasks = enabled;
        }
        settings
    }
}
