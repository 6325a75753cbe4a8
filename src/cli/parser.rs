use crate::config::Backend;
use crate::core::history::SectionOrder;
use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for fitlog
/// Personal workout and goal log backed by SQLite or a hosted REST store
#[derive(Parser)]
#[command(
    name = "fitlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A personal fitness log: workouts, goals, weekly dashboard and history",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the configured storage backend
    #[arg(global = true, long = "backend", value_enum)]
    pub backend: Option<Backend>,

    /// Debug logging on stderr
    #[arg(global = true, short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Log a workout
    Add {
        /// Workout title
        title: String,

        #[arg(long = "type", default_value = "", help = "running, cycling, gym, swimming, walking, yoga, hiking, other")]
        kind: String,

        #[arg(long, short = 'd', default_value = "", allow_hyphen_values = true, help = "Duration in minutes")]
        duration: String,

        #[arg(long, default_value = "", allow_hyphen_values = true, help = "Distance in km")]
        distance: String,

        #[arg(long, short = 'c', default_value = "", allow_hyphen_values = true, help = "Calories burned")]
        calories: String,

        #[arg(long, default_value = "")]
        notes: String,

        #[arg(long, default_value = "", help = "Backfill date (YYYY-MM-DD); default is now")]
        date: String,

        #[arg(long = "location", help = "Attach the current location")]
        location: bool,

        #[arg(long, allow_hyphen_values = true, requires = "location")]
        lat: Option<f64>,

        #[arg(long, allow_hyphen_values = true, requires = "location")]
        lon: Option<f64>,
    },

    /// Change fields of a logged workout
    Edit {
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long = "type")]
        kind: Option<String>,

        #[arg(long, short = 'd', allow_hyphen_values = true)]
        duration: Option<String>,

        #[arg(long, allow_hyphen_values = true)]
        distance: Option<String>,

        #[arg(long, short = 'c', allow_hyphen_values = true)]
        calories: Option<String>,

        #[arg(long)]
        notes: Option<String>,

        #[arg(long, help = "New date (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long, help = "Mark as completed or not (true/false)")]
        completed: Option<bool>,
    },

    /// Delete a workout by id
    Del {
        id: String,

        #[arg(long, short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// Workout history grouped by date
    History {
        #[arg(long, short = 's', help = "Filter by title or type (case-insensitive)")]
        search: Option<String>,

        #[arg(long, value_enum, default_value_t = SectionOrder::FirstSeen)]
        sections: SectionOrder,

        #[arg(long, help = "Print JSON instead of text")]
        json: bool,
    },

    /// This week's activity, goals and recent workouts
    Dashboard {
        #[arg(long, help = "Print JSON instead of text")]
        json: bool,
    },

    /// Profile statistics
    Profile {
        #[arg(long, help = "Print JSON instead of text")]
        json: bool,
    },

    /// Manage goals
    Goal {
        #[command(subcommand)]
        action: GoalAction,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,

        #[arg(long, help = "Only the newest N rows")]
        limit: Option<usize>,
    },

    /// Export workouts to a file
    Export {
        #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Overwrite an existing file without asking")]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum GoalAction {
    /// Create a goal
    Add {
        title: String,

        #[arg(long, default_value = "")]
        target: String,

        #[arg(long, default_value = "")]
        current: String,

        #[arg(long, default_value = "")]
        unit: String,

        #[arg(long = "type", default_value = "custom", help = "workout, distance, calories, steps, weight, custom")]
        kind: String,

        #[arg(long, default_value = "", help = "YYYY-MM-DD")]
        deadline: String,
    },

    /// List goals with progress
    List {
        #[arg(long, help = "Print JSON instead of text")]
        json: bool,
    },

    /// Set the current value of a goal
    Progress { id: String, value: String },

    /// Delete a goal
    Del {
        id: String,

        #[arg(long, short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },
}
