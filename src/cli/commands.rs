use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "weekgrid",
    version,
    about = "Weekly schedule grid renderer",
    after_help = "\
IMPORT FORMAT:
  One task per line: `Name, Day, HH:MM - HH:MM, Color`
  The last three comma-separated fields are day, time range and color;
  everything before them is the name, so names may contain commas.
  Day: Monday..Sunday or Mon..Sun (case-insensitive).
  Time: zero-padded 24-hour HH:MM; a task must end after it starts.
  Color: #RRGGBB or a named color (red, teal, navy, ...).
  Blank lines are skipped. A malformed line aborts the whole import.

OUTPUT:
  `render` writes one PNG, by default outputs/schedule_<timestamp>.png,
  creating the directory if needed."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the schedule as a PNG image
    Render {
        /// Import file; omitted means an empty schedule
        file: Option<PathBuf>,

        /// Output PNG path (default: outputs/schedule_<timestamp>.png)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Parse an import file and list its tasks
    List {
        /// Import file
        file: PathBuf,
    },

    /// Parse an import file and print it back in canonical form
    Export {
        /// Import file
        file: PathBuf,
    },
}
