use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Course catalog builder - render, filter and export a catalog of modules
///
/// Examples:
///   # Write the interactive catalog page
///   coursecat -d data render -o catalog.html
///
///   # List the Medicine modules for beginners
///   coursecat -d data list --click MED --difficulty beginner
///
///   # Show a module's details with its first unit expanded
///   coursecat -d data show M1 --open 1
///
///   # Save the current selection to selected_courses.txt
///   coursecat -d data export --click MED -o out/
#[derive(Debug, Parser)]
#[command(name = "coursecat")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Filtering Logic:\n  \
    - --click presses filter buttons in order; 'all' is the Show All button\n  \
    - Pressing the active class button again switches back to Show All\n  \
    - Only one class button is active at a time\n  \
    - The class filter and --difficulty are combined with AND")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared across all subcommands.
#[derive(Debug, Args)]
pub struct GlobalOptions {
    /// Directory holding classes.csv, modules.csv and units.csv.
    #[arg(short = 'd', long = "data-dir", value_name = "DIR", default_value = ".", global = true)]
    pub data_dir: PathBuf,

    /// Emit output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose (debug-level) logging output.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Filter state to reach before running a command.
#[derive(Debug, Args, Default)]
pub struct FilterArgs {
    /// Click a filter button by class id (repeatable, applied in order; 'all' for Show All)
    #[arg(short = 'c', long = "click", value_name = "CLASS_ID")]
    pub clicks: Vec<String>,

    /// Difficulty selector value: all, beginner, intermediate or expert
    #[arg(long, value_name = "LEVEL", default_value = "all")]
    pub difficulty: String,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Write the catalog as a self-contained interactive HTML page.
    Render {
        /// Output file for the page.
        #[arg(short, long, value_name = "FILE", default_value = "catalog.html")]
        output: PathBuf,
    },

    /// List the visible modules grouped by category.
    List {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Show a module's detail popup.
    Show {
        /// Module id of the clicked tile.
        #[arg(value_name = "MODULE_ID")]
        module_id: String,

        /// Expand a unit section by its 1-based number (repeatable; toggles).
        #[arg(long = "open", value_name = "N")]
        open: Vec<usize>,
    },

    /// Save the visible modules to selected_courses.txt.
    Export {
        #[command(flatten)]
        filters: FilterArgs,

        /// Directory to write the selection file into.
        #[arg(short, long, value_name = "DIR", default_value = ".")]
        output: PathBuf,
    },

    /// Report problems in the catalog tables.
    Check,
}
