use clap::{Parser, Subcommand};
use std::path::PathBuf;
use todoz::index::{LineNumber, PriorityArg};

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.0" for releases, "0.3.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "todo", bin_name = "todo", version = get_version())]
#[command(about = "A plain-text todo list for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Pending items file (default: todo.txt)
    #[arg(long, global = true, value_name = "PATH")]
    pub todo_file: Option<PathBuf>,

    /// Completed items file (default: done.txt)
    #[arg(long, global = true, value_name = "PATH")]
    pub done_file: Option<PathBuf>,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// List pending items, prioritized first
    #[command(alias = "ls")]
    List {
        /// Only show items matching this text (case-insensitive, regex allowed)
        #[arg(num_args = 0..)]
        filter: Vec<String>,
    },

    /// Add a new item
    #[command(alias = "a")]
    Add {
        /// Text of the item; multiple words are joined
        #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Mark an item as done
    Do {
        /// Line number as shown by `list`
        #[arg(value_parser = clap::value_parser!(LineNumber))]
        line: LineNumber,
    },

    /// Delete an item without recording it as done
    #[command(alias = "rm")]
    Delete {
        /// Line number as shown by `list`
        #[arg(value_parser = clap::value_parser!(LineNumber))]
        line: LineNumber,
    },

    /// Set the priority of an item, e.g. `pri 2B`
    Pri {
        /// Line number followed by a one character marker
        #[arg(value_parser = clap::value_parser!(PriorityArg))]
        arg: PriorityArg,
    },

    /// List completed items
    Done,

    /// Print the todo and done file locations
    Paths,
}
