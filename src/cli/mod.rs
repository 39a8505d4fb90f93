//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::domain::Color;
use output::OutputFormat;

/// stickies - colored sticky notes and checklists
#[derive(Parser, Debug)]
#[command(name = "stickies", version, about, long_about = None)]
pub struct Cli {
    /// Data directory holding the notes file (overrides config file)
    #[arg(short = 'd', long, global = true)]
    pub dir: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new note
    New(NewArgs),

    /// List notes, most recently updated first
    #[command(name = "ls")]
    List(ListArgs),

    /// Search notes by title or content
    Search(SearchArgs),

    /// Show a note
    Show(ShowArgs),

    /// Edit a note's title, content, color, or checklist
    Edit(EditArgs),

    /// Delete a note
    #[command(name = "rm")]
    Delete(DeleteArgs),

    /// List the color palette
    Colors,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `new` command
#[derive(Parser, Debug)]
pub struct NewArgs {
    /// Note title
    pub title: String,

    /// Freeform content
    #[arg(short, long, conflicts_with = "tasks")]
    pub content: Option<String>,

    /// Checklist item (can be specified multiple times)
    #[arg(short, long = "task", action = ArgAction::Append)]
    pub tasks: Vec<String>,

    /// Note color (random if omitted)
    #[arg(long)]
    pub color: Option<Color>,
}

/// Arguments for the `ls` (list) command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Only show notes whose title or content contains this text
    pub query: Option<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `search` command
#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Search query (case-insensitive)
    pub query: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `show` command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Note ID, ID prefix, or title
    pub note: String,
}

/// Arguments for the `edit` command
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Note ID, ID prefix, or title
    pub note: String,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// Replace content (freeform notes)
    #[arg(short, long)]
    pub content: Option<String>,

    /// New color
    #[arg(long)]
    pub color: Option<Color>,

    /// Toggle a checklist item, 1-based (can be specified multiple times)
    #[arg(long = "check", value_name = "N", action = ArgAction::Append)]
    pub check: Vec<usize>,

    /// Append a checklist item (can be specified multiple times)
    #[arg(long = "add-task", value_name = "TEXT", action = ArgAction::Append)]
    pub add_tasks: Vec<String>,

    /// Remove a checked-off checklist item, 1-based (can be specified multiple times)
    #[arg(long = "remove", value_name = "N", action = ArgAction::Append)]
    pub remove: Vec<usize>,

    /// Open the note as a checklist even if it is freeform
    #[arg(long, conflicts_with = "content")]
    pub checklist: bool,
}

impl EditArgs {
    /// Returns true if any checklist operation was requested.
    pub fn has_task_ops(&self) -> bool {
        self.checklist
            || !self.check.is_empty()
            || !self.add_tasks.is_empty()
            || !self.remove.is_empty()
    }
}

/// Arguments for the `rm` command
#[derive(Parser, Debug)]
pub struct DeleteArgs {
    /// Note ID, ID prefix, or title
    pub note: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
