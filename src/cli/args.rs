//! Command-line arguments
//!
//! Verbs are subcommands; `--ui`, `--yes` and `--prependAllItem` are global
//! so they are accepted anywhere on the command line.

use clap::error::ErrorKind;
use clap::{ArgGroup, Args, CommandFactory, Parser, Subcommand};

use crate::core::{Address, Mode, Scope, TabError};

/// tabctl - list, close, deduplicate and focus browser tabs
#[derive(Parser, Debug)]
#[command(name = "tabctl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub verb: Verb,

    /// Ask questions with browser dialogs instead of the terminal
    #[arg(long, global = true)]
    pub ui: bool,

    /// Answer every question with "y"
    #[arg(long, global = true)]
    pub yes: bool,

    /// list: insert a "Close all" entry carrying the query
    #[arg(long = "prependAllItem", global = true)]
    pub prepend_all_item: bool,

    /// Scriptable browser application to control
    #[arg(long, global = true)]
    pub browser: Option<String>,

    /// Enable debug logging on stderr
    #[arg(long, short = 'd', global = true)]
    pub debug: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Verb {
    /// List open tabs as JSON, optionally filtered by title or URL
    #[command(name = "list")]
    List { query: Option<String> },

    /// Print "title >> url" for every open tab, optionally filtered
    #[command(name = "titles")]
    Titles { query: Option<String> },

    /// Close tabs whose URL is already open in an earlier tab
    #[command(name = "dedup")]
    Dedup,

    /// Close a tab by address, or every tab matching the terms
    #[command(name = "close")]
    Close(CloseArgs),

    /// Close the tabs with these exact titles (one per argument or line)
    #[command(name = "closeByTitles")]
    CloseByTitles {
        #[arg(required = true)]
        titles: Vec<String>,
    },

    /// Focus a tab by address, e.g. 0,13
    #[command(name = "focus")]
    Focus { address: String },

    /// Focus the first tab with this exact title
    #[command(name = "focusByTitle")]
    FocusByTitle { title: String },
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
#[command(group(ArgGroup::new("scope").args(["title", "url", "filter"])))]
pub struct CloseArgs {
    /// Match terms against titles only
    #[arg(long)]
    pub title: bool,

    /// Match terms against URLs only
    #[arg(long)]
    pub url: bool,

    /// Match terms against titles or URLs
    #[arg(long)]
    pub filter: bool,

    /// An address like 0,13, or one or more search terms
    #[arg(required = true)]
    pub terms: Vec<String>,
}

impl CloseArgs {
    pub fn scope(&self) -> Scope {
        if self.title {
            Scope::TitleOnly
        } else if self.url {
            Scope::UrlOnly
        } else {
            Scope::TitleOrUrl
        }
    }

    /// A bare `close <winIdx,tabIdx>` with no scope flag
    pub fn is_direct_address(&self) -> bool {
        !(self.title || self.url || self.filter)
            && self.terms.len() == 1
            && Address::looks_like(&self.terms[0])
    }
}

/// Flags that shape every command, fixed for the life of the process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Options {
    pub mode: Mode,
    pub prepend_all_item: bool,
}

impl Cli {
    pub fn options(&self) -> Options {
        Options {
            mode: Mode::from_flags(self.ui, self.yes),
            prepend_all_item: self.prepend_all_item,
        }
    }
}

/// Full help text, printed after usage errors
pub fn usage_text() -> String {
    Cli::command().render_help().to_string()
}

/// Error message for stdout, followed by the help text when it applies
pub fn error_report(err: &TabError) -> String {
    let message = err.to_string();
    if err.shows_usage() {
        format!("{}\n\n{}", message.trim_end(), usage_text().trim_end())
    } else {
        message
    }
}

/// Text and exit code for a command line clap rejected.
///
/// `--help` and `--version` succeed. Everything else is a usage error that
/// exits 1; a bare `tabctl` already carries the full help, so it is not
/// repeated.
pub fn usage_outcome(err: &clap::Error) -> (String, u8) {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            (err.to_string().trim_end().to_string(), 0)
        }
        ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            let usage = TabError::usage(err.to_string().trim_end());
            (usage.to_string(), usage.exit_code())
        }
        _ => {
            let usage = TabError::usage(err.to_string().trim_end());
            (error_report(&usage), usage.exit_code())
        }
    }
}
