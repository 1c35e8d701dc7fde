//! Shared types used across tabctl modules
//!
//! Contains the tab record produced by a snapshot, tab addresses,
//! the confirmation mode and the filter scope.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::TabError;

/// Title shown for tabs that report an empty or missing title
pub const NO_TITLE: &str = "No Title";

/// Separator between a title and its URL in line-oriented output
pub const DECORATION: &str = " >> ";

/// Position of a tab within one snapshot.
///
/// Only meaningful for the snapshot it was taken from: closing a tab shifts
/// the indices of every later tab in the same window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Address {
    /// Zero-based window position
    pub window: usize,
    /// Zero-based tab position within the window
    pub tab: usize,
}

impl Address {
    pub fn new(window: usize, tab: usize) -> Self {
        Self { window, tab }
    }

    /// Parse `"winIdx,tabIdx"`; `None` unless it is exactly two integers
    pub fn parse(s: &str) -> Option<Self> {
        let (window, tab) = s.split_once(',')?;
        if tab.contains(',') {
            return None;
        }
        Some(Self {
            window: parse_index(window)?,
            tab: parse_index(tab)?,
        })
    }

    /// Whether a free-text argument should be read as an address
    pub fn looks_like(s: &str) -> bool {
        Self::parse(s).is_some()
    }
}

/// Plain decimal digits only; `usize::from_str` would also take a `+` sign
fn parse_index(part: &str) -> Option<usize> {
    let part = part.trim();
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.window, self.tab)
    }
}

impl FromStr for Address {
    type Err = TabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            TabError::invalid_address("Invalid window and tab index. Example: 0,13")
        })
    }
}

/// One open tab, read fresh at the start of every command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabRecord {
    /// Platform tab identifier, when the browser reports one
    pub id: Option<String>,
    /// Display title, never empty
    pub title: String,
    pub url: String,
    pub window_index: usize,
    pub tab_index: usize,
}

impl TabRecord {
    /// Build a record, normalizing an empty title to [`NO_TITLE`]
    pub fn new(
        id: Option<String>,
        title: impl Into<String>,
        url: impl Into<String>,
        window_index: usize,
        tab_index: usize,
    ) -> Self {
        let title = title.into();
        Self {
            id,
            title: if title.is_empty() {
                NO_TITLE.to_string()
            } else {
                title
            },
            url: url.into(),
            window_index,
            tab_index,
        }
    }

    pub fn address(&self) -> Address {
        Address::new(self.window_index, self.tab_index)
    }

    /// Composite key accepted by `close` and `focus`
    pub fn arg(&self) -> String {
        self.address().to_string()
    }

    pub fn subtitle(&self) -> &str {
        &self.url
    }

    /// `"{title} >> {url}"`
    pub fn describe(&self) -> String {
        format!("{}{}{}", self.title, DECORATION, self.url)
    }
}

/// How destructive commands ask for approval. Set once from flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Prompt on the terminal
    #[default]
    Cli,
    /// Prompt with a browser dialog
    Ui,
    /// Approve everything without asking
    Yes,
}

impl Mode {
    /// `--yes` takes precedence over `--ui`
    pub fn from_flags(ui: bool, yes: bool) -> Self {
        if yes {
            Mode::Yes
        } else if ui {
            Mode::Ui
        } else {
            Mode::Cli
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Cli => write!(f, "cli"),
            Mode::Ui => write!(f, "ui"),
            Mode::Yes => write!(f, "yes"),
        }
    }
}

/// Which tab fields a query is matched against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scope {
    TitleOnly,
    UrlOnly,
    #[default]
    TitleOrUrl,
}
