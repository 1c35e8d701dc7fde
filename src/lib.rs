//! tabctl - command-line control for the tabs of a running browser
//!
//! Lists open tabs, closes tabs matching search terms, closes duplicate
//! tabs and focuses a tab, driving the browser through its scripting
//! interface.
//!
//! # Architecture
//!
//! - **Core**: Shared types, configuration, and error handling
//! - **Browser**: Adapter trait, osascript implementation, snapshot builder
//! - **Tabs**: Filtering, duplicate detection and close planning
//! - **CLI**: Argument parsing, confirmation, output and dispatch
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::io;
//! use tabctl::browser::ScriptAdapter;
//! use tabctl::cli::{Console, Dispatcher, Options, Verb};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let adapter = ScriptAdapter::new("Google Chrome");
//!     let console = Console::new(io::stdin().lock(), io::stdout());
//!     let mut dispatcher = Dispatcher::new(&adapter, Options::default(), console);
//!
//!     dispatcher.run(Verb::Titles { query: Some("rust".into()) }).await.unwrap();
//! }
//! ```

pub mod browser;
pub mod cli;
pub mod core;
pub mod tabs;

// Re-export commonly used items
pub use browser::{BrowserAdapter, ScriptAdapter};
pub use cli::{Cli, Dispatcher, Outcome};
pub use core::{Config, Result, TabError};
