//! In-memory browser shared by the integration tests
//!
//! Behaves like a real browser: closing a tab shifts the later tabs of its
//! window, closing a window shifts the later windows.

#![allow(dead_code)]

use std::io::{self, BufRead, Cursor, Read};
use std::sync::Mutex;

use async_trait::async_trait;
use clap::Parser;

use tabctl::browser::{BrowserAdapter, RawTab};
use tabctl::cli::{Cli, Console, Dispatcher, Outcome};
use tabctl::core::{Address, Result, TabError};

/// Every state-changing or interactive call the fake receives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    CloseTab(Address),
    CloseWindow(usize),
    SetVisible(usize, bool),
    SetActiveTab(usize, usize),
    SetOrder(usize, usize),
    Activate,
    Alert(String),
    Dialog(String),
}

pub struct FakeBrowser {
    windows: Mutex<Vec<Vec<RawTab>>>,
    calls: Mutex<Vec<Call>>,
    running: bool,
    dialog_answer: bool,
}

impl FakeBrowser {
    /// Windows of `(title, url)` pairs; ids are assigned in order
    pub fn new(windows: &[&[(&str, &str)]]) -> Self {
        let mut next_id = 100;
        let windows = windows
            .iter()
            .map(|tabs| {
                tabs.iter()
                    .map(|(title, url)| {
                        next_id += 1;
                        RawTab {
                            id: Some(next_id.to_string()),
                            title: Some(title.to_string()),
                            url: url.to_string(),
                        }
                    })
                    .collect::<Vec<RawTab>>()
            })
            .collect();
        Self {
            windows: Mutex::new(windows),
            calls: Mutex::new(Vec::new()),
            running: true,
            dialog_answer: true,
        }
    }

    /// A browser that cannot be reached
    pub fn not_running() -> Self {
        Self {
            running: false,
            ..Self::new(&[])
        }
    }

    /// Make confirmation dialogs report a cancel
    pub fn cancel_dialogs(mut self) -> Self {
        self.dialog_answer = false;
        self
    }

    /// Replace the title of one tab with a missing value
    pub fn without_title(self, address: Address) -> Self {
        self.windows.lock().unwrap()[address.window][address.tab].title = None;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Remaining URLs, per window
    pub fn urls(&self) -> Vec<Vec<String>> {
        self.windows
            .lock()
            .unwrap()
            .iter()
            .map(|tabs| tabs.iter().map(|t| t.url.clone()).collect())
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn check_window(&self, window: usize) -> Result<()> {
        if window < self.windows.lock().unwrap().len() {
            Ok(())
        } else {
            Err(TabError::browser(format!("Can't get window {}", window + 1)))
        }
    }
}

#[async_trait]
impl BrowserAdapter for FakeBrowser {
    async fn list_windows(&self) -> Result<usize> {
        if !self.running {
            return Err(TabError::unavailable("Fake Browser is not running"));
        }
        Ok(self.windows.lock().unwrap().len())
    }

    async fn list_tabs(&self, window: usize) -> Result<Vec<RawTab>> {
        self.check_window(window)?;
        Ok(self.windows.lock().unwrap()[window].clone())
    }

    async fn close_tab(&self, address: Address) -> Result<()> {
        self.check_window(address.window)?;
        self.record(Call::CloseTab(address));
        let mut windows = self.windows.lock().unwrap();
        let tabs = &mut windows[address.window];
        if address.tab >= tabs.len() {
            return Err(TabError::browser(format!("Can't get tab {}", address.tab + 1)));
        }
        tabs.remove(address.tab);
        if tabs.is_empty() {
            windows.remove(address.window);
        }
        Ok(())
    }

    async fn close_window(&self, window: usize) -> Result<()> {
        self.check_window(window)?;
        self.record(Call::CloseWindow(window));
        self.windows.lock().unwrap().remove(window);
        Ok(())
    }

    async fn set_window_visible(&self, window: usize, visible: bool) -> Result<()> {
        self.check_window(window)?;
        self.record(Call::SetVisible(window, visible));
        Ok(())
    }

    async fn set_active_tab(&self, window: usize, tab: usize) -> Result<()> {
        self.check_window(window)?;
        self.record(Call::SetActiveTab(window, tab));
        Ok(())
    }

    async fn set_window_order(&self, window: usize, index: usize) -> Result<()> {
        self.check_window(window)?;
        self.record(Call::SetOrder(window, index));
        let mut windows = self.windows.lock().unwrap();
        let moved = windows.remove(window);
        windows.insert(index, moved);
        Ok(())
    }

    async fn activate_application(&self) -> Result<()> {
        self.record(Call::Activate);
        Ok(())
    }

    async fn show_alert(&self, message: &str) -> Result<()> {
        self.record(Call::Alert(message.to_string()));
        Ok(())
    }

    async fn show_confirm_dialog(&self, message: &str) -> Result<bool> {
        self.record(Call::Dialog(message.to_string()));
        Ok(self.dialog_answer)
    }

    fn name(&self) -> &str {
        "Fake Browser"
    }
}

/// Input that fails the test if anything tries to read it
pub struct NoInput;

impl Read for NoInput {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        panic!("stdin must not be read");
    }
}

impl BufRead for NoInput {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        panic!("stdin must not be read");
    }

    fn consume(&mut self, _amt: usize) {}
}

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("tabctl").chain(args.iter().copied()))
        .expect("valid arguments")
}

/// Run a command line with `stdin` as terminal input; returns the outcome
/// and everything written to stdout
pub async fn run(browser: &FakeBrowser, args: &[&str], stdin: &str) -> (Result<Outcome>, String) {
    let cli = parse(args);
    let console = Console::new(Cursor::new(stdin.as_bytes().to_vec()), Vec::new());
    let mut dispatcher = Dispatcher::new(browser, cli.options(), console);
    let result = dispatcher.run(cli.verb).await;
    let output = dispatcher.into_console().into_output();
    (result, String::from_utf8(output).expect("utf-8 output"))
}

/// Like [`run`], but any attempt to read stdin panics
pub async fn run_without_input(browser: &FakeBrowser, args: &[&str]) -> (Result<Outcome>, String) {
    let cli = parse(args);
    let console = Console::new(NoInput, Vec::new());
    let mut dispatcher = Dispatcher::new(browser, cli.options(), console);
    let result = dispatcher.run(cli.verb).await;
    let output = dispatcher.into_console().into_output();
    (result, String::from_utf8(output).expect("utf-8 output"))
}
