//! Browser executor - drives a scriptable browser through osascript
//!
//! Every adapter call is one `osascript -e` invocation. Window and tab
//! indices are converted to AppleScript's one-based indices here.

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::browser::{BrowserAdapter, RawTab};
use crate::core::config::BrowserConfig;
use crate::core::{Address, Result, TabError};

/// Field separator in enumeration output (ASCII unit separator)
const FIELD_SEP: char = '\u{1f}';
/// Record separator in enumeration output (ASCII record separator)
const RECORD_SEP: char = '\u{1e}';
const NOT_RUNNING: &str = "NOT_RUNNING";

/// Adapter for AppleScript-capable browsers (Chrome, Brave, Edge, ...)
pub struct ScriptAdapter {
    /// Application name, e.g. "Google Chrome"
    application: String,
    /// osascript binary
    osascript: String,
    /// Limit for non-interactive calls
    timeout: Option<Duration>,
}

impl ScriptAdapter {
    /// Create an adapter for the named application
    pub fn new(application: impl Into<String>) -> Self {
        Self {
            application: application.into(),
            osascript: "osascript".to_string(),
            timeout: Some(Duration::from_secs(30)),
        }
    }

    /// Create an adapter from the browser section of the config
    pub fn from_config(config: &BrowserConfig) -> Self {
        Self {
            application: config.application.clone(),
            osascript: config.osascript.clone(),
            timeout: (config.timeout_secs > 0).then(|| Duration::from_secs(config.timeout_secs)),
        }
    }

    /// `tell application "<app>"` with the name escaped
    fn tell(&self) -> String {
        format!("tell application \"{}\"", escape(&self.application))
    }

    /// Run a script and return its trimmed stdout
    async fn run_script(&self, script: &str, timeout: Option<Duration>) -> Result<String> {
        let mut cmd = Command::new(&self.osascript);
        cmd.arg("-e").arg(script);
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());
        cmd.kill_on_drop(true);

        let output = match timeout {
            Some(limit) => tokio::time::timeout(limit, cmd.output())
                .await
                .map_err(|_| {
                    TabError::browser(format!(
                        "{} did not respond within {} seconds",
                        self.application,
                        limit.as_secs()
                    ))
                })?,
            None => cmd.output().await,
        }
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TabError::unavailable(format!("{} not found", self.osascript))
            } else {
                TabError::with_context("Failed to run osascript", e)
            }
        })?;

        if output.status.success() {
            let stdout = String::from_utf8_lossy(&output.stdout);
            Ok(stdout.trim_end_matches(['\n', '\r']).to_string())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!("osascript failed: {}", stderr.trim());
            Err(classify_failure(&self.application, &stderr))
        }
    }

    /// Run a one-line command inside a tell block
    async fn tell_command(&self, command: &str) -> Result<()> {
        let script = format!("{}\n    {}\nend tell", self.tell(), command);
        debug!("{}: {}", self.application, command);
        self.run_script(&script, self.timeout).await.map(|_| ())
    }
}

#[async_trait]
impl BrowserAdapter for ScriptAdapter {
    async fn list_windows(&self) -> Result<usize> {
        let app = escape(&self.application);
        let script = format!(
            "if application \"{app}\" is running then\n    \
             tell application \"{app}\" to return count of windows\n\
             else\n    return \"{NOT_RUNNING}\"\nend if"
        );
        let output = self.run_script(&script, self.timeout).await?;
        parse_window_count(&self.application, &output)
    }

    async fn list_tabs(&self, window: usize) -> Result<Vec<RawTab>> {
        let script = format!(
            r#"{tell}
    set fs to character id 31
    set rs to character id 30
    set out to ""
    repeat with t in tabs of window {window}
        set tt to title of t
        if tt is missing value then set tt to ""
        set out to out & (id of t as text) & fs & tt & fs & (URL of t) & rs
    end repeat
    return out
end tell"#,
            tell = self.tell(),
            window = window + 1,
        );
        let output = self.run_script(&script, self.timeout).await?;
        Ok(parse_tab_records(&output))
    }

    async fn close_tab(&self, address: Address) -> Result<()> {
        self.tell_command(&format!(
            "close tab {} of window {}",
            address.tab + 1,
            address.window + 1
        ))
        .await
    }

    async fn close_window(&self, window: usize) -> Result<()> {
        self.tell_command(&format!("close window {}", window + 1))
            .await
    }

    async fn set_window_visible(&self, window: usize, visible: bool) -> Result<()> {
        self.tell_command(&format!(
            "set visible of window {} to {}",
            window + 1,
            visible
        ))
        .await
    }

    async fn set_active_tab(&self, window: usize, tab: usize) -> Result<()> {
        self.tell_command(&format!(
            "set active tab index of window {} to {}",
            window + 1,
            tab + 1
        ))
        .await
    }

    async fn set_window_order(&self, window: usize, index: usize) -> Result<()> {
        self.tell_command(&format!(
            "set index of window {} to {}",
            window + 1,
            index + 1
        ))
        .await
    }

    async fn activate_application(&self) -> Result<()> {
        self.tell_command("activate").await
    }

    async fn show_alert(&self, message: &str) -> Result<()> {
        let script = format!(
            "{}\n    activate\n    display alert \"{}\"\nend tell",
            self.tell(),
            escape(message)
        );
        self.run_script(&script, None).await.map(|_| ())
    }

    async fn show_confirm_dialog(&self, message: &str) -> Result<bool> {
        let script = format!(
            "{}\n    activate\n    display dialog \"{}\"\nend tell",
            self.tell(),
            escape(message)
        );
        match self.run_script(&script, None).await {
            Ok(_) => Ok(true),
            Err(TabError::Browser(msg)) if is_user_cancel(&msg) => {
                debug!("dialog canceled");
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    fn name(&self) -> &str {
        &self.application
    }
}

/// Escape a string for use inside an AppleScript string literal
fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c < ' ' => {}
            c => out.push(c),
        }
    }
    out
}

/// Map osascript stderr to an error variant
fn classify_failure(application: &str, stderr: &str) -> TabError {
    let stderr = stderr.trim();
    if stderr.contains("(-600)") || stderr.contains("isn’t running") {
        TabError::unavailable(format!("{} is not running", application))
    } else if stderr.contains("(-1743)") || stderr.contains("Not authorized") {
        TabError::unavailable(format!(
            "not authorized to control {}. Allow it under System Settings > Privacy & Security > Automation",
            application
        ))
    } else {
        TabError::browser(stderr.to_string())
    }
}

fn is_user_cancel(stderr: &str) -> bool {
    stderr.contains("(-128)")
}

fn parse_window_count(application: &str, output: &str) -> Result<usize> {
    let output = output.trim();
    if output == NOT_RUNNING {
        return Err(TabError::unavailable(format!(
            "{} is not running",
            application
        )));
    }
    output
        .parse()
        .map_err(|_| TabError::browser(format!("unexpected window count: {:?}", output)))
}

/// Parse `id US title US url RS` records
fn parse_tab_records(output: &str) -> Vec<RawTab> {
    output
        .split(RECORD_SEP)
        .filter(|record| !record.trim().is_empty())
        .map(|record| {
            let mut fields = record.splitn(3, FIELD_SEP);
            let id = fields
                .next()
                .map(str::trim)
                .filter(|id| !id.is_empty() && *id != "missing value")
                .map(str::to_string);
            let title = fields
                .next()
                .filter(|title| !title.is_empty())
                .map(str::to_string);
            let url = fields.next().unwrap_or_default().to_string();
            RawTab { id, title, url }
        })
        .collect()
}
