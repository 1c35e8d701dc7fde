//! Confirmation gate
//!
//! Every destructive command passes its candidates through here before any
//! tab is closed.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::browser::BrowserAdapter;
use crate::core::{Mode, Result, TabRecord};

/// Terminal streams used for prompts and normal output
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn println(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        self.output.flush()?;
        Ok(())
    }

    /// One line of input; `None` at end of input
    pub fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

/// Outcome of asking about a set of candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Proceed,
    /// Nothing to act on; the empty message has been shown
    Empty,
    /// The user said no
    Declined,
}

/// Asks for approval according to the process-wide [`Mode`]
pub struct ConfirmationGate<'a> {
    mode: Mode,
    adapter: &'a dyn BrowserAdapter,
}

impl<'a> ConfirmationGate<'a> {
    pub fn new(mode: Mode, adapter: &'a dyn BrowserAdapter) -> Self {
        Self { mode, adapter }
    }

    pub async fn confirm<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
        candidates: &[TabRecord],
        prompt: &str,
        empty_message: &str,
    ) -> Result<Decision> {
        if candidates.is_empty() {
            self.report_empty(console, empty_message).await?;
            return Ok(Decision::Empty);
        }

        let descriptions = candidates
            .iter()
            .map(TabRecord::describe)
            .collect::<Vec<_>>()
            .join("\n\n");

        match self.mode {
            Mode::Yes => Ok(Decision::Proceed),
            Mode::Cli => {
                console.println(&format!("\n{}", descriptions))?;
                console.println(&format!("\n{} (y/N)", prompt))?;
                let answer = console.read_line()?.unwrap_or_default();
                if answer.trim() == "y" {
                    Ok(Decision::Proceed)
                } else {
                    console.println("Canceled")?;
                    Ok(Decision::Declined)
                }
            }
            Mode::Ui => {
                let message = format!("{}\n\n{}", prompt, descriptions);
                if self.adapter.show_confirm_dialog(&message).await? {
                    Ok(Decision::Proceed)
                } else {
                    debug!("confirmation dialog canceled");
                    Ok(Decision::Declined)
                }
            }
        }
    }

    /// Tell the user nothing matched. Silent in `Yes` mode.
    pub async fn report_empty<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
        message: &str,
    ) -> Result<()> {
        match self.mode {
            Mode::Cli => console.println(message),
            Mode::Ui => self.adapter.show_alert(message).await,
            Mode::Yes => Ok(()),
        }
    }
}
