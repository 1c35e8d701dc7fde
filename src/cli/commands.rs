//! CLI commands
//!
//! One method per verb. Each takes at most one snapshot, then runs a
//! bounded sequence of browser calls, one after another.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use crate::browser::{build_snapshot, BrowserAdapter};
use crate::cli::args::{CloseArgs, Options, Verb};
use crate::cli::confirm::{ConfirmationGate, Console, Decision};
use crate::cli::output::{render_list, render_titles};
use crate::core::{Address, Result, Scope, TabRecord};
use crate::tabs::{
    execute_plan, filter, filter_any, find_by_title, find_duplicates, plan_closures,
    strip_decoration,
};

const NO_MATCHING_TABS: &str = "Couldn't find any matching tabs";
const NO_DUPLICATES: &str = "No duplicates found";
const CLOSE_PROMPT: &str = "Close these tabs?";
const DEDUP_PROMPT: &str = "Close these duplicates?";

/// What a command did. Every variant is a successful exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Number of entries printed by `list`/`titles`
    Listed(usize),
    /// Number of tabs closed
    Closed(usize),
    Focused(Address),
    /// Nothing matched; the empty message was rendered
    NoMatches,
    /// The user declined the confirmation
    Canceled,
    /// `focusByTitle` found no tab with that title
    NotFound,
}

/// Routes a parsed verb to the browser
pub struct Dispatcher<'a, R, W> {
    adapter: &'a dyn BrowserAdapter,
    options: Options,
    console: Console<R, W>,
}

impl<'a, R: BufRead, W: Write> Dispatcher<'a, R, W> {
    pub fn new(adapter: &'a dyn BrowserAdapter, options: Options, console: Console<R, W>) -> Self {
        Self {
            adapter,
            options,
            console,
        }
    }

    /// Hand back the console, e.g. to inspect captured output
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    pub async fn run(&mut self, verb: Verb) -> Result<Outcome> {
        debug!("{:?} (mode: {})", verb, self.options.mode);
        match verb {
            Verb::List { query } => self.list(query.as_deref()).await,
            Verb::Titles { query } => self.titles(query.as_deref()).await,
            Verb::Dedup => self.dedup().await,
            Verb::Close(args) => self.close(&args).await,
            Verb::CloseByTitles { titles } => self.close_by_titles(&titles).await,
            Verb::Focus { address } => self.focus(address.parse()?).await,
            Verb::FocusByTitle { title } => self.focus_by_title(&title).await,
        }
    }

    fn gate(&self) -> ConfirmationGate<'a> {
        ConfirmationGate::new(self.options.mode, self.adapter)
    }

    async fn list(&mut self, query: Option<&str>) -> Result<Outcome> {
        let snapshot = build_snapshot(self.adapter).await?;
        let items = filter(&snapshot, query, Scope::TitleOrUrl);
        let select_all = self
            .options
            .prepend_all_item
            .then(|| query.unwrap_or_default());

        self.console.println(&render_list(&items, select_all)?)?;
        Ok(Outcome::Listed(items.len()))
    }

    async fn titles(&mut self, query: Option<&str>) -> Result<Outcome> {
        let snapshot = build_snapshot(self.adapter).await?;
        let items = filter(&snapshot, query, Scope::TitleOrUrl);

        for line in render_titles(&items) {
            self.console.println(&line)?;
        }
        Ok(Outcome::Listed(items.len()))
    }

    async fn dedup(&mut self) -> Result<Outcome> {
        let snapshot = build_snapshot(self.adapter).await?;
        let duplicates = find_duplicates(&snapshot);
        self.confirm_and_close(&snapshot, &duplicates, DEDUP_PROMPT, NO_DUPLICATES)
            .await
    }

    async fn close(&mut self, args: &CloseArgs) -> Result<Outcome> {
        let snapshot = build_snapshot(self.adapter).await?;
        let candidates = filter_any(&snapshot, &args.terms, args.scope());

        if args.is_direct_address() {
            return self.close_now(&snapshot, &candidates).await;
        }
        self.confirm_and_close(&snapshot, &candidates, CLOSE_PROMPT, NO_MATCHING_TABS)
            .await
    }

    async fn close_by_titles(&mut self, titles: &[String]) -> Result<Outcome> {
        let snapshot = build_snapshot(self.adapter).await?;

        let mut candidates = Vec::new();
        for line in titles.iter().flat_map(|arg| arg.lines()) {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let title = strip_decoration(line);
            match find_by_title(&snapshot, title) {
                Some(record) => candidates.push(record.clone()),
                None => warn!("no tab titled {:?}", title),
            }
        }

        self.close_now(&snapshot, &candidates).await
    }

    async fn focus(&mut self, address: Address) -> Result<Outcome> {
        self.adapter.set_window_visible(address.window, true).await?;
        self.adapter
            .set_active_tab(address.window, address.tab)
            .await?;
        self.adapter.set_window_order(address.window, 0).await?;
        self.adapter.activate_application().await?;

        info!("focused {} in {}", address, self.adapter.name());
        Ok(Outcome::Focused(address))
    }

    async fn focus_by_title(&mut self, title: &str) -> Result<Outcome> {
        let snapshot = build_snapshot(self.adapter).await?;
        let title = strip_decoration(title);

        match find_by_title(&snapshot, title) {
            Some(record) => {
                let address = record.address();
                self.focus(address).await
            }
            None => {
                debug!("no tab titled {:?}", title);
                Ok(Outcome::NotFound)
            }
        }
    }

    /// Ask first, then close
    async fn confirm_and_close(
        &mut self,
        snapshot: &[TabRecord],
        candidates: &[TabRecord],
        prompt: &str,
        empty_message: &str,
    ) -> Result<Outcome> {
        let gate = self.gate();
        match gate
            .confirm(&mut self.console, candidates, prompt, empty_message)
            .await?
        {
            Decision::Proceed => self.execute_close(snapshot, candidates).await,
            Decision::Empty => Ok(Outcome::NoMatches),
            Decision::Declined => Ok(Outcome::Canceled),
        }
    }

    /// Close without asking; still reports when nothing matched
    async fn close_now(
        &mut self,
        snapshot: &[TabRecord],
        candidates: &[TabRecord],
    ) -> Result<Outcome> {
        if candidates.is_empty() {
            self.gate()
                .report_empty(&mut self.console, NO_MATCHING_TABS)
                .await?;
            return Ok(Outcome::NoMatches);
        }
        self.execute_close(snapshot, candidates).await
    }

    async fn execute_close(
        &mut self,
        snapshot: &[TabRecord],
        candidates: &[TabRecord],
    ) -> Result<Outcome> {
        let plan = plan_closures(snapshot, candidates);
        let closed = execute_plan(self.adapter, &plan).await?;
        Ok(Outcome::Closed(closed))
    }
}
