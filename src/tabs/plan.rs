//! Close planning
//!
//! Turns a set of candidate tabs into an ordered list of close calls that
//! stay valid while they run: later addresses are closed first, and a
//! window is closed outright when its last remaining tab is a candidate.

use std::collections::BTreeSet;

use tracing::{debug, info};

use crate::browser::{tabs_per_window, BrowserAdapter};
use crate::core::{Address, Result, TabRecord};

/// One browser call of a close run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseAction {
    Tab(Address),
    Window(usize),
}

/// Order the closures for `candidates`, taken from `snapshot`
pub fn plan_closures(snapshot: &[TabRecord], candidates: &[TabRecord]) -> Vec<CloseAction> {
    let mut remaining = tabs_per_window(snapshot);
    let addresses: BTreeSet<Address> = candidates.iter().map(TabRecord::address).collect();

    addresses
        .into_iter()
        .rev()
        .map(|address| match remaining.get_mut(address.window) {
            Some(count) if *count == 1 => {
                *count = 0;
                CloseAction::Window(address.window)
            }
            Some(count) => {
                *count = count.saturating_sub(1);
                CloseAction::Tab(address)
            }
            None => CloseAction::Tab(address),
        })
        .collect()
}

/// Run the plan sequentially. Stops at the first failing call, so a run
/// can close some tabs and then report an error.
pub async fn execute_plan(adapter: &dyn BrowserAdapter, plan: &[CloseAction]) -> Result<usize> {
    for action in plan {
        debug!("{:?}", action);
        match *action {
            CloseAction::Tab(address) => adapter.close_tab(address).await?,
            CloseAction::Window(window) => adapter.close_window(window).await?,
        }
    }
    info!("closed {} tab(s) in {}", plan.len(), adapter.name());
    Ok(plan.len())
}
