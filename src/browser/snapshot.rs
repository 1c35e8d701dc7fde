//! Tab snapshot construction
//!
//! One enumeration pass over every window and tab, in native order.

use tracing::debug;

use crate::browser::BrowserAdapter;
use crate::core::{Result, TabRecord};

/// Read every open tab. Addresses are the zero-based enumeration positions
/// and are only valid until the next tab is closed.
pub async fn build_snapshot(adapter: &dyn BrowserAdapter) -> Result<Vec<TabRecord>> {
    let windows = adapter.list_windows().await?;
    let mut records = Vec::new();

    for window_index in 0..windows {
        let tabs = adapter.list_tabs(window_index).await?;
        records.extend(tabs.into_iter().enumerate().map(|(tab_index, tab)| {
            TabRecord::new(
                tab.id,
                tab.title.unwrap_or_default(),
                tab.url,
                window_index,
                tab_index,
            )
        }));
    }

    debug!(
        "snapshot of {}: {} windows, {} tabs",
        adapter.name(),
        windows,
        records.len()
    );
    Ok(records)
}

/// Number of tabs per window, indexed by window position
pub fn tabs_per_window(records: &[TabRecord]) -> Vec<usize> {
    let mut counts = Vec::new();
    for record in records {
        if counts.len() <= record.window_index {
            counts.resize(record.window_index + 1, 0);
        }
        counts[record.window_index] += 1;
    }
    counts
}
