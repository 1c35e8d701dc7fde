//! Output formatting
//!
//! `list` emits one JSON object (`{"items": [...]}`) shaped for launcher
//! front-ends; `titles` emits `title >> url` lines.

use serde::{Deserialize, Serialize};

use crate::core::{Result, TabRecord};

/// One entry of the `list` JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    pub id: Option<String>,
    pub title: String,
    pub url: String,
    #[serde(rename = "winIdx")]
    pub win_idx: usize,
    #[serde(rename = "tabIdx")]
    pub tab_idx: usize,
    /// Value handed back to `close`/`focus` when the entry is picked
    pub arg: String,
    pub subtitle: String,
}

impl ListItem {
    /// Synthetic first entry whose `arg` is the query, so picking it
    /// closes every tab the query matched
    pub fn select_all(query: &str) -> Self {
        Self {
            id: Some("all".to_string()),
            title: "Close all".to_string(),
            url: String::new(),
            win_idx: 0,
            tab_idx: 0,
            arg: query.to_string(),
            subtitle: "select all items".to_string(),
        }
    }
}

impl From<&TabRecord> for ListItem {
    fn from(record: &TabRecord) -> Self {
        Self {
            id: record.id.clone(),
            title: record.title.clone(),
            url: record.url.clone(),
            win_idx: record.window_index,
            tab_idx: record.tab_index,
            arg: record.arg(),
            subtitle: record.subtitle().to_string(),
        }
    }
}

/// Top-level `list` document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOutput {
    pub items: Vec<ListItem>,
}

/// Render `list` output. `select_all` carries the query when the
/// "Close all" entry is requested.
pub fn render_list(records: &[TabRecord], select_all: Option<&str>) -> Result<String> {
    let items = select_all
        .map(ListItem::select_all)
        .into_iter()
        .chain(records.iter().map(ListItem::from))
        .collect();
    Ok(serde_json::to_string(&ListOutput { items })?)
}

/// Render `titles` output, one line per tab
pub fn render_titles(records: &[TabRecord]) -> Vec<String> {
    records.iter().map(TabRecord::describe).collect()
}
