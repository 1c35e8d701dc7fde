//! Filter engine
//!
//! Case-insensitive substring matching over tab titles and URLs. A query
//! shaped like `winIdx,tabIdx` bypasses matching and selects that address.

use crate::core::{Address, Scope, TabRecord, DECORATION};

/// Tabs matching `query` in snapshot order. No query matches everything.
pub fn filter(records: &[TabRecord], query: Option<&str>, scope: Scope) -> Vec<TabRecord> {
    match query {
        Some(query) => filter_any(records, &[query], scope),
        None => records.to_vec(),
    }
}

/// Tabs matching any of `keywords` in snapshot order. A single keyword that
/// parses as an address resolves to the tab at that address, if any.
pub fn filter_any<S: AsRef<str>>(
    records: &[TabRecord],
    keywords: &[S],
    scope: Scope,
) -> Vec<TabRecord> {
    if let [only] = keywords {
        if let Some(address) = Address::parse(only.as_ref()) {
            return resolve_address(records, address).into_iter().collect();
        }
    }

    let needles: Vec<String> = keywords.iter().map(|k| k.as_ref().to_lowercase()).collect();
    if needles.is_empty() {
        return records.to_vec();
    }

    records
        .iter()
        .filter(|record| needles.iter().any(|needle| matches(record, needle, scope)))
        .cloned()
        .collect()
}

/// The tab at `address`, if the snapshot has one there
pub fn resolve_address(records: &[TabRecord], address: Address) -> Option<TabRecord> {
    records.iter().find(|r| r.address() == address).cloned()
}

/// First tab whose title is exactly `title`
pub fn find_by_title<'a>(records: &'a [TabRecord], title: &str) -> Option<&'a TabRecord> {
    records.iter().find(|r| r.title == title)
}

/// Drop a trailing `" >> url"` added by line-oriented output
pub fn strip_decoration(line: &str) -> &str {
    match line.rfind(DECORATION) {
        Some(pos) => &line[..pos],
        None => line,
    }
}

fn matches(record: &TabRecord, needle: &str, scope: Scope) -> bool {
    let in_title = || record.title.to_lowercase().contains(needle);
    let in_url = || record.url.to_lowercase().contains(needle);
    match scope {
        Scope::TitleOnly => in_title(),
        Scope::UrlOnly => in_url(),
        Scope::TitleOrUrl => in_title() || in_url(),
    }
}
