//! Duplicate detection by URL

use std::collections::HashSet;

use crate::core::TabRecord;

/// Tabs whose URL already appeared earlier in snapshot order.
/// The first occurrence of every URL is kept out of the result.
pub fn find_duplicates(records: &[TabRecord]) -> Vec<TabRecord> {
    let mut seen_urls = HashSet::new();
    let mut duplicates = Vec::new();

    for record in records {
        if !seen_urls.insert(record.url.as_str()) {
            duplicates.push(record.clone());
        }
    }

    duplicates
}
