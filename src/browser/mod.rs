//! Browser automation module
//!
//! The only way the rest of the crate touches the browser. Indices at this
//! boundary are zero-based; implementations translate them as needed.

mod executor;
mod snapshot;

use async_trait::async_trait;

use crate::core::{Address, Result};

pub use executor::ScriptAdapter;
pub use snapshot::{build_snapshot, tabs_per_window};

/// A tab as reported by the browser, before normalization
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTab {
    pub id: Option<String>,
    pub title: Option<String>,
    pub url: String,
}

/// Capability surface of a scriptable browser
#[async_trait]
pub trait BrowserAdapter: Send + Sync {
    /// Number of open windows, in the browser's native order
    async fn list_windows(&self) -> Result<usize>;

    /// Tabs of one window, in native order
    async fn list_tabs(&self, window: usize) -> Result<Vec<RawTab>>;

    async fn close_tab(&self, address: Address) -> Result<()>;

    async fn close_window(&self, window: usize) -> Result<()>;

    async fn set_window_visible(&self, window: usize, visible: bool) -> Result<()>;

    async fn set_active_tab(&self, window: usize, tab: usize) -> Result<()>;

    /// Move a window in the stacking order; 0 is frontmost
    async fn set_window_order(&self, window: usize, index: usize) -> Result<()>;

    /// Bring the browser application to the front
    async fn activate_application(&self) -> Result<()>;

    async fn show_alert(&self, message: &str) -> Result<()>;

    /// Show a modal dialog. Returns false when the user cancels it.
    async fn show_confirm_dialog(&self, message: &str) -> Result<bool>;

    /// Name used in messages and logs
    fn name(&self) -> &str;
}
