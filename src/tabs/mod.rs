//! Tab selection logic
//!
//! Pure functions over a snapshot: filtering, duplicate detection and
//! close planning.

pub mod dedup;
pub mod filter;
pub mod plan;

pub use dedup::find_duplicates;
pub use filter::{filter, filter_any, find_by_title, resolve_address, strip_decoration};
pub use plan::{execute_plan, plan_closures, CloseAction};
