//! Income, expense and balance totals over the ledger.

mod aggregation;
mod endpoint;

pub use aggregation::{DateRange, Summary, get_summary};
pub use endpoint::get_summary_endpoint;
