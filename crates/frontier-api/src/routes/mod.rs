//! Route modules for the API server
//!
//! Each module follows a consistent structure:
//! - mod.rs: Module declaration and exports
//! - api.rs: JSON API endpoints and HTMX partials
//! - page.rs: Full page rendering

pub mod admin;
pub mod dashboard;
pub mod reports;
pub mod rules;
pub mod transactions;

use frontier_core::{CategoryFilter, RecordFilter};
use std::collections::HashMap;
use std::str::FromStr;

/// Query text as typed (for echoing back into the search box)
pub(crate) fn query_text(params: &HashMap<String, String>) -> &str {
    params.get("q").map(|s| s.as_str()).unwrap_or("")
}

/// Raw category value, "all" when absent
pub(crate) fn category_text<'a>(params: &'a HashMap<String, String>, key: &str) -> &'a str {
    params.get(key).map(|s| s.as_str()).unwrap_or("all")
}

/// Build a record filter from `q` and the given category parameter
pub(crate) fn record_filter<C>(params: &HashMap<String, String>, key: &str) -> RecordFilter<C>
where
    C: FromStr + Copy + PartialEq,
{
    RecordFilter::new(
        query_text(params),
        CategoryFilter::parse_lenient(params.get(key).map(|s| s.as_str())),
    )
}
