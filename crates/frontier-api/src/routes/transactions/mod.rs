//! Transaction routes - list, search, status filter, simulated import
//!
//! Structure:
//! - api.rs: JSON API and HTMX endpoints
//! - page.rs: Full page rendering

pub mod api;
pub mod page;

pub use api::{
    api_transactions,
    api_transactions_import,
    htmx_transactions_import,
    htmx_transactions_list,
};

pub use page::page_transactions;
