//! Dashboard routes - KPI cards, charts and the four dashboard tabs
//!
//! Structure:
//! - api.rs: JSON snapshot and tab partials
//! - page.rs: Full page, tab bodies and Chart.js configuration

pub mod api;
pub mod page;

pub use api::{api_dashboard, htmx_dashboard_tab};

pub use page::page_dashboard;
