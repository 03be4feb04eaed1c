//! Reports routes
//!
//! Stats, the generate form, the type-filtered report table and the
//! simulated view/download actions.

pub mod api;
pub mod page;

pub use api::{
    api_report_download, api_report_generate, api_report_view, api_reports, htmx_report_download,
    htmx_report_generate, htmx_report_view, htmx_reports_list,
};
pub use page::page_reports;
