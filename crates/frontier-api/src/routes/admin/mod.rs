//! Admin panel routes - users, system settings, audit trail, security
//!
//! Structure:
//! - api.rs: JSON API and HTMX endpoints
//! - page.rs: Full page rendering and per-tab fragments

pub mod api;
pub mod page;

pub use api::{
    api_audit,
    api_settings,
    api_users,
    htmx_add_user,
    htmx_admin_tab,
    htmx_audit_list,
    htmx_users_list,
};

pub use page::page_admin;
