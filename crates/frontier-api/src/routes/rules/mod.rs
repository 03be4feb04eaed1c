//! Matching rule routes - list, create form, toggle, delete
//!
//! Structure:
//! - api.rs: JSON API and HTMX endpoints
//! - page.rs: Full page rendering and shared fragments

pub mod api;
pub mod page;

pub use api::{
    api_rule_create,
    api_rule_delete,
    api_rule_toggle,
    api_rules,
    htmx_rule_create,
    htmx_rule_delete,
    htmx_rule_form,
    htmx_rule_form_close,
    htmx_rule_toggle,
    htmx_rules_list,
};

pub use page::page_rules;
