//! Admin API endpoints - JSON API and HTMX partial responses

use super::page::{render_admin_tabs, render_audit_list, render_users_list};
use crate::error::ApiError;
use crate::render;
use crate::AppState;
use axum::extract::{Path, Query};
use frontier_core::admin::{health_cards, security_controls};
use frontier_core::types::{Severity, UserStatus};
use frontier_core::{AdminTab, NotificationBuffer};
use std::collections::HashMap;

/// Get users with search and status filter (JSON API)
pub async fn api_users(
    state: axum::extract::State<AppState>,
    params: Query<HashMap<String, String>>,
) -> axum::Json<serde_json::Value> {
    let workspace = state.workspace.read().await;
    let filter = crate::routes::record_filter::<UserStatus>(&params, "status");

    axum::Json(serde_json::json!({
        "users": workspace.users.filter(&filter),
        "total": workspace.users.len(),
        "activeCount": workspace.users.active_count(),
    }))
}

/// Get audit entries with search and severity filter (JSON API)
pub async fn api_audit(
    state: axum::extract::State<AppState>,
    params: Query<HashMap<String, String>>,
) -> axum::Json<serde_json::Value> {
    let workspace = state.workspace.read().await;
    let log = &workspace.audit_log;
    let filter = crate::routes::record_filter::<Severity>(&params, "severity");

    axum::Json(serde_json::json!({
        "entries": log.filter(&filter),
        "total": log.len(),
        "warnings": log.count_by_severity(Severity::Warning),
        "errors": log.count_by_severity(Severity::Error),
    }))
}

/// System settings, health cards and security controls (JSON API)
pub async fn api_settings(state: axum::extract::State<AppState>) -> axum::Json<serde_json::Value> {
    let workspace = state.workspace.read().await;
    axum::Json(serde_json::json!({
        "settings": workspace.settings,
        "health": health_cards(),
        "security": security_controls(),
    }))
}

/// HTMX: Switch admin tab
pub async fn htmx_admin_tab(
    state: axum::extract::State<AppState>,
    Path(tab): Path<String>,
    params: Query<HashMap<String, String>>,
) -> Result<axum::response::Html<String>, ApiError> {
    let tab: AdminTab = tab.parse()?;
    let workspace = state.workspace.read().await;
    Ok(axum::response::Html(render_admin_tabs(tab, &workspace, &params)))
}

/// HTMX: User table - Partial page update
pub async fn htmx_users_list(
    state: axum::extract::State<AppState>,
    params: Query<HashMap<String, String>>,
) -> axum::response::Html<String> {
    let workspace = state.workspace.read().await;
    let filter = crate::routes::record_filter::<UserStatus>(&params, "status");
    axum::response::Html(render_users_list(&workspace.users, &filter))
}

/// HTMX: Audit entries - Partial page update
pub async fn htmx_audit_list(
    state: axum::extract::State<AppState>,
    params: Query<HashMap<String, String>>,
) -> axum::response::Html<String> {
    let workspace = state.workspace.read().await;
    let filter = crate::routes::record_filter::<Severity>(&params, "severity");
    axum::response::Html(render_audit_list(&workspace.audit_log, &filter))
}

/// HTMX: Add User - toast only, no user is created
pub async fn htmx_add_user(state: axum::extract::State<AppState>) -> axum::response::Html<String> {
    let workspace = state.workspace.read().await;
    let mut notifications = NotificationBuffer::new();
    workspace.users.add_user(&mut notifications);

    axum::response::Html(render::toasts(
        &notifications.into_vec(),
        state.config.notifications.dismiss_after_ms,
    ))
}

#[cfg(test)]
mod tests {
    use crate::test_support::*;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_api_users_by_status() {
        let (router, _) = app();
        let (status, body) = send(&router, get("/api/users?status=inactive")).await;
        assert_eq!(status, StatusCode::OK);
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["users"].as_array().unwrap().len(), 1);
        assert_eq!(value["users"][0]["name"], "Lisa Wong");
        assert_eq!(value["activeCount"], 3);
    }

    #[tokio::test]
    async fn test_api_audit_search() {
        let (router, _) = app();
        let (_, body) = send(&router, get("/api/audit?q=BATCH_20240627")).await;
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["entries"].as_array().unwrap().len(), 1);
        assert_eq!(value["warnings"], 1);
    }

    #[tokio::test]
    async fn test_api_settings() {
        let (router, _) = app();
        let (_, body) = send(&router, get("/api/settings")).await;
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["settings"].as_array().unwrap().len(), 6);
        assert_eq!(value["security"].as_array().unwrap().len(), 6);
    }

    #[tokio::test]
    async fn test_tab_switch() {
        let (router, _) = app();
        let (status, body) = send(&router, htmx_get("/admin/tab/security")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Security Management"));
        assert!(body.contains("SOX Controls"));
    }

    #[tokio::test]
    async fn test_unknown_tab_is_not_found() {
        let (router, _) = app();
        let (status, body) = send(&router, htmx_get("/admin/tab/billing")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("UNKNOWN_TAB"));
    }

    #[tokio::test]
    async fn test_add_user_is_simulated() {
        let (router, state) = app();
        let (_, body) = send(&router, post_form("/admin/users/new", "")).await;
        assert!(body.contains("New user creation form would open in a production system."));
        assert_eq!(state.workspace.read().await.users.len(), 4);
    }

    #[tokio::test]
    async fn test_audit_list_partial() {
        let (router, _) = app();
        let (_, body) = send(&router, htmx_get("/admin/audit/list?severity=warning&q=")).await;
        assert!(body.contains("Failed login attempt from IP: 192.168.1.100"));
        assert!(!body.contains("Exported reconciliation report"));
    }
}
