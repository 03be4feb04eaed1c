//! Rules API endpoints - JSON API and HTMX partial responses
//!
//! Endpoints:
//! - api_rules: Rules in priority order (JSON)
//! - api_rule_create / api_rule_toggle / api_rule_delete: Mutations (JSON)
//! - htmx_rules_list: Rule list (HTML fragment)
//! - htmx_rule_form / htmx_rule_form_close: Create form slot
//! - htmx_rule_create / htmx_rule_toggle / htmx_rule_delete: Mutations (HTML + toasts)

use super::page::{render_rule_form, render_rules_list};
use crate::error::ApiError;
use crate::render;
use crate::AppState;
use axum::extract::{Form, Path, Query};
use axum::http::StatusCode;
use frontier_core::models::DEFAULT_RULE_PRIORITY;
use frontier_core::types::RuleType;
use frontier_core::{CoreError, NotificationBuffer, RuleDraft};
use std::collections::HashMap;

/// Get rules with search and type filter (JSON API)
pub async fn api_rules(
    state: axum::extract::State<AppState>,
    params: Query<HashMap<String, String>>,
) -> axum::Json<serde_json::Value> {
    let workspace = state.workspace.read().await;
    let store = &workspace.rules;
    let filter = crate::routes::record_filter::<RuleType>(&params, "type");

    axum::Json(serde_json::json!({
        "rules": store.filter(&filter),
        "activeCount": store.active_count(),
        "inactiveCount": store.inactive_count(),
        "total": store.len(),
    }))
}

/// Create a rule from a JSON draft (JSON API)
pub async fn api_rule_create(
    state: axum::extract::State<AppState>,
    body: String,
) -> Result<(StatusCode, axum::Json<serde_json::Value>), ApiError> {
    let draft: RuleDraft = if body.trim().is_empty() {
        RuleDraft::default()
    } else {
        serde_json::from_str(&body).map_err(|e| ApiError::BadRequest {
            message: format!("Invalid rule payload: {}", e),
        })?
    };

    let mut workspace = state.workspace.write().await;
    let mut notifications = NotificationBuffer::new();
    let rule = workspace.rules.create(draft, &mut notifications)?;

    Ok((
        StatusCode::CREATED,
        axum::Json(serde_json::json!({
            "rule": rule,
            "notifications": notifications.into_vec(),
        })),
    ))
}

/// Flip a rule's active flag (JSON API)
pub async fn api_rule_toggle(
    state: axum::extract::State<AppState>,
    Path(id): Path<String>,
) -> Result<axum::Json<serde_json::Value>, ApiError> {
    let mut workspace = state.workspace.write().await;
    let mut notifications = NotificationBuffer::new();
    let rule = workspace
        .rules
        .toggle(&id, &mut notifications)
        .cloned()
        .ok_or(CoreError::RuleNotFound { id })?;

    Ok(axum::Json(serde_json::json!({
        "rule": rule,
        "notifications": notifications.into_vec(),
    })))
}

/// Delete a rule (JSON API)
pub async fn api_rule_delete(
    state: axum::extract::State<AppState>,
    Path(id): Path<String>,
) -> Result<axum::Json<serde_json::Value>, ApiError> {
    let mut workspace = state.workspace.write().await;
    let mut notifications = NotificationBuffer::new();
    let rule = workspace
        .rules
        .delete(&id, &mut notifications)
        .ok_or(CoreError::RuleNotFound { id })?;

    Ok(axum::Json(serde_json::json!({
        "deleted": rule.id,
        "notifications": notifications.into_vec(),
    })))
}

/// HTMX: Rule list - Partial page update
pub async fn htmx_rules_list(
    state: axum::extract::State<AppState>,
    params: Query<HashMap<String, String>>,
) -> axum::response::Html<String> {
    let workspace = state.workspace.read().await;
    let filter = crate::routes::record_filter::<RuleType>(&params, "type");
    axum::response::Html(render_rules_list(&workspace.rules, &filter))
}

/// HTMX: Open an empty create form
pub async fn htmx_rule_form() -> axum::response::Html<String> {
    axum::response::Html(render_rule_form(&RuleDraft::default()))
}

/// HTMX: Close the create form without saving
pub async fn htmx_rule_form_close() -> axum::response::Html<String> {
    axum::response::Html(String::new())
}

/// HTMX: Save the create form
///
/// On success the form slot is emptied and the list is refreshed out of
/// band; on failure the form comes back with the entered values.
pub async fn htmx_rule_create(
    state: axum::extract::State<AppState>,
    Form(params): Form<HashMap<String, String>>,
) -> axum::response::Html<String> {
    let draft = draft_from_form(&params);
    let mut workspace = state.workspace.write().await;
    let mut notifications = NotificationBuffer::new();

    let slot = match workspace.rules.create(draft.clone(), &mut notifications) {
        Ok(_) => {
            let filter = crate::routes::record_filter::<RuleType>(&params, "type");
            format!(
                "<div id='rules-content' hx-swap-oob='innerHTML'>{}</div>",
                render_rules_list(&workspace.rules, &filter)
            )
        }
        Err(_) => render_rule_form(&draft),
    };

    axum::response::Html(format!(
        "{}{}",
        slot,
        render::toasts(&notifications.into_vec(), state.config.notifications.dismiss_after_ms)
    ))
}

/// HTMX: Toggle a rule and re-render the list
pub async fn htmx_rule_toggle(
    state: axum::extract::State<AppState>,
    Path(id): Path<String>,
    Form(params): Form<HashMap<String, String>>,
) -> axum::response::Html<String> {
    let mut workspace = state.workspace.write().await;
    let mut notifications = NotificationBuffer::new();
    workspace.rules.toggle(&id, &mut notifications);

    let filter = crate::routes::record_filter::<RuleType>(&params, "type");
    axum::response::Html(format!(
        "{}{}",
        render_rules_list(&workspace.rules, &filter),
        render::toasts(&notifications.into_vec(), state.config.notifications.dismiss_after_ms)
    ))
}

/// HTMX: Delete a rule and re-render the list
pub async fn htmx_rule_delete(
    state: axum::extract::State<AppState>,
    Path(id): Path<String>,
    Form(params): Form<HashMap<String, String>>,
) -> axum::response::Html<String> {
    let mut workspace = state.workspace.write().await;
    let mut notifications = NotificationBuffer::new();
    workspace.rules.delete(&id, &mut notifications);

    let filter = crate::routes::record_filter::<RuleType>(&params, "type");
    axum::response::Html(format!(
        "{}{}",
        render_rules_list(&workspace.rules, &filter),
        render::toasts(&notifications.into_vec(), state.config.notifications.dismiss_after_ms)
    ))
}

/// Read the create form; a blank or non-numeric priority falls back to the default
fn draft_from_form(params: &HashMap<String, String>) -> RuleDraft {
    let field = |key: &str| params.get(key).cloned().unwrap_or_default();
    RuleDraft {
        name: field("name"),
        description: field("description"),
        conditions: field("conditions"),
        priority: params
            .get("priority")
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(DEFAULT_RULE_PRIORITY),
        rule_type: params
            .get("rule_type")
            .and_then(|t| t.parse().ok())
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::*;

    #[test]
    fn test_draft_from_form_defaults() {
        let mut params = HashMap::new();
        params.insert("name".to_string(), "Batch".to_string());
        params.insert("priority".to_string(), "soon".to_string());
        params.insert("rule_type".to_string(), "manual".to_string());
        let draft = draft_from_form(&params);
        assert_eq!(draft.priority, DEFAULT_RULE_PRIORITY);
        assert_eq!(draft.rule_type, RuleType::Manual);
        assert_eq!(draft.description, "");
    }

    #[tokio::test]
    async fn test_api_rules_priority_order() {
        let (router, _) = app();
        let (status, body) = send(&router, get("/api/rules")).await;
        assert_eq!(status, StatusCode::OK);
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["rules"][0]["id"], "RULE001");
        assert_eq!(value["activeCount"], 3);
        assert_eq!(value["inactiveCount"], 1);
    }

    #[tokio::test]
    async fn test_api_create_rejects_missing_name() {
        let (router, state) = app();
        let (status, body) = send(
            &router,
            post_json("/api/rules", r#"{"name":"  ","description":"Something"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body.contains("VALIDATION_ERROR"));
        assert_eq!(state.workspace.read().await.rules.len(), 4);
    }

    #[tokio::test]
    async fn test_api_create_assigns_next_id() {
        let (router, _) = app();
        let (status, body) = send(
            &router,
            post_json(
                "/api/rules",
                r#"{"name":"Batch Match","description":"Batch deposits","type":"manual"}"#,
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["rule"]["id"], "RULE005");
        assert_eq!(value["rule"]["priority"], 5);
        assert_eq!(value["rule"]["isActive"], true);
        assert_eq!(value["notifications"][0]["title"], "Rule Created");
    }

    #[tokio::test]
    async fn test_api_create_malformed_json() {
        let (router, _) = app();
        let (status, _) = send(&router, post_json("/api/rules", "{not json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_api_toggle_missing_rule() {
        let (router, _) = app();
        let (status, body) = send(&router, post_json("/api/rules/RULE999/toggle", "")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("RULE_NOT_FOUND"));
    }

    #[tokio::test]
    async fn test_htmx_create_failure_keeps_form() {
        let (router, state) = app();
        let (status, body) = send(
            &router,
            post_form("/rules", "name=Half&description=&rule_type=manual&priority=3"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Create New Matching Rule"));
        assert!(body.contains("value='Half'"));
        assert!(body.contains("Validation Error"));
        assert_eq!(state.workspace.read().await.rules.len(), 4);
    }

    #[tokio::test]
    async fn test_htmx_create_success_refreshes_list() {
        let (router, state) = app();
        let (_, body) = send(
            &router,
            post_form("/rules", "name=Batch+Match&description=Batch+deposits&priority=1&q=&type=all"),
        )
        .await;
        assert!(body.contains("hx-swap-oob='innerHTML'"));
        assert!(body.contains("4 active rules, 1 inactive"));
        assert!(body.contains("Rule Created"));
        assert!(!body.contains("Create New Matching Rule"));
        assert_eq!(state.workspace.read().await.rules.len(), 5);
    }

    #[tokio::test]
    async fn test_htmx_toggle_twice_restores() {
        let (router, state) = app();
        let (_, first) = send(&router, post_form("/rules/RULE004/toggle", "q=&type=all")).await;
        assert!(first.contains("4 active rules, 0 inactive"));
        assert!(first.contains("has been enabled."));
        let (_, second) = send(&router, post_form("/rules/RULE004/toggle", "q=&type=all")).await;
        assert!(second.contains("3 active rules, 1 inactive"));
        assert!(second.contains("has been disabled."));
        let workspace = state.workspace.read().await;
        assert!(!workspace.rules.get("RULE004").unwrap().is_active);
    }

    #[tokio::test]
    async fn test_htmx_delete_missing_is_noop() {
        let (router, state) = app();
        let (status, body) = send(&router, post_form("/rules/RULE999/delete", "")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(!body.contains("toast-region"));
        assert_eq!(state.workspace.read().await.rules.len(), 4);
    }

    #[tokio::test]
    async fn test_htmx_delete_removes_rule() {
        let (router, _) = app();
        let (_, body) = send(&router, post_form("/rules/RULE002/delete", "")).await;
        assert!(body.contains("Rule Deleted"));
        let (list, toasts) = body.split_once("toast-region").unwrap();
        assert!(!list.contains("id='rule-RULE002'"));
        assert!(list.contains("id='rule-RULE001'"));
        assert!(list.contains("2 active rules, 1 inactive"));
        assert!(toasts.contains("Reference Number Match"));
    }
}
