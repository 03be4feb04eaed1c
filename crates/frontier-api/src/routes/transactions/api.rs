//! Transactions API endpoints - JSON API and HTMX partial responses
//!
//! Endpoints:
//! - api_transactions: Filtered, paginated transactions (JSON)
//! - api_transactions_import: Simulated import (JSON)
//! - htmx_transactions_list: Transaction list (HTML fragment)
//! - htmx_transactions_import: Simulated import (toast only)

use super::page::render_transactions_list;
use crate::render;
use crate::AppState;
use axum::extract::Query;
use frontier_core::filter::paginate;
use frontier_core::types::TransactionStatus;
use frontier_core::NotificationBuffer;
use std::collections::HashMap;

/// Get transactions with search, status filter and pagination (JSON API)
pub async fn api_transactions(
    state: axum::extract::State<AppState>,
    params: Query<HashMap<String, String>>,
) -> axum::Json<serde_json::Value> {
    let workspace = state.workspace.read().await;
    let store = &workspace.transactions;
    let filter = crate::routes::record_filter::<TransactionStatus>(&params, "status");
    let page = params.get("page").and_then(|s| s.parse().ok()).unwrap_or(1);
    let per_page = params
        .get("limit")
        .and_then(|s| s.parse().ok())
        .unwrap_or(state.config.pagination.records_per_page);

    let paged = paginate(store.filter(&filter), page, per_page);

    axum::Json(serde_json::json!({
        "transactions": paged.items,
        "page": paged.page,
        "totalPages": paged.total_pages,
        "filteredCount": paged.total,
        "totalCount": store.len(),
        "totalAmount": store.total_amount(),
        "statusCounts": store.status_counts(),
        "currency": state.config.currency.code,
    }))
}

/// Simulated transaction file import (JSON API)
pub async fn api_transactions_import(state: axum::extract::State<AppState>) -> axum::Json<serde_json::Value> {
    let workspace = state.workspace.read().await;
    let mut notifications = NotificationBuffer::new();
    workspace.transactions.import_file(&mut notifications);

    axum::Json(serde_json::json!({
        "imported": 0,
        "notifications": notifications.into_vec(),
    }))
}

/// HTMX: Transaction list - Partial page update
pub async fn htmx_transactions_list(
    state: axum::extract::State<AppState>,
    params: Query<HashMap<String, String>>,
) -> axum::response::Html<String> {
    let workspace = state.workspace.read().await;
    let query = crate::routes::query_text(&params);
    let status = crate::routes::category_text(&params, "status");
    let filter = crate::routes::record_filter::<TransactionStatus>(&params, "status");
    let page = params.get("page").and_then(|s| s.parse().ok()).unwrap_or(1);

    axum::response::Html(render_transactions_list(
        &workspace.transactions,
        &filter,
        page,
        &state.config,
        query,
        status,
    ))
}

/// HTMX: Simulated import - responds with a toast only
pub async fn htmx_transactions_import(state: axum::extract::State<AppState>) -> axum::response::Html<String> {
    let workspace = state.workspace.read().await;
    let mut notifications = NotificationBuffer::new();
    workspace.transactions.import_file(&mut notifications);

    axum::response::Html(render::toasts(
        &notifications.into_vec(),
        state.config.notifications.dismiss_after_ms,
    ))
}
